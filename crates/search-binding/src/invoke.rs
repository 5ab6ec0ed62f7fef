use crate::error::{RemoteInvocationError, Result};
use async_trait::async_trait;
use rpc::HostClient;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tarpc::{client, context, tokio_serde::formats::Bincode};
use tracing::{debug, info};

/// The host's request/response dispatch, reduced to one call.
///
/// `command` is fully qualified (`plugin:<namespace>|<endpoint>`) and `args`
/// is the endpoint's argument object.
#[async_trait]
pub trait Invoke: Send + Sync {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value>;
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for Arc<T> {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        (**self).invoke(command, args).await
    }
}

#[async_trait]
impl<T: Invoke + ?Sized> Invoke for &T {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        (**self).invoke(command, args).await
    }
}

/// Reaches the host runtime through its tarpc socket.
#[derive(Clone)]
pub struct TarpcInvoker {
    client: HostClient,
}

impl TarpcInvoker {
    pub fn new(client: HostClient) -> Self {
        Self { client }
    }

    /// Connect to the host listening on `socket_path`.
    pub async fn connect(socket_path: impl AsRef<Path>) -> std::io::Result<Self> {
        let socket_path = socket_path.as_ref();
        let mut transport = tarpc::serde_transport::unix::connect(socket_path, Bincode::default);
        transport.config_mut().max_frame_length(usize::MAX);
        let transport = transport.await?;

        info!("Connected to host at {socket_path:?}");
        let client = HostClient::new(client::Config::default(), transport).spawn();
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Invoke for TarpcInvoker {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        let payload = serde_json::to_string(&args)
            .map_err(|e| RemoteInvocationError::payload(command, e))?;

        let reply = self
            .client
            .invoke(context::current(), command.to_string(), payload)
            .await
            .map_err(|e| RemoteInvocationError::transport(command, e))?;

        match reply {
            Ok(body) => {
                debug!(command, len = body.len(), "host replied");
                serde_json::from_str(&body).map_err(|e| RemoteInvocationError::payload(command, e))
            }
            Err(message) => Err(RemoteInvocationError::remote(command, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::prelude::*;
    use rpc::Host;
    use serde_json::json;
    use tarpc::server::{self, Channel};

    #[derive(Clone)]
    struct EchoHost;

    impl Host for EchoHost {
        async fn invoke(
            self,
            _c: context::Context,
            command: String,
            payload: String,
        ) -> std::result::Result<String, String> {
            match command.as_str() {
                "plugin:test|echo" => Ok(payload),
                "plugin:test|garbage" => Ok("not json".to_string()),
                _ => Err(format!("command {command} not found")),
            }
        }
    }

    async fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
        tokio::spawn(fut);
    }

    fn connect_in_memory() -> TarpcInvoker {
        let (client_transport, server_transport) = tarpc::transport::channel::unbounded();
        tokio::spawn(
            server::BaseChannel::with_defaults(server_transport)
                .execute(EchoHost.serve())
                .for_each(spawn),
        );
        TarpcInvoker::new(HostClient::new(client::Config::default(), client_transport).spawn())
    }

    #[tokio::test]
    async fn test_payload_round_trips_through_host() {
        let invoker = connect_in_memory();
        let reply = invoker
            .invoke("plugin:test|echo", json!({ "index": 3 }))
            .await
            .unwrap();
        assert_eq!(reply, json!({ "index": 3 }));
    }

    #[tokio::test]
    async fn test_host_failure_is_remote_error() {
        let invoker = connect_in_memory();
        let err = invoker
            .invoke("plugin:test|missing", json!({}))
            .await
            .unwrap_err();
        assert_eq!(
            err.remote_message(),
            Some("command plugin:test|missing not found")
        );
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_payload_error() {
        let invoker = connect_in_memory();
        let err = invoker
            .invoke("plugin:test|garbage", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteInvocationError::Payload { .. }));
    }

    #[tokio::test]
    async fn test_dropped_host_is_transport_error() {
        let (client_transport, server_transport) = tarpc::transport::channel::unbounded();
        drop(server_transport);
        let invoker =
            TarpcInvoker::new(HostClient::new(client::Config::default(), client_transport).spawn());

        let err = invoker
            .invoke("plugin:test|echo", json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteInvocationError::Transport { .. }));
    }

    async fn echo_through<I: Invoke>(invoker: I, value: Value) -> Value {
        invoker.invoke("plugin:test|echo", value).await.unwrap()
    }

    #[tokio::test]
    async fn test_shared_invoker() {
        let invoker = Arc::new(connect_in_memory());
        assert_eq!(echo_through(invoker.clone(), json!("x")).await, json!("x"));
        assert_eq!(echo_through(&*invoker, json!(1)).await, json!(1));
    }
}
