//! In-process stand-in for the host plugin.

use async_trait::async_trait;
use search_binding::{Endpoint, Invoke, RemoteInvocationError, Result};
use serde_json::{Value, json};
use std::sync::Mutex;

pub const NAMESPACE: &str = "everything";

#[derive(Default)]
struct State {
    search: String,
    flags: Value,
    sort: Value,
    offset: usize,
    max_results: Option<usize>,
    results: Vec<String>,
}

/// Matches the search text as a case-insensitive substring of each path in
/// a fixed catalog.
pub struct FakeProvider {
    catalog: Vec<String>,
    state: Mutex<State>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new<S: Into<String>>(catalog: impl IntoIterator<Item = S>) -> Self {
        Self {
            catalog: catalog.into_iter().map(Into::into).collect(),
            state: Mutex::new(State::default()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn flags(&self) -> Value {
        self.state.lock().unwrap().flags.clone()
    }

    pub fn sort(&self) -> Value {
        self.state.lock().unwrap().sort.clone()
    }

    fn dispatch(&self, endpoint: Endpoint, args: &Value) -> std::result::Result<Value, String> {
        let mut state = self.state.lock().unwrap();
        match endpoint {
            Endpoint::SetSearch => {
                state.search = field(args, "query")?
                    .as_str()
                    .ok_or("query must be a string")?
                    .to_string();
                Ok(Value::Null)
            }
            Endpoint::SetRequestFlags => {
                state.flags = field(args, "flags")?.clone();
                Ok(Value::Null)
            }
            Endpoint::SetSort => {
                state.sort = field(args, "sort")?.clone();
                Ok(Value::Null)
            }
            Endpoint::SetResultOffset => {
                state.offset = integer(args, "offset")?;
                Ok(Value::Null)
            }
            Endpoint::SetMaxResults => {
                state.max_results = Some(integer(args, "maxResults")?);
                Ok(Value::Null)
            }
            Endpoint::Query => {
                let needle = state.search.to_lowercase();
                let limit = state.max_results.unwrap_or(usize::MAX);
                state.results = self
                    .catalog
                    .iter()
                    .filter(|path| path.to_lowercase().contains(&needle))
                    .skip(state.offset)
                    .take(limit)
                    .cloned()
                    .collect();
                Ok(Value::Null)
            }
            Endpoint::GetNumResults => Ok(json!(state.results.len())),
            Endpoint::GetFullPathResults => Ok(json!(state.results)),
            Endpoint::GetFileNameResults => {
                Ok(json!(state.results.iter().map(|p| file_name(p)).collect::<Vec<_>>()))
            }
            Endpoint::GetResultFullPath => {
                let index = integer(args, "index")?;
                let path = state.results.get(index).ok_or("Invalid index")?;
                Ok(json!(path))
            }
            Endpoint::GetResultFileName => {
                let index = integer(args, "index")?;
                let path = state.results.get(index).ok_or("Invalid index")?;
                Ok(json!(file_name(path)))
            }
        }
    }
}

#[async_trait]
impl Invoke for FakeProvider {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        self.calls.lock().unwrap().push(command.to_string());

        let endpoint = match Endpoint::parse_command(command) {
            Some((NAMESPACE, endpoint)) => endpoint,
            _ => {
                return Err(RemoteInvocationError::remote(
                    command,
                    format!("command {command} not found"),
                ));
            }
        };

        self.dispatch(endpoint, &args)
            .map_err(|message| RemoteInvocationError::remote(command, message))
    }
}

fn field<'a>(args: &'a Value, key: &str) -> std::result::Result<&'a Value, String> {
    args.get(key).ok_or_else(|| format!("missing argument `{key}`"))
}

fn integer(args: &Value, key: &str) -> std::result::Result<usize, String> {
    field(args, key)?
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| format!("`{key}` must be a non-negative integer"))
}

fn file_name(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}
