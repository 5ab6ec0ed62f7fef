//! Wire contract of the host runtime's call mechanism.
//!
//! Front-ends never talk to a plugin directly: every request is a command
//! string such as `plugin:everything|query` plus a JSON argument object,
//! dispatched by the host. Payloads travel as JSON text because the Bincode
//! codec used on the socket cannot carry self-describing values.

#[tarpc::service]
pub trait Host {
    /// Dispatch `command` with a JSON-encoded argument object.
    ///
    /// Returns the JSON-encoded result, or the message the host (or the
    /// plugin behind it) reported on failure.
    async fn invoke(command: String, payload: String) -> Result<String, String>;
}
