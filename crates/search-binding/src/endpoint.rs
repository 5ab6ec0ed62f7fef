use strum::{Display, EnumIter, EnumString, IntoStaticStr};

const COMMAND_PREFIX: &str = "plugin:";
const COMMAND_SEPARATOR: char = '|';

/// Every endpoint the search plugin exposes. Nothing outside this list is
/// ever addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    SetSearch,
    SetRequestFlags,
    SetSort,
    SetResultOffset,
    SetMaxResults,
    Query,
    GetNumResults,
    GetFullPathResults,
    GetResultFullPath,
    GetFileNameResults,
    GetResultFileName,
}

impl Endpoint {
    /// Fully qualified command string, e.g. `plugin:everything|set_search`.
    pub fn command(self, namespace: &str) -> String {
        let name: &'static str = self.into();
        format!("{COMMAND_PREFIX}{namespace}{COMMAND_SEPARATOR}{name}")
    }

    /// Split a fully qualified command into its namespace and endpoint.
    pub fn parse_command(command: &str) -> Option<(&str, Endpoint)> {
        let rest = command.strip_prefix(COMMAND_PREFIX)?;
        let (namespace, name) = rest.split_once(COMMAND_SEPARATOR)?;
        let endpoint = name.parse().ok()?;
        Some((namespace, endpoint))
    }
}
