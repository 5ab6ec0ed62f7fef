use crate::error::Result;
use config::{AppStrategy, constants as config_constants, create_strategy, host_socket_path, resolve_dir};
use search_binding::{DEFAULT_NAMESPACE, RequestFlag};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Socket of the host runtime.
    pub socket_path: PathBuf,
    /// Plugin namespace the search commands are registered under.
    pub namespace: String,
    /// Page size used by `search` when `--max-results` is not given.
    pub max_results: u32,
    /// Flags sent by `search` when no `--flag` is given. Empty means none are sent.
    pub request_flags: Vec<RequestFlag>,

    pub config_path: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
struct RawConfig {
    socket_path: Option<PathBuf>,
    namespace: String,
    max_results: u32,
    request_flags: Vec<RequestFlag>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_results: 100,
            request_flags: Vec::new(),
        }
    }
}

impl Config {
    fn from_raw(raw: RawConfig, runtime_dir: PathBuf, config_path: PathBuf) -> Self {
        Self {
            socket_path: raw
                .socket_path
                .unwrap_or_else(|| host_socket_path(&runtime_dir)),
            namespace: raw.namespace,
            max_results: raw.max_results,
            request_flags: raw.request_flags,
            config_path,
        }
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Home dir not found")
        })?;

        let config_path = resolve_dir("CONFIG_DIRECTORY", &strategy, |s| Some(s.config_dir()))
            .join(config_constants::CLIENT_CONFIG_FILE_NAME);
        let runtime_dir = resolve_dir("RUNTIME_DIRECTORY", &strategy, |s| s.runtime_dir());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => Self::load_str(&content, runtime_dir, config_path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::from_raw(RawConfig::default(), runtime_dir, config_path))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_str(config_str: &str, runtime_dir: PathBuf, config_path: PathBuf) -> Result<Self> {
        let raw: RawConfig = toml::from_str(config_str)?;
        Ok(Self::from_raw(raw, runtime_dir, config_path))
    }
}
