pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "everything-bridge";
pub const APP_NAME: &str = "everything-bridge";

pub const UNIX_SOCKET_FILE_NAME: &str = "host.sock";
pub const CLIENT_CONFIG_FILE_NAME: &str = "client.toml";
