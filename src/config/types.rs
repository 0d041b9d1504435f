use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PlagcheckConfig {
    pub server: Option<ServerConfig>,
    /// Raise default log verbosity to debug.
    pub debug: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl PlagcheckConfig {
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// Resolve the listen address: explicit flag, then config file, then default.
    pub fn listen_addr(&self, host: Option<&str>, port: Option<u16>) -> (String, u16) {
        let server = self.server.as_ref();
        let host = host
            .map(str::to_string)
            .or_else(|| server.and_then(|s| s.host.clone()))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = port
            .or_else(|| server.and_then(|s| s.port))
            .unwrap_or(DEFAULT_PORT);
        (host, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PlagcheckConfig::default();
        assert!(config.server.is_none());
        assert!(!config.debug_enabled());
        assert_eq!(config.listen_addr(None, None), ("127.0.0.1".to_string(), 5000));
    }

    #[test]
    fn test_listen_addr_prefers_flags() {
        let config = PlagcheckConfig {
            server: Some(ServerConfig {
                host: Some("0.0.0.0".to_string()),
                port: Some(8080),
            }),
            ..Default::default()
        };
        assert_eq!(config.listen_addr(None, None), ("0.0.0.0".to_string(), 8080));
        assert_eq!(config.listen_addr(Some("localhost"), None), ("localhost".to_string(), 8080));
        assert_eq!(config.listen_addr(None, Some(9000)), ("0.0.0.0".to_string(), 9000));
    }

    #[test]
    fn test_partial_server_section() {
        let config: PlagcheckConfig = serde_yaml::from_str("server:\n  port: 3000\n").unwrap();
        assert_eq!(config.listen_addr(None, None), ("127.0.0.1".to_string(), 3000));
    }

    #[test]
    fn test_debug_flag_deserialize() {
        let config: PlagcheckConfig = serde_yaml::from_str("debug: true").unwrap();
        assert!(config.debug_enabled());
    }
}
