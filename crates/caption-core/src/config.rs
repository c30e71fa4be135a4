//! Configuration structures for the captioned speech service.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::error::{CaptionError, CaptionResult};

/// Model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Identifier passed to the model load operation.
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Voice preset used when a request does not specify one.
    #[serde(default = "default_voice")]
    pub default_voice: String,
}

fn default_model_id() -> String {
    "prince-canuma/Kokoro-82M".to_string()
}

fn default_voice() -> String {
    "af_heart".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            default_voice: default_voice(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host. Loopback only; this service has no auth surface.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8880
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolve the configured bind address.
    pub fn bind_addr(&self) -> CaptionResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| CaptionError::config(format!("invalid bind address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_default() {
        let config = ModelConfig::default();
        assert_eq!(config.model_id, "prince-canuma/Kokoro-82M");
        assert_eq!(config.default_voice, "af_heart");
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8880);
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        let addr = config.bind_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8880);

        let bad = ServerConfig {
            host: "not a host".to_string(),
            port: 8880,
        };
        assert!(matches!(bad.bind_addr(), Err(CaptionError::Config(_))));
    }

    #[test]
    fn test_config_field_defaults() {
        let config: ServerConfig = serde_json::from_str("{\"port\": 9000}").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }
}
