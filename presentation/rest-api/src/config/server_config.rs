use super::env::{Lookup, string_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "3001", the port the front end calls)
    pub fn from_lookup(lookup: Lookup) -> Self {
        Self {
            ip: string_or(lookup, "SERVICE_IP", "127.0.0.1"),
            port: string_or(lookup, "SERVICE_PORT", "3001"),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::map_lookup;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "8080".to_string(),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "0.0.0.0:8080");
    }

    #[test]
    fn should_default_to_local_port_3001() {
        let config = ServerConfig::from_lookup(&map_lookup(&[]));

        assert_eq!(config.bind_address(), "127.0.0.1:3001");
    }
}
