/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind (default: 127.0.0.1)
    pub host: String,

    /// TCP port (default: 3000)
    pub port: u16,

    /// Start with the built-in sample records
    pub seed: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed: true,
        }
    }
}
