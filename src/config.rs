use crate::device::DeviceInfo;

/// Placeholder endpoint for the real device protocol (DAS). Loaded and
/// logged at startup, never dialed.
#[derive(Debug, Clone)]
pub struct DeviceEndpoint {
    pub ip: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub device: DeviceInfo,
    pub endpoint: DeviceEndpoint,
    pub max_connections: usize,
}

impl Config {
    pub fn load() -> Self {
        let host = env_or("SERVER_HOST", "HOST", "0.0.0.0");
        let port = env_port_or("SERVER_PORT", "HTTP_SERVER_PORT", 8080);

        let device = DeviceInfo {
            name: env_default("DEVICE_NAME", "simulated-device"),
            model: env_default("DEVICE_MODEL", "sim-01"),
            manufacturer: env_default("DEVICE_MANUFACTURER", "unknown"),
            kind: env_default("DEVICE_TYPE", "sensor"),
            protocol: env_default("DEVICE_PROTOCOL", "das"),
        };

        let endpoint = DeviceEndpoint {
            ip: env_or("DEVICE_IP", "DAS_IP", "127.0.0.1"),
            port: env_port_or("DEVICE_PORT", "DAS_PORT", 9000),
        };

        // Zero would never admit a connection
        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(1024);

        Self {
            listen_addr: format!("{}:{}", host, port),
            device,
            endpoint,
            max_connections,
        }
    }
}

fn env_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or(primary: &str, fallback: &str, default: &str) -> String {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .unwrap_or_else(|_| default.to_string())
}

fn env_port_or(primary: &str, fallback: &str, default: u16) -> u16 {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
