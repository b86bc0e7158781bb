use clap::Parser;

/// Default port, matching the port existing clients connect to
pub const DEFAULT_PORT: u16 = 5000;
/// Default host for the relay
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Process configuration, from flags or the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "signal-relay")]
#[command(about = "Room-based WebRTC signaling relay", long_about = None)]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "SIGNAL_RELAY_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
