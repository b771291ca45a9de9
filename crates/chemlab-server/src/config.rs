//! Server configuration from CLI flags and environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// ChemLab computation service.
#[derive(Parser, Debug, Clone)]
#[command(name = "chemlab-server", version, about)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST), env = "CHEMLAB_HOST")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 5000, env = "CHEMLAB_PORT")]
    pub port: u16,
}

impl ServerConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
