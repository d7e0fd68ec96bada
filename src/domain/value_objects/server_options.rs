//! Dev server options value object

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::mode::Mode;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// How the main-app dev server serves a bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerOptions {
    root_dir: PathBuf,
    compression_enabled: bool,
    host: IpAddr,
    port: u16,
}

impl ServerOptions {
    /// Serve `root_dir`, compressing responses only in production.
    pub fn new(root_dir: impl Into<PathBuf>, mode: Mode, host: IpAddr, port: u16) -> Self {
        Self {
            root_dir: root_dir.into(),
            compression_enabled: mode.compression_enabled(),
            host,
            port,
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn compression_enabled(&self) -> bool {
        self.compression_enabled
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
