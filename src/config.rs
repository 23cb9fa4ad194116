//! Server-side configuration
//!
//! Read from command-line flags (standalone API server) or from the
//! environment alone (fullstack entry point, where `dx` owns the arguments).

use clap::Parser;
use std::path::PathBuf;

use crate::shared::constants::DEFAULT_PROFILE;
use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, Parser)]
#[command(name = "admin-dashboard")]
#[command(about = "Admin dashboard server")]
pub struct AdminConfig {
    /// JSON file mapping profile names to permission maps
    #[arg(long, env = "ADMIN_PERMISSIONS_FILE")]
    pub permissions_file: Option<PathBuf>,

    /// Permission profile served to the dashboard
    #[arg(long, env = "ADMIN_PROFILE", default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Port of the standalone API server
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
}

impl AdminConfig {
    /// Configuration from environment variables only.
    /// Malformed values are reported instead of exiting the process.
    pub fn from_env() -> Result<Self> {
        Self::try_parse_from(["admin-dashboard"]).map_err(|e| AppError::Config(e.to_string()))
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            permissions_file: None,
            profile: DEFAULT_PROFILE.to_string(),
            port: 3001,
        }
    }
}
