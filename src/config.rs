//! Server configuration.
//!
//! A `ServerConfig` is read from a TOML file where every key is optional, then the
//! command-line flags override individual values. The defaults reproduce a plain
//! deployment: listen on port 8080 on every interface and serve pages from
//! `static/<deployment>`.

use crate::error::CalcError;
use crate::get_default_indicators;
use crate::reliability::IndicatorTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Default request body limit, matching the 10 MiB multipart memory budget of the forms.
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 << 20;

/// Which calculator service a server instance hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// Coal composition (`/evaluate1`) and fuel oil conversion (`/evaluate2`).
    #[default]
    Fuel,
    /// Electricity imbalance estimate (`/evaluate`).
    Imbalance,
    /// Circuit reliability (`/evaluate1`) and under-supply losses (`/evaluate2`).
    Reliability,
}

impl Deployment {
    pub fn name(&self) -> &'static str {
        match self {
            Deployment::Fuel => "fuel",
            Deployment::Imbalance => "imbalance",
            Deployment::Reliability => "reliability",
        }
    }

    /// Directory the deployment serves its pages from when none is configured.
    pub fn default_static_dir(&self) -> PathBuf {
        Path::new("static").join(self.name())
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub deployment: Deployment,
    pub bind: IpAddr,
    pub port: u16,
    /// Overrides `Deployment::default_static_dir`.
    pub static_dir: Option<PathBuf>,
    pub max_body_bytes: usize,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Custom reliability indicator table; the embedded one is used when absent.
    pub indicators: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            deployment: Deployment::default(),
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            static_dir: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_filter: "info".to_string(),
            indicators: None,
        }
    }
}

impl ServerConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::IoError` if the file cannot be read, or
    /// `CalcError::DeserializationError` for invalid TOML or unknown keys.
    pub fn load_from_file(path: &Path) -> Result<Self, CalcError> {
        let content = std::fs::read_to_string(path).map_err(|io_error| CalcError::IoError {
            path: path.to_path_buf(),
            source: io_error,
        })?;

        Self::load_from_str(&content)
    }

    /// Parses a configuration from a TOML string. Missing keys take their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use enercalc::{Deployment, ServerConfig};
    ///
    /// let config = ServerConfig::load_from_str(r#"
    /// deployment = "imbalance"
    /// port = 9000
    /// "#).unwrap();
    ///
    /// assert_eq!(config.deployment, Deployment::Imbalance);
    /// assert_eq!(config.port, 9000);
    /// assert_eq!(config.max_body_bytes, 10 << 20);
    /// ```
    pub fn load_from_str(toml_str: &str) -> Result<Self, CalcError> {
        toml::from_str(toml_str).map_err(CalcError::from)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// The directory pages and assets are served from.
    pub fn static_root(&self) -> PathBuf {
        self.static_dir
            .clone()
            .unwrap_or_else(|| self.deployment.default_static_dir())
    }

    /// The indicator table this configuration selects.
    pub fn load_indicators(&self) -> Result<IndicatorTable, CalcError> {
        match &self.indicators {
            Some(path) => IndicatorTable::load_from_file(path),
            None => Ok(get_default_indicators().clone()),
        }
    }
}
