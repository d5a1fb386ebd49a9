use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HolidayError, Result};
use crate::oracle::holidayoracle::HolidayOracle;
use crate::oracle::localoracle::LocalOracle;
use crate::oracle::remoteoracle::{
    RemoteOracle,
    DEFAULT_COUNTRY,
    DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_SECS
};
use crate::time::province::Province;

pub const API_KEY_ENV: &str = "ABSTRACT_API_KEY";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_owned()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OracleConfig {
    #[default]
    Local,
    Remote {
        #[serde(default = "default_endpoint")]
        endpoint: String,
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default = "default_country")]
        country: String,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64
    }
}

impl OracleConfig {
    pub fn remote_defaults() -> OracleConfig {
        OracleConfig::Remote {
            endpoint: default_endpoint(),
            api_key: None,
            country: default_country(),
            timeout_secs: default_timeout_secs()
        }
    }
}

/// Configured key first, then the environment; an empty key counts as missing.
pub fn resolve_api_key(configured: Option<&str>, from_env: Option<String>) -> Result<String> {
    configured
        .filter(|key| !key.trim().is_empty())
        .map(str::to_owned)
        .or(from_env.filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| HolidayError::Config(format!("remote oracle needs an api_key or the {} variable", API_KEY_ENV)))
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    province: Province,
    #[serde(default)]
    oracle: OracleConfig
}

impl Configuration {
    pub fn new(province: Province, oracle: OracleConfig) -> Configuration {
        Configuration { province, oracle }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        tracing::debug!(path = %file_path.as_ref().display(), province = %configuration.province, "configuration loaded");
        Ok(configuration)
    }

    pub fn province(&self) -> Province {
        self.province
    }

    pub fn oracle(&self) -> &OracleConfig {
        &self.oracle
    }

    pub fn with_province(mut self, province: Province) -> Configuration {
        self.province = province;
        self
    }

    /// Switches to the remote oracle, keeping remote settings that are already configured.
    pub fn online(mut self) -> Configuration {
        if self.oracle == OracleConfig::Local {
            self.oracle = OracleConfig::remote_defaults();
        }
        self
    }

    pub fn build_oracle(&self) -> Result<Arc<dyn HolidayOracle>> {
        match &self.oracle {
            OracleConfig::Local => Ok(Arc::new(LocalOracle::for_province(self.province))),
            OracleConfig::Remote { endpoint, api_key, country, timeout_secs } => {
                let api_key = resolve_api_key(api_key.as_deref(), std::env::var(API_KEY_ENV).ok())?;
                let oracle = RemoteOracle::new(endpoint, &api_key, country, Duration::from_secs(*timeout_secs))?;
                Ok(Arc::new(oracle))
            }
        }
    }
}
