use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::castor::{AlgoType, CastorError};

/// Algorithms and configuration files registered for one algorithm type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgoConf {
    /// Algorithm names the workers can run for this type
    pub algorithms: Vec<String>,
    /// Configuration file names usable with those algorithms
    pub config_filenames: Vec<String>,
}

impl AlgoConf {
    pub fn new(algorithms: &[&str], config_filenames: &[&str]) -> Self {
        Self {
            algorithms: algorithms.iter().map(|s| s.to_string()).collect(),
            config_filenames: config_filenames.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_algorithm(&self, algo: &str) -> bool {
        self.algorithms.iter().any(|a| a == algo)
    }

    pub fn has_config(&self, conf: &str) -> bool {
        self.config_filenames.iter().any(|c| c == conf)
    }
}

/// Configuration of the analytics (castor) service.
///
/// - `enabled` decides whether a service handle is installed at all.
/// - `pyworker_addr` lists the worker endpoints; an enabled service needs at least one.
/// - `heartbeat_window_secs` is how long a worker heartbeat keeps the service alive.
/// - one `AlgoConf` section per algorithm type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastorConfig {
    pub enabled: bool,
    pub pyworker_addr: Vec<String>,
    pub conn_pool_size: usize,
    pub result_wait_timeout_secs: u64,
    pub heartbeat_window_secs: u64,
    pub fit: AlgoConf,
    pub detect: AlgoConf,
    pub predict: AlgoConf,
    pub fit_detect: AlgoConf,
}

impl Default for CastorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            pyworker_addr: vec!["127.0.0.1:6666".to_string()],
            conn_pool_size: 30,
            result_wait_timeout_secs: 10,
            heartbeat_window_secs: 30,
            fit: AlgoConf::default(),
            detect: AlgoConf::default(),
            predict: AlgoConf::default(),
            fit_detect: AlgoConf::default(),
        }
    }
}

impl CastorConfig {
    /// Create default (disabled) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: an enabled configuration with default endpoints and no
    /// algorithms registered yet.
    pub fn enabled() -> Self {
        Self { enabled: true, ..Self::default() }
    }

    /// Builder-style registration of one algorithm type section.
    pub fn with_section(mut self, algo_type: AlgoType, conf: AlgoConf) -> Self {
        *self.section_mut(algo_type) = conf;
        self
    }

    pub fn from_json_str(text: &str) -> Result<Self, CastorError> {
        let config: CastorConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CastorError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// A disabled configuration is always valid; an enabled one needs worker
    /// endpoints and positive sizes/timeouts.
    pub fn validate(&self) -> Result<(), CastorError> {
        if !self.enabled {
            return Ok(());
        }
        if self.pyworker_addr.is_empty() {
            return Err(CastorError::InvalidConfig("pyworker_addr must not be empty".into()));
        }
        if self.conn_pool_size == 0 {
            return Err(CastorError::InvalidConfig("conn_pool_size must be positive".into()));
        }
        if self.result_wait_timeout_secs == 0 {
            return Err(CastorError::InvalidConfig("result_wait_timeout_secs must be positive".into()));
        }
        if self.heartbeat_window_secs == 0 {
            return Err(CastorError::InvalidConfig("heartbeat_window_secs must be positive".into()));
        }
        Ok(())
    }

    pub fn section(&self, algo_type: AlgoType) -> &AlgoConf {
        match algo_type {
            AlgoType::Fit => &self.fit,
            AlgoType::Detect => &self.detect,
            AlgoType::Predict => &self.predict,
            AlgoType::FitDetect => &self.fit_detect,
        }
    }

    fn section_mut(&mut self, algo_type: AlgoType) -> &mut AlgoConf {
        match algo_type {
            AlgoType::Fit => &mut self.fit,
            AlgoType::Detect => &mut self.detect,
            AlgoType::Predict => &mut self.predict,
            AlgoType::FitDetect => &mut self.fit_detect,
        }
    }

    /// Checks that `algo` and `conf` are both registered under `algo_type`.
    pub fn check_algo_and_conf_existence(&self, algo: &str, conf: &str, algo_type: &str) -> Result<(), CastorError> {
        let ty: AlgoType = algo_type.parse()?;
        let section = self.section(ty);
        if !section.has_algorithm(algo) {
            return Err(CastorError::AlgoNotFound { algo: algo.to_string(), algo_type: algo_type.to_string() });
        }
        if !section.has_config(conf) {
            return Err(CastorError::ConfNotFound { conf: conf.to_string(), algo_type: algo_type.to_string() });
        }
        Ok(())
    }
}
