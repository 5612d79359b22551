use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// The engine executables this crate drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Tool {
    Fold,
    Cofold,
    Inverse,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Fold, Tool::Cofold, Tool::Inverse];

    pub fn executable_name(self) -> &'static str {
        match self {
            Tool::Fold => "RNAfold",
            Tool::Cofold => "RNAcofold",
            Tool::Inverse => "RNAinverse",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.executable_name())
    }
}

pub const DEFAULT_DANGLES: u8 = 2;
pub const DEFAULT_INVERSE_FINAL_COST: f64 = 0.5;

/// Settings resolved once and shared by every invocation of a client.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Searched before `PATH`.
    pub bin_dir: Option<PathBuf>,
    /// Explicit executable per tool; takes precedence over `bin_dir` and `PATH`.
    pub tool_paths: HashMap<Tool, PathBuf>,
    /// Parent of the per-invocation scratch directories. System temp dir if unset.
    pub scratch_root: Option<PathBuf>,
    /// Dangling-end model passed as `-d<n>`.
    pub dangles: u8,
    /// Pass `--noLP` to the folding tools.
    pub no_lonely_pairs: bool,
    /// Folding temperature in degrees Celsius (`-T`); engine default if unset.
    pub temperature: Option<f64>,
    /// Cost threshold passed to `RNAinverse -f`.
    pub inverse_final_cost: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bin_dir: None,
            tool_paths: HashMap::new(),
            scratch_root: None,
            dangles: DEFAULT_DANGLES,
            no_lonely_pairs: true,
            temperature: None,
            inverse_final_cost: DEFAULT_INVERSE_FINAL_COST,
        }
    }
}

#[derive(Default)]
pub struct EngineConfigBuilder {
    bin_dir: Option<PathBuf>,
    tool_paths: HashMap<Tool, PathBuf>,
    scratch_root: Option<PathBuf>,
    dangles: Option<u8>,
    no_lonely_pairs: Option<bool>,
    temperature: Option<f64>,
    inverse_final_cost: Option<f64>,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bin_dir(mut self, dir: PathBuf) -> Self {
        self.bin_dir = Some(dir);
        self
    }
    pub fn tool_path(mut self, tool: Tool, path: PathBuf) -> Self {
        self.tool_paths.insert(tool, path);
        self
    }
    pub fn scratch_root(mut self, dir: PathBuf) -> Self {
        self.scratch_root = Some(dir);
        self
    }
    pub fn dangles(mut self, dangles: u8) -> Self {
        self.dangles = Some(dangles);
        self
    }
    pub fn no_lonely_pairs(mut self, enabled: bool) -> Self {
        self.no_lonely_pairs = Some(enabled);
        self
    }
    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }
    pub fn inverse_final_cost(mut self, cost: f64) -> Self {
        self.inverse_final_cost = Some(cost);
        self
    }

    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let dangles = self.dangles.unwrap_or(DEFAULT_DANGLES);
        if dangles > 3 {
            return Err(ConfigError::InvalidParameter {
                name: "dangles",
                reason: format!("expected 0, 1, 2 or 3, got {}", dangles),
            });
        }
        if let Some(t) = self.temperature {
            if !t.is_finite() || t <= -273.15 {
                return Err(ConfigError::InvalidParameter {
                    name: "temperature",
                    reason: format!("{} is not a valid temperature in Celsius", t),
                });
            }
        }
        let inverse_final_cost = self
            .inverse_final_cost
            .unwrap_or(DEFAULT_INVERSE_FINAL_COST);
        if !inverse_final_cost.is_finite() || inverse_final_cost < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "inverse_final_cost",
                reason: format!("must be a non-negative number, got {}", inverse_final_cost),
            });
        }
        Ok(EngineConfig {
            bin_dir: self.bin_dir,
            tool_paths: self.tool_paths,
            scratch_root: self.scratch_root,
            dangles,
            no_lonely_pairs: self.no_lonely_pairs.unwrap_or(true),
            temperature: self.temperature,
            inverse_final_cost,
        })
    }
}
