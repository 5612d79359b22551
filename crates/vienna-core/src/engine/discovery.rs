//! Locating the engine executables and detecting their version.
//!
//! Lookup order for a tool: explicit path from the configuration, then
//! `bin_dir`, then every directory on `PATH`.

use super::config::{EngineConfig, Tool};
use super::runner::{CommandRunner, Invocation};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Engine release, as printed by `<tool> --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EngineVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl EngineVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// First release whose folding tools accept `--noDP`.
    pub const NO_DOT_PLOT_FLAG: EngineVersion = EngineVersion::new(2, 4, 0);

    /// Parses output such as `RNAfold 2.6.4`. The last token that looks like a
    /// dotted version wins; missing minor or patch components count as zero.
    pub fn parse(text: &str) -> Option<Self> {
        text.split_whitespace().rev().find_map(|token| {
            let mut parts = token.trim_start_matches('v').split('.');
            let major = parts.next()?.parse().ok()?;
            let minor = parts.next().map_or(Some(0), |p| p.parse().ok())?;
            let patch = parts
                .next()
                .map_or(Some(0), |p| {
                    let digits: String = p.chars().take_while(char::is_ascii_digit).collect();
                    digits.parse().ok()
                })?;
            Some(Self::new(major, minor, patch))
        })
    }

    pub fn supports_no_dot_plot(self) -> bool {
        self >= Self::NO_DOT_PLOT_FLAG
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A located executable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolInfo {
    pub tool: Tool,
    pub path: PathBuf,
    /// `None` when `--version` failed or printed something unrecognised.
    pub version: Option<EngineVersion>,
}

/// Outcome of probing for one tool. Cached by the client, including misses.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Found(ToolInfo),
    Missing,
}

/// Finds the executable for `tool` without running it.
pub fn locate(tool: Tool, config: &EngineConfig) -> Option<PathBuf> {
    if let Some(path) = config.tool_paths.get(&tool) {
        return path.is_file().then(|| path.clone());
    }
    let file_name = format!("{}{}", tool.executable_name(), std::env::consts::EXE_SUFFIX);
    if let Some(dir) = &config.bin_dir {
        let candidate = dir.join(&file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    let path_env = std::env::var_os("PATH")?;
    std::env::split_paths(&path_env)
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Runs `<program> --version` and parses the result.
pub fn detect_version(
    tool: Tool,
    program: &Path,
    runner: &dyn CommandRunner,
) -> Option<EngineVersion> {
    let invocation = Invocation {
        tool,
        program: program.to_path_buf(),
        args: vec!["--version".to_string()],
        stdin: None,
        working_dir: None,
    };
    match runner.run(&invocation) {
        Ok(output) if output.success => {
            let version = EngineVersion::parse(&output.stdout);
            if version.is_none() {
                warn!(%tool, output = %output.stdout.trim(), "Unrecognised engine version string.");
            }
            version
        }
        Ok(output) => {
            warn!(%tool, code = output.exit_code, "Version query failed.");
            None
        }
        Err(e) => {
            warn!(%tool, error = %e, "Version query could not be run.");
            None
        }
    }
}

/// Locates `tool` and, if found, detects its version.
pub fn detect(tool: Tool, config: &EngineConfig, runner: &dyn CommandRunner) -> Detection {
    match locate(tool, config) {
        Some(path) => {
            let version = detect_version(tool, &path, runner);
            debug!(%tool, path = %path.display(), ?version, "Engine tool detected.");
            Detection::Found(ToolInfo {
                tool,
                path,
                version,
            })
        }
        None => {
            debug!(%tool, "Engine tool not found.");
            Detection::Missing
        }
    }
}
