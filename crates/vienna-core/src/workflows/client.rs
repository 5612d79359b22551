use crate::engine::config::{EngineConfig, Tool};
use crate::engine::discovery::{self, Detection, ToolInfo};
use crate::engine::error::EngineError;
use crate::engine::runner::{CommandRunner, Invocation, ProcessRunner, StdinSource};
use crate::engine::scratch::ScratchDir;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use tracing::{debug, warn};

static SHARED: OnceLock<Vienna> = OnceLock::new();

/// Handle on an installed engine.
///
/// Each tool is located and its version detected on first use; the outcome,
/// including "not found", is cached until [`Vienna::refresh`]. The client is
/// `Send + Sync` and invocations never share files, so one client can serve
/// several threads.
pub struct Vienna {
    config: EngineConfig,
    runner: Arc<dyn CommandRunner>,
    detections: Mutex<HashMap<Tool, Detection>>,
}

impl fmt::Debug for Vienna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vienna")
            .field("config", &self.config)
            .field("detections", &*self.lock_detections())
            .finish_non_exhaustive()
    }
}

impl Default for Vienna {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Vienna {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_runner(config, Arc::new(ProcessRunner))
    }

    pub fn with_runner(config: EngineConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            runner,
            detections: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide client with the default configuration.
    pub fn shared() -> &'static Vienna {
        SHARED.get_or_init(Vienna::default)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forgets every cached detection so the next call probes again.
    pub fn refresh(&self) {
        self.lock_detections().clear();
    }

    /// Location and version of `tool`, detected once and then cached.
    ///
    /// # Errors
    ///
    /// [`EngineError::EngineNotFound`] if the executable cannot be located. The
    /// miss is cached, so later calls fail without probing the filesystem.
    pub fn tool_info(&self, tool: Tool) -> Result<ToolInfo, EngineError> {
        if let Some(cached) = self.lock_detections().get(&tool) {
            return match cached {
                Detection::Found(info) => Ok(info.clone()),
                Detection::Missing => Err(EngineError::EngineNotFound { tool }),
            };
        }
        let detection = discovery::detect(tool, &self.config, self.runner.as_ref());
        self.lock_detections().insert(tool, detection.clone());
        match detection {
            Detection::Found(info) => Ok(info),
            Detection::Missing => Err(EngineError::EngineNotFound { tool }),
        }
    }

    /// Detection outcome for every tool.
    pub fn engine_versions(&self) -> Vec<(Tool, Result<ToolInfo, EngineError>)> {
        Tool::ALL
            .into_iter()
            .map(|tool| (tool, self.tool_info(tool)))
            .collect()
    }

    pub(crate) fn scratch(&self) -> Result<ScratchDir, EngineError> {
        ScratchDir::new(self.config.scratch_root.as_deref())
    }

    /// Runs one engine process in `scratch` and returns its stdout.
    pub(crate) fn execute(
        &self,
        info: &ToolInfo,
        args: Vec<String>,
        stdin: StdinSource,
        scratch: &ScratchDir,
    ) -> Result<String, EngineError> {
        let invocation = Invocation {
            tool: info.tool,
            program: info.path.clone(),
            args,
            stdin: Some(stdin),
            working_dir: Some(scratch.path().to_path_buf()),
        };
        debug!(tool = %info.tool, args = ?invocation.args, "Invoking engine.");

        let output = self.runner.run(&invocation).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound && !info.path.is_file() {
                warn!(tool = %info.tool, "Engine executable disappeared since detection.");
                self.lock_detections().insert(info.tool, Detection::Missing);
                EngineError::EngineNotFound { tool: info.tool }
            } else {
                EngineError::io(format!("running {}", info.tool), e)
            }
        })?;

        if !output.success {
            return Err(EngineError::EngineExecutionFailed {
                tool: info.tool,
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }
        Ok(output.stdout)
    }

    fn lock_detections(&self) -> MutexGuard<'_, HashMap<Tool, Detection>> {
        self.detections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted stand-in for the engine used by the workflow tests.

    use crate::engine::config::{EngineConfig, Tool};
    use crate::engine::runner::{CommandOutput, CommandRunner, Invocation, StdinSource};
    use std::io;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    type Script = Box<dyn Fn(&Invocation) -> io::Result<CommandOutput> + Send + Sync>;

    /// Records every invocation and answers with `script`. `--version` queries
    /// are answered with `version_output`.
    pub struct MockRunner {
        pub version_output: String,
        pub calls: Mutex<Vec<Invocation>>,
        /// Stdin contents at the time of each non-version call, file sources
        /// resolved to their text.
        pub inputs: Mutex<Vec<String>>,
        script: Script,
    }

    impl MockRunner {
        pub fn new(
            script: impl Fn(&Invocation) -> io::Result<CommandOutput> + Send + Sync + 'static,
        ) -> Self {
            Self {
                version_output: "RNAfold 2.6.4\n".to_string(),
                calls: Mutex::new(Vec::new()),
                inputs: Mutex::new(Vec::new()),
                script: Box::new(script),
            }
        }

        pub fn engine_calls(&self) -> Vec<Invocation> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.args != ["--version"])
                .cloned()
                .collect()
        }

        pub fn version_calls(&self) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.args == ["--version"])
                .count()
        }
    }

    impl CommandRunner for MockRunner {
        fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
            self.calls.lock().unwrap().push(invocation.clone());
            if invocation.args == ["--version"] {
                return Ok(CommandOutput::success(self.version_output.clone()));
            }
            let input = match &invocation.stdin {
                Some(StdinSource::Text(text)) => text.clone(),
                Some(StdinSource::File(path)) => std::fs::read_to_string(path)?,
                None => String::new(),
            };
            self.inputs.lock().unwrap().push(input);
            (self.script)(invocation)
        }
    }

    /// Config whose tool paths point at empty placeholder files in `dir`.
    pub fn placeholder_config(dir: &TempDir) -> EngineConfig {
        let mut config = EngineConfig {
            scratch_root: Some(dir.path().to_path_buf()),
            ..EngineConfig::default()
        };
        for tool in Tool::ALL {
            let path = dir.path().join(tool.executable_name());
            std::fs::write(&path, "").unwrap();
            config.tool_paths.insert(tool, path);
        }
        config
    }

    /// Names of the entries left in `dir`, excluding the placeholder executables.
    pub fn leftover_entries(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| !Tool::ALL.iter().any(|t| t.executable_name() == name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::engine::discovery::EngineVersion;
    use crate::engine::runner::CommandOutput;
    use tempfile::tempdir;

    #[test]
    fn detection_happens_once_until_refresh() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(MockRunner::new(|_| Ok(CommandOutput::success(""))));
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner.clone());

        let info = vienna.tool_info(Tool::Fold).unwrap();
        assert_eq!(info.version, Some(EngineVersion::new(2, 6, 4)));
        vienna.tool_info(Tool::Fold).unwrap();
        assert_eq!(runner.version_calls(), 1);

        vienna.refresh();
        vienna.tool_info(Tool::Fold).unwrap();
        assert_eq!(runner.version_calls(), 2);
    }

    #[test]
    fn missing_tool_is_cached_until_refresh() {
        let dir = tempdir().unwrap();
        let mut config = placeholder_config(&dir);
        let fold_path = config.tool_paths[&Tool::Fold].clone();
        std::fs::remove_file(&fold_path).unwrap();
        config.tool_paths.insert(Tool::Fold, fold_path.clone());

        let runner = Arc::new(MockRunner::new(|_| Ok(CommandOutput::success(""))));
        let vienna = Vienna::with_runner(config, runner.clone());

        assert!(matches!(
            vienna.tool_info(Tool::Fold),
            Err(EngineError::EngineNotFound { tool: Tool::Fold })
        ));

        std::fs::write(&fold_path, "").unwrap();
        assert!(vienna.tool_info(Tool::Fold).is_err());

        vienna.refresh();
        assert!(vienna.tool_info(Tool::Fold).is_ok());
    }

    #[test]
    fn engine_versions_covers_every_tool() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(MockRunner::new(|_| Ok(CommandOutput::success(""))));
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner);
        let report = vienna.engine_versions();
        assert_eq!(report.len(), 3);
        assert!(report.iter().all(|(_, r)| r.is_ok()));
    }

    #[test]
    fn non_zero_exit_carries_stderr_verbatim() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(MockRunner::new(|_| {
            Ok(CommandOutput::failure(1, "ERROR: unrecognized option '--bogus'\n"))
        }));
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner);
        let info = vienna.tool_info(Tool::Fold).unwrap();
        let scratch = vienna.scratch().unwrap();
        let err = vienna
            .execute(&info, vec![], StdinSource::Text("A\n".into()), &scratch)
            .unwrap_err();
        match err {
            EngineError::EngineExecutionFailed {
                tool,
                exit_code,
                stderr,
            } => {
                assert_eq!(tool, Tool::Fold);
                assert_eq!(exit_code, 1);
                assert_eq!(stderr, "ERROR: unrecognized option '--bogus'\n");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn removed_executable_marks_tool_missing() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(MockRunner::new(|_| {
            Err(io::Error::from(io::ErrorKind::NotFound))
        }));
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner);
        let info = vienna.tool_info(Tool::Cofold).unwrap();
        std::fs::remove_file(&info.path).unwrap();
        let scratch = vienna.scratch().unwrap();
        let err = vienna
            .execute(&info, vec![], StdinSource::Text("A&C\n".into()), &scratch)
            .unwrap_err();
        assert!(matches!(err, EngineError::EngineNotFound { tool: Tool::Cofold }));
        assert!(vienna.tool_info(Tool::Cofold).is_err());
    }

    #[test]
    fn not_found_with_executable_present_is_an_io_error() {
        let dir = tempdir().unwrap();
        let runner = Arc::new(MockRunner::new(|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "stdin file vanished"))
        }));
        let vienna = Vienna::with_runner(placeholder_config(&dir), runner.clone());
        let info = vienna.tool_info(Tool::Inverse).unwrap();
        let scratch = vienna.scratch().unwrap();
        let err = vienna
            .execute(&info, vec![], StdinSource::Text("....\n".into()), &scratch)
            .unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));

        assert!(vienna.tool_info(Tool::Inverse).is_ok());
        assert_eq!(runner.version_calls(), 1);
    }
}
