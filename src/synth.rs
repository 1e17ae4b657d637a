//! Yosys invocation for a single RTL file
//!
//! Runs `yosys -p "read_verilog <file>; proc; opt; stat"` with captured
//! stdio and returns the report text on success.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;

/// How often a timed invocation polls the child for exit
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Errors from a single synthesis invocation
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} did not finish within {limit_secs}s")]
    TimedOut { program: String, limit_secs: u64 },
}

/// Configuration for Yosys invocations
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Executable name or path to invoke
    pub program: String,
    /// Optional wall-clock limit per invocation; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            program: "yosys".to_string(),
            timeout: None,
        }
    }
}

/// Build the statistics script for one RTL file
fn stat_script(file: &Path) -> String {
    format!("read_verilog {}; proc; opt; stat", file.display())
}

/// Run the synthesis tool over one file and capture its statistics report.
///
/// Returns the captured stdout when the tool exits 0. A non-zero exit,
/// a spawn failure, or an expired timeout all surface as [`SynthError`];
/// the caller decides whether to skip or abort.
pub fn run_stat(file: &Path, config: &SynthConfig) -> Result<String, SynthError> {
    let script = stat_script(file);
    tracing::debug!(program = %config.program, script = %script, "spawning synthesis tool");

    let mut child = Command::new(&config.program)
        .arg("-p")
        .arg(&script)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| SynthError::Io {
            program: config.program.clone(),
            source,
        })?;

    // Drain both pipes off-thread so a chatty child cannot fill a pipe
    // buffer and deadlock against the exit poll below.
    let stdout_reader = drain(child.stdout.take());
    let stderr_reader = drain(child.stderr.take());

    let status = wait_for_exit(&mut child, config)?;

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    if status.success() {
        Ok(stdout)
    } else {
        Err(SynthError::Failed {
            program: config.program.clone(),
            status,
            stderr,
        })
    }
}

/// Wait for the child to exit, enforcing the configured timeout if any
fn wait_for_exit(child: &mut Child, config: &SynthConfig) -> Result<ExitStatus, SynthError> {
    let io_err = |source| SynthError::Io {
        program: config.program.clone(),
        source,
    };

    let Some(limit) = config.timeout else {
        return child.wait().map_err(io_err);
    };

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait().map_err(io_err)? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            // Best effort: the child may have exited between the poll and
            // the kill, in which case kill() reports an ignorable error.
            let _ = child.kill();
            let _ = child.wait();
            return Err(SynthError::TimedOut {
                program: config.program.clone(),
                limit_secs: limit.as_secs(),
            });
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || pipe.map(read_lossy).unwrap_or_default())
}

fn read_lossy(mut pipe: impl Read) -> String {
    let mut buf = Vec::new();
    let _ = pipe.read_to_end(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn fake_tool(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake_yosys");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn config_for(path: &Path) -> SynthConfig {
        SynthConfig {
            program: path.display().to_string(),
            timeout: None,
        }
    }

    #[test]
    fn test_stat_script_shape() {
        let script = stat_script(Path::new("rtl_codes/rtl1.v"));
        assert_eq!(script, "read_verilog rtl_codes/rtl1.v; proc; opt; stat");
    }

    #[test]
    fn test_run_stat_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "echo 'Number of cells:   7'");

        let stdout = run_stat(Path::new("rtl1.v"), &config_for(&tool)).unwrap();
        assert!(stdout.contains("Number of cells:   7"));
    }

    #[test]
    fn test_run_stat_receives_script_argument() {
        let dir = tempfile::tempdir().unwrap();
        // Echo the script back so the test can see what was passed
        let tool = fake_tool(dir.path(), "echo \"$2\"");

        let stdout = run_stat(Path::new("rtl_codes/rtl3.v"), &config_for(&tool)).unwrap();
        assert!(stdout.contains("read_verilog rtl_codes/rtl3.v; proc; opt; stat"));
    }

    #[test]
    fn test_run_stat_nonzero_exit_is_failed() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "echo 'ERROR: syntax error' >&2; exit 1");

        let err = run_stat(Path::new("rtl1.v"), &config_for(&tool)).unwrap_err();
        match err {
            SynthError::Failed { status, stderr, .. } => {
                assert_eq!(status.code(), Some(1));
                assert!(stderr.contains("ERROR: syntax error"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_stat_missing_program_is_io() {
        let config = SynthConfig {
            program: "/nonexistent/yosys".to_string(),
            timeout: None,
        };
        let err = run_stat(Path::new("rtl1.v"), &config).unwrap_err();
        assert!(matches!(err, SynthError::Io { .. }));
    }

    #[test]
    fn test_run_stat_timeout_kills_child() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "sleep 30");
        let config = SynthConfig {
            program: tool.display().to_string(),
            timeout: Some(Duration::from_millis(200)),
        };

        let start = Instant::now();
        let err = run_stat(Path::new("rtl1.v"), &config).unwrap_err();
        assert!(matches!(err, SynthError::TimedOut { .. }));
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_error_messages_name_the_program() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), "exit 2");
        let err = run_stat(Path::new("rtl1.v"), &config_for(&tool)).unwrap_err();
        assert!(err.to_string().contains("fake_yosys"));
    }
}
