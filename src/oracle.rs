//! Exact prime counting delegated to the `primecount` command line tool.
//!
//! The tool prints a single integer on success. Launch failures, non-zero exits, unparsable
//! output and timeouts are all reported as [OracleError]; the process is killed on timeout.

use std::io::{self, Read};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::traits::ExactCountOracle;

/// Errors from the exact counting backend
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("{program} executable is not available")]
    NotInstalled { program: String },

    #[error("failed to communicate with {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    #[error("{command} failed with {status}: {output}")]
    Failed {
        command: String,
        status: ExitStatus,
        output: String,
    },

    #[error("unable to parse output {output:?} of {command}")]
    Parse {
        command: String,
        output: String,
        #[source]
        source: ParseIntError,
    },

    #[error("exact prime counting is disabled")]
    Disabled,
}

/// Interval between checks on a running child process
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Thin client around the `primecount` CLI.
#[derive(Debug, Clone)]
pub struct PrimecountCli {
    program: PathBuf,
    threads: usize,
}

impl Default for PrimecountCli {
    fn default() -> Self {
        Self::new("primecount")
    }
}

impl PrimecountCli {
    /// Use the executable at `program`, resolved through `PATH` if it is a bare name
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            threads: 1,
        }
    }

    /// Set the number of threads the tool may use
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn run(&self, args: &[String], timeout: Duration) -> Result<i64, OracleError> {
        let command = format!("{} {}", self.program_name(), args.join(" "));
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    OracleError::NotInstalled {
                        program: self.program_name(),
                    }
                } else {
                    self.io_error(err)
                }
            })?;

        let finished = match wait_with_deadline(child, timeout).map_err(|e| self.io_error(e))? {
            Some(finished) => finished,
            None => {
                tracing::debug!(%command, ?timeout, "killed timed out prime counting process");
                return Err(OracleError::Timeout { command, timeout });
            }
        };

        let Finished {
            status,
            stdout,
            stderr,
        } = finished;
        if !status.success() {
            let output = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(OracleError::Failed {
                command,
                status,
                output: output.trim().to_string(),
            });
        }

        let output = stdout.trim();
        output.parse::<i64>().map_err(|source| OracleError::Parse {
            command,
            output: output.to_string(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> OracleError {
        OracleError::Io {
            program: self.program_name(),
            source,
        }
    }
}

impl ExactCountOracle for PrimecountCli {
    fn prime_pi(&self, x: i64, timeout: Duration) -> Result<i64, OracleError> {
        let args = [x.to_string(), format!("-t={}", self.threads)];
        self.run(&args, timeout)
    }

    fn nth_prime(&self, n: i64, timeout: Duration) -> Result<i64, OracleError> {
        let args = [n.to_string(), "-n".to_string(), format!("-t={}", self.threads)];
        self.run(&args, timeout)
    }
}

/// Exit status and captured output of a child process
struct Finished {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

/// Wait for the child to exit, killing it with `None` once `timeout` has passed.
///
/// Both pipes are drained on reader threads while waiting, so a chatty child cannot stall on a
/// full pipe buffer.
fn wait_with_deadline(mut child: Child, timeout: Duration) -> io::Result<Option<Finished>> {
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        let now = Instant::now();
        if now >= deadline {
            // the child may have exited right after the last poll
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    };

    Ok(Some(Finished {
        status,
        stdout: join_reader(stdout)?,
        stderr: join_reader(stderr)?,
    }))
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<io::Result<String>> {
    thread::spawn(move || {
        let mut buffer = String::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_string(&mut buffer)?;
        }
        Ok(buffer)
    })
}

fn join_reader(reader: JoinHandle<io::Result<String>>) -> io::Result<String> {
    reader
        .join()
        .map_err(|_| io::Error::other("pipe reader thread panicked"))?
}

/// A backend that never answers, leaving only the local counting strategies
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl ExactCountOracle for Offline {
    fn prime_pi(&self, _: i64, _: Duration) -> Result<i64, OracleError> {
        Err(OracleError::Disabled)
    }

    fn nth_prime(&self, _: i64, _: Duration) -> Result<i64, OracleError> {
        Err(OracleError::Disabled)
    }
}
