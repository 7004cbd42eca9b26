//! Bridge to an external UCI engine.
//!
//! The board never searches. To get a move it hands its FEN to an engine
//! process over the UCI protocol and reads back `bestmove`. The engine runs
//! as a subprocess; its stdout is drained by a reader thread into a channel
//! so every request can be bounded by a timeout.

use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when talking to a UCI engine.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Failed to spawn the engine process or write to it.
    #[error("Failed to talk to engine process: {0}")]
    Spawn(#[from] std::io::Error),
    /// The engine did not answer within the configured timeout.
    #[error("Engine did not reply within {0:?}")]
    Timeout(Duration),
    /// The engine closed its output.
    #[error("Engine closed its output")]
    Disconnected,
    /// The engine returned an unexpected response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Extracts the move from a `bestmove` line.
///
/// Returns `Some(None)` for `bestmove (none)` or `bestmove 0000`, which
/// engines send when the side to move has no moves, and `None` if the line
/// is not a `bestmove` line at all.
pub fn parse_bestmove(line: &str) -> Option<Option<String>> {
    let mut parts = line.split_whitespace();
    if parts.next()? != "bestmove" {
        return None;
    }
    match parts.next() {
        None | Some("(none)") | Some("0000") => Some(None),
        Some(mv) => Some(Some(mv.to_string())),
    }
}

/// A UCI engine running as a subprocess.
pub struct UciEngine {
    process: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
    timeout: Duration,
    /// The engine's name as reported during initialization.
    pub name: String,
}

impl UciEngine {
    /// Spawns the engine. Call [`init`](Self::init) before sending positions.
    pub fn spawn<P, I, S>(program: P, args: I, timeout: Duration) -> Result<Self, BridgeError>
    where
        P: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut process = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let (Some(stdin), Some(stdout)) = (process.stdin.take(), process.stdout.take()) else {
            let _ = process.kill();
            return Err(BridgeError::Disconnected);
        };

        let (tx, lines) = mpsc::channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line.trim().to_string()).is_err() {
                    break;
                }
            }
        });

        Ok(UciEngine {
            process,
            stdin,
            lines,
            timeout,
            name: String::new(),
        })
    }

    /// Sends one command line to the engine.
    pub fn send(&mut self, cmd: &str) -> Result<(), BridgeError> {
        debug!(">> {}", cmd);
        writeln!(self.stdin, "{}", cmd)?;
        self.stdin.flush()?;
        Ok(())
    }

    fn read_line_until(&self, deadline: Instant) -> Result<String, BridgeError> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match self.lines.recv_timeout(remaining) {
            Ok(line) => {
                debug!("<< {}", line);
                Ok(line)
            }
            Err(RecvTimeoutError::Timeout) => Err(BridgeError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(BridgeError::Disconnected),
        }
    }

    fn wait_for(&mut self, expected: &str) -> Result<(), BridgeError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            let line = self.read_line_until(deadline)?;
            if let Some(name) = line.strip_prefix("id name ") {
                self.name = name.to_string();
            }
            if line == expected {
                return Ok(());
            }
        }
    }

    /// Runs the `uci` / `isready` handshake.
    pub fn init(&mut self) -> Result<(), BridgeError> {
        self.send("uci")?;
        self.wait_for("uciok")?;
        self.send("isready")?;
        self.wait_for("readyok")?;
        info!(engine = %self.name, "engine ready");
        Ok(())
    }

    /// Asks the engine for its move in the position `fen`.
    ///
    /// `go_params` is appended to `go` verbatim (e.g., "movetime 500").
    /// Returns `None` if the engine reports that there is no move.
    pub fn best_move(
        &mut self,
        fen: &str,
        go_params: &str,
    ) -> Result<Option<String>, BridgeError> {
        self.send(&format!("position fen {}", fen))?;
        self.send(format!("go {}", go_params).trim_end())?;

        let deadline = Instant::now() + self.timeout;
        loop {
            let line = self.read_line_until(deadline)?;
            if line.starts_with("bestmove") {
                return parse_bestmove(&line)
                    .ok_or_else(|| BridgeError::InvalidResponse(line.clone()));
            }
        }
    }

    /// Sends `quit` and waits for the process to exit.
    pub fn quit(&mut self) -> Result<(), BridgeError> {
        self.send("quit")?;
        let _ = self.process.wait();
        Ok(())
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        let _ = self.send("quit");
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}
