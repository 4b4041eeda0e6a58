// src/exec/supervisor.rs

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::time::{Instant, timeout};
use tracing::{debug, warn};

use crate::engine::AttemptOutcome;
use crate::exec::launch::RenderChild;
use crate::report::Reporter;

/// Timing knobs for the supervision loop.
///
/// The defaults are the production values; tests shrink them so hang
/// scenarios finish in milliseconds instead of minutes.
// TODO: allow overriding these from the config file.
#[derive(Debug, Clone)]
pub struct SupervisorTiming {
    /// Bounded wait for process exit at the top of each tick.
    pub exit_poll: Duration,
    /// How long one line read may block before the tick moves on.
    pub read_timeout: Duration,
    /// Inactivity after which a keepalive is written to the renderer.
    pub keepalive_after: Duration,
    /// Bounded wait for the keepalive write itself.
    pub keepalive_write_timeout: Duration,
    /// Inactivity after which the attempt is declared hung.
    pub hang_ceiling: Duration,
    /// Maximum lines forwarded per tick, keeping a single tick bounded.
    pub max_lines_per_tick: usize,
}

impl Default for SupervisorTiming {
    fn default() -> Self {
        Self {
            exit_poll: Duration::from_millis(100),
            read_timeout: Duration::from_secs(5),
            keepalive_after: Duration::from_secs(30),
            keepalive_write_timeout: Duration::from_secs(5),
            hang_ceiling: Duration::from_secs(10 * 60),
            max_lines_per_tick: 20,
        }
    }
}

/// Mutable state for one supervised attempt.
///
/// Owned exclusively by the supervision loop and destroyed when it returns;
/// dropping it kills a still-running child via `kill_on_drop`.
struct Supervision {
    child: RenderChild,
    /// Last time a non-empty output line was observed. Keepalive writes do
    /// not refresh this; only real output counts as activity.
    last_activity: Instant,
}

/// Drives one renderer process per attempt until it exits or is declared
/// hung.
///
/// The attempt is a small state machine: it stays `Running` while
/// [`Supervisor::tick`] returns `None`, and ends in `Exited(code)` or
/// `HungTimeout`. Every wait inside a tick is bounded, so the loop
/// periodically re-evaluates the hang ceiling no matter what the process
/// does.
pub struct Supervisor {
    timing: SupervisorTiming,
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new(SupervisorTiming::default())
    }
}

impl Supervisor {
    pub fn new(timing: SupervisorTiming) -> Self {
        Self { timing }
    }

    /// Supervise `child` until it reaches a terminal state.
    ///
    /// Output lines are forwarded to `reporter` as they stream in, not
    /// batched at the end.
    pub async fn supervise(&self, child: RenderChild, reporter: &dyn Reporter) -> AttemptOutcome {
        let mut st = Supervision {
            child,
            last_activity: Instant::now(),
        };

        loop {
            if let Some(outcome) = self.tick(&mut st, reporter).await {
                return outcome;
            }
        }
    }

    /// One bounded iteration of the supervision loop.
    ///
    /// Returns `Some` once the attempt is terminal. A tick can never stall
    /// longer than roughly `exit_poll + max_lines_per_tick * read_timeout`.
    async fn tick(&self, st: &mut Supervision, reporter: &dyn Reporter) -> Option<AttemptOutcome> {
        // Bounded check for process termination.
        if let Ok(waited) = timeout(self.timing.exit_poll, st.child.child.wait()).await {
            let outcome = match waited {
                Ok(status) => {
                    // None means the process died to a signal; -1 keeps that
                    // distinct from success without clashing with real codes.
                    let code = status.code().unwrap_or(-1);
                    debug!(code, "renderer exited");
                    AttemptOutcome::Exited(code)
                }
                Err(err) => {
                    warn!(error = %err, "waiting on renderer process failed");
                    AttemptOutcome::Exited(-1)
                }
            };
            self.drain_remaining(st, reporter).await;
            return Some(outcome);
        }

        // No exit and no output for the whole ceiling: declare the hang and
        // abandon the attempt. The kill is best-effort; the attempt ends
        // either way.
        if st.last_activity.elapsed() >= self.timing.hang_ceiling {
            debug!("no renderer activity within hang ceiling; abandoning attempt");
            if let Err(err) = st.child.child.start_kill() {
                warn!(error = %err, "failed to terminate hung renderer");
            }
            return Some(AttemptOutcome::HungTimeout);
        }

        self.drain_output(st, reporter).await;
        None
    }

    /// Forward a bounded batch of output lines.
    ///
    /// Each non-empty line refreshes the activity timestamp and goes to the
    /// reporter immediately. The batch ends early when reads go stale, when
    /// both pipes are closed, or when a read times out (which is also the
    /// point where an idle renderer gets poked).
    async fn drain_output(&self, st: &mut Supervision, reporter: &dyn Reporter) {
        for _ in 0..self.timing.max_lines_per_tick {
            match timeout(self.timing.read_timeout, st.child.lines.recv()).await {
                Ok(Some(line)) => {
                    let line = line.trim_end();
                    if !line.is_empty() {
                        st.last_activity = Instant::now();
                        reporter.output_line(line);
                    }
                }
                // Both pipes at EOF; exit detection happens next tick.
                Ok(None) => return,
                Err(_) => {
                    self.maybe_keepalive(st, reporter).await;
                    return;
                }
            }

            if st.last_activity.elapsed() > self.timing.read_timeout {
                return;
            }
        }
    }

    /// Forward output that was still buffered when the process exited.
    ///
    /// The pipes hit EOF once the process is gone, which closes the line
    /// channel, so this terminates on its own; each read stays bounded in
    /// case something inherited the pipes and keeps them open.
    async fn drain_remaining(&self, st: &mut Supervision, reporter: &dyn Reporter) {
        while let Ok(Some(line)) = timeout(self.timing.read_timeout, st.child.lines.recv()).await {
            let line = line.trim_end();
            if !line.is_empty() {
                reporter.output_line(line);
            }
        }
    }

    /// Poke an apparently idle renderer with a CRLF on its stdin.
    ///
    /// Some renderers stop mid-run to wait on console input; a newline
    /// unsticks them without affecting the render. A failed or timed-out
    /// write is reported and logged, nothing more: only real output counts
    /// as activity, so a renderer that stays silent still hits the ceiling.
    async fn maybe_keepalive(&self, st: &mut Supervision, reporter: &dyn Reporter) {
        if st.last_activity.elapsed() < self.timing.keepalive_after {
            return;
        }

        let Some(stdin) = st.child.stdin.as_mut() else {
            warn!("renderer stdin unavailable; cannot send keepalive");
            return;
        };

        reporter.keepalive();

        let write = async {
            stdin.write_all(b"\r\n").await?;
            stdin.flush().await
        };

        match timeout(self.timing.keepalive_write_timeout, write).await {
            Ok(Ok(())) => debug!("keepalive sent"),
            Ok(Err(err)) => {
                reporter.keepalive_failed();
                warn!(error = %err, "keepalive write failed");
            }
            Err(_) => {
                reporter.keepalive_failed();
                warn!("keepalive write timed out");
            }
        }
    }
}
