// src/engine/orchestrator.rs

use tracing::{debug, info, warn};

use crate::config::model::{ConfigFile, TakeOverlay};
use crate::errors::Result;
use crate::exec::{Supervisor, SupervisorTiming, spawn_renderer};
use crate::report::Reporter;
use crate::take::{Invocation, resolve};

/// Terminal result of one supervised attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The renderer exited on its own with this status code.
    Exited(i32),
    /// No exit and no output within the hang ceiling; the process was
    /// abandoned. Deliberately distinct from every real exit code.
    HungTimeout,
}

impl AttemptOutcome {
    /// Only a clean exit counts as success; a hang never does.
    pub fn is_success(self) -> bool {
        matches!(self, AttemptOutcome::Exited(0))
    }
}

/// How a take ended after the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TakeOutcome {
    /// Some attempt exited with code 0.
    Succeeded,
    /// Every attempt failed; the run moved on to the next take.
    Abandoned,
}

/// Per-take record of what the retry loop did, returned from
/// [`Orchestrator::run_all`].
#[derive(Debug, Clone)]
pub struct TakeReport {
    pub name: String,
    /// Attempts consumed, including the successful one if any.
    pub attempts: usize,
    pub outcome: TakeOutcome,
}

/// Options that influence how the orchestrator behaves.
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    /// Attempt ceiling per take.
    pub max_attempts: usize,
    /// Timing for the supervision loop.
    pub timing: SupervisorTiming,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            timing: SupervisorTiming::default(),
        }
    }
}

/// Drives every configured take through its retry loop, one subprocess at a
/// time.
///
/// Exactly one attempt is live at any moment; the supervisor owns its state
/// for the attempt's duration and nothing here touches the process directly.
pub struct Orchestrator {
    options: OrchestratorOptions,
    supervisor: Supervisor,
}

impl Orchestrator {
    pub fn new(options: OrchestratorOptions) -> Self {
        let supervisor = Supervisor::new(options.timing.clone());
        Self {
            options,
            supervisor,
        }
    }

    /// Run every take in listed order, retrying failures.
    ///
    /// Infallible by design: per-attempt errors are reported and consumed
    /// inside the loop, and an abandoned take is a report entry, not an
    /// error.
    pub async fn run_all(
        &self,
        cfg: &ConfigFile,
        cli_root: Option<&str>,
        reporter: &dyn Reporter,
    ) -> Vec<TakeReport> {
        let mut reports = Vec::with_capacity(cfg.takes.len());
        for (idx, take) in cfg.takes.iter().enumerate() {
            reports.push(self.run_take(cfg, take, idx, cli_root, reporter).await);
        }
        reports
    }

    /// Retry loop for a single take.
    async fn run_take(
        &self,
        cfg: &ConfigFile,
        take: &TakeOverlay,
        idx: usize,
        cli_root: Option<&str>,
        reporter: &dyn Reporter,
    ) -> TakeReport {
        let label = take
            .name
            .clone()
            .or_else(|| cfg.defaults.name.clone())
            .unwrap_or_else(|| format!("take #{}", idx + 1));

        for attempt in 1..=self.options.max_attempts {
            debug!(take = %label, attempt, "starting attempt");

            match self.run_attempt(cfg, take, cli_root, reporter).await {
                Ok(outcome) if outcome.is_success() => {
                    info!(take = %label, attempt, "take succeeded");
                    return TakeReport {
                        name: label,
                        attempts: attempt,
                        outcome: TakeOutcome::Succeeded,
                    };
                }
                Ok(outcome) => {
                    warn!(take = %label, attempt, ?outcome, "attempt failed");
                }
                Err(err) => {
                    // Resolution and launch failures consume an attempt like
                    // any other; the operator gets the full error chain.
                    warn!(take = %label, attempt, error = %err, "attempt aborted");
                    reporter.internal_error(&err);
                }
            }
        }

        warn!(take = %label, attempts = self.options.max_attempts, "exhausted attempts; abandoning take");
        TakeReport {
            name: label,
            attempts: self.options.max_attempts,
            outcome: TakeOutcome::Abandoned,
        }
    }

    /// One attempt: resolve the take, build the command, supervise the
    /// process.
    ///
    /// The `JobSpec` is rebuilt from the config layers on every call, so an
    /// attempt can never observe state left behind by a previous one.
    async fn run_attempt(
        &self,
        cfg: &ConfigFile,
        take: &TakeOverlay,
        cli_root: Option<&str>,
        reporter: &dyn Reporter,
    ) -> Result<AttemptOutcome> {
        let spec = resolve(&cfg.defaults, take, cfg.root_dir.as_deref(), cli_root)?;
        let invocation = Invocation::build(&cfg.render_exe, &spec);

        reporter.attempt_started(&spec.name, &invocation);

        let child = spawn_renderer(&invocation)?;
        let outcome = self.supervisor.supervise(child, reporter).await;

        reporter.attempt_finished(&spec.name, outcome);
        Ok(outcome)
    }
}
