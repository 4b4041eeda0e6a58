// src/exec/launch.rs

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, ChildStdin, Command};
use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::AttemptError;
use crate::take::Invocation;

/// A spawned renderer process together with its merged output stream.
///
/// stdout and stderr are each drained by a background task into one line
/// channel, so the supervisor observes a single stream of renderer output no
/// matter which pipe a line arrived on. The channel closes once both pipes
/// reach EOF.
#[derive(Debug)]
pub struct RenderChild {
    pub(crate) child: Child,
    /// Kept open for keepalive writes; `None` if the pipe could not be taken.
    pub(crate) stdin: Option<ChildStdin>,
    pub(crate) lines: mpsc::Receiver<String>,
}

/// Spawn the renderer process described by `invocation`.
///
/// The child is spawned with `kill_on_drop`, so dropping the returned
/// [`RenderChild`] (normal return, hang abandonment, Ctrl-C unwinding the
/// run) never leaves a renderer behind.
pub fn spawn_renderer(invocation: &Invocation) -> Result<RenderChild, AttemptError> {
    debug!(program = %invocation.program, workdir = %invocation.workdir.display(), "spawning renderer");

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .current_dir(&invocation.workdir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| AttemptError::Launch {
        program: invocation.program.clone(),
        source,
    })?;

    let stdin = child.stdin.take();
    let (tx, rx) = mpsc::channel::<String>(64);

    if let Some(stdout) = child.stdout.take() {
        forward_lines(stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        forward_lines(stderr, tx);
    }

    Ok(RenderChild {
        child,
        stdin,
        lines: rx,
    })
}

/// Drain one output pipe into the shared line channel.
///
/// Ends when the pipe hits EOF or the receiver side is gone.
fn forward_lines(stream: impl AsyncRead + Unpin + Send + 'static, tx: mpsc::Sender<String>) {
    tokio::spawn(async move {
        let reader = BufReader::new(stream);
        let mut lines = reader.lines();

        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });
}
