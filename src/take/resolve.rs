// src/take/resolve.rs

use std::path::PathBuf;

use crate::config::model::TakeOverlay;
use crate::errors::AttemptError;

const DEFAULT_RENDERER: &str = "arnold";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_STEP: i64 = 1;

/// Fully-resolved description of one render job.
///
/// Built fresh for every attempt from the same config layers, and immutable
/// once built, so retries of a take always see identical settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub name: String,
    /// Scene file, relative to `root`.
    pub file: PathBuf,
    pub start_frame: i64,
    pub end_frame: i64,
    pub step: i64,
    pub renderer: String,
    pub output_dir: PathBuf,
    pub skip_existing: bool,
    /// Directory the renderer runs in and `file` is resolved against.
    pub root: PathBuf,
}

/// Overlay a take onto the defaults and resolve the result into a [`JobSpec`].
///
/// Every field present in `take` replaces the corresponding field in
/// `defaults`; fields absent from both fall back to hard-coded defaults.
/// `name`, `file`, `start` and `end` have no fallback and their absence is an
/// [`AttemptError::MissingField`].
///
/// Root precedence, highest first: `cli_root`, the merged per-take
/// `root-dir`, the config-level `root-dir` in `config_root`, then `"."`.
pub fn resolve(
    defaults: &TakeOverlay,
    take: &TakeOverlay,
    config_root: Option<&str>,
    cli_root: Option<&str>,
) -> Result<JobSpec, AttemptError> {
    let merged = overlay(defaults, take);

    let root = cli_root
        .map(str::to_owned)
        .or(merged.root_dir)
        .or_else(|| config_root.map(str::to_owned))
        .unwrap_or_else(|| ".".to_owned());

    let name = merged.name.ok_or(AttemptError::MissingField("name"))?;
    let file = merged.file.ok_or(AttemptError::MissingField("file"))?;
    let start_frame = merged.start.ok_or(AttemptError::MissingField("start"))?;
    let end_frame = merged.end.ok_or(AttemptError::MissingField("end"))?;

    Ok(JobSpec {
        name,
        file: PathBuf::from(file),
        start_frame,
        end_frame,
        step: merged.step.unwrap_or(DEFAULT_STEP),
        renderer: merged.renderer.unwrap_or_else(|| DEFAULT_RENDERER.to_owned()),
        output_dir: PathBuf::from(merged.output.unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_owned())),
        skip_existing: merged.skip_existing.unwrap_or(false),
        root: PathBuf::from(root),
    })
}

/// Field-wise overlay: the take wins wherever it has a value.
fn overlay(defaults: &TakeOverlay, take: &TakeOverlay) -> TakeOverlay {
    TakeOverlay {
        name: take.name.clone().or_else(|| defaults.name.clone()),
        file: take.file.clone().or_else(|| defaults.file.clone()),
        start: take.start.or(defaults.start),
        end: take.end.or(defaults.end),
        step: take.step.or(defaults.step),
        renderer: take.renderer.clone().or_else(|| defaults.renderer.clone()),
        output: take.output.clone().or_else(|| defaults.output.clone()),
        skip_existing: take.skip_existing.or(defaults.skip_existing),
        root_dir: take.root_dir.clone().or_else(|| defaults.root_dir.clone()),
    }
}
