// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a JSON file.
///
/// This is a direct mapping of a typical `renderbot.json`:
///
/// ```json
/// {
///     "render-exe": "Render",
///     "root-dir": "shots/ep01",
///     "defaults": { "renderer": "arnold", "output": "frames" },
///     "takes": [
///         { "name": "hero", "file": "hero.ma", "start": 1, "end": 240 },
///         { "name": "bg", "file": "bg.ma", "start": 1, "end": 240, "step": 2 }
///     ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Path to the renderer executable, invoked once per attempt.
    #[serde(rename = "render-exe")]
    pub render_exe: String,

    /// Directory scene paths are resolved against, unless `--root` is given.
    #[serde(rename = "root-dir", default)]
    pub root_dir: Option<String>,

    /// Settings applied to every take unless the take overrides them.
    #[serde(default)]
    pub defaults: TakeOverlay,

    /// Render jobs, run sequentially in listed order.
    pub takes: Vec<TakeOverlay>,
}

/// One layer of take settings.
///
/// Both `defaults` and each entry of `takes` deserialize into this shape;
/// `take::resolve` overlays a take onto the defaults field by field. Every
/// field is optional here: which fields must end up present is decided after
/// the overlay, not per layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TakeOverlay {
    /// User-facing name for the take; unique across `takes`.
    #[serde(default)]
    pub name: Option<String>,

    /// Scene file, relative to the root directory.
    #[serde(default)]
    pub file: Option<String>,

    /// First frame to render.
    #[serde(default)]
    pub start: Option<i64>,

    /// Last frame to render.
    #[serde(default)]
    pub end: Option<i64>,

    /// Frame increment; must be >= 1 when given.
    #[serde(default)]
    pub step: Option<i64>,

    /// Renderer plugin identifier, passed through to the executable.
    #[serde(default)]
    pub renderer: Option<String>,

    /// Directory rendered frames are written to.
    #[serde(default)]
    pub output: Option<String>,

    /// Skip frames that already exist on disk.
    #[serde(rename = "skipExisting", default)]
    pub skip_existing: Option<bool>,

    /// Per-take root override, between `--root` and the config `root-dir`.
    #[serde(rename = "root-dir", default)]
    pub root_dir: Option<String>,
}
