// src/take/invocation.rs

use std::path::PathBuf;

use crate::take::resolve::JobSpec;

/// The exact command for one renderer attempt.
///
/// A pure function of (render executable, [`JobSpec`]): building it twice
/// yields identical argument vectors, and nothing in it is mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The renderer executable.
    pub program: String,
    /// Ordered arguments; order is a contract with the renderer's own parser.
    pub args: Vec<String>,
    /// Working directory the process is spawned in.
    pub workdir: PathBuf,
}

impl Invocation {
    /// Build the renderer command line for a resolved job.
    ///
    /// Argument order is fixed: frame range first (`-s`, `-e`, `-b`), then
    /// renderer and output options, then the scene path joined under the
    /// job's root. Numeric fields are rendered in their decimal form.
    pub fn build(render_exe: &str, spec: &JobSpec) -> Invocation {
        let mut args = Vec::with_capacity(13);

        // Frame range
        args.push("-s".to_owned());
        args.push(spec.start_frame.to_string());
        args.push("-e".to_owned());
        args.push(spec.end_frame.to_string());
        args.push("-b".to_owned());
        args.push(spec.step.to_string());

        // Renderer options
        args.push("-r".to_owned());
        args.push(spec.renderer.clone());
        args.push("-rd".to_owned());
        args.push(spec.output_dir.display().to_string());
        args.push("-skipExistingFrames".to_owned());
        args.push(if spec.skip_existing { "true" } else { "false" }.to_owned());

        // Finish with the scene path
        args.push(spec.root.join(&spec.file).display().to_string());

        Invocation {
            program: render_exe.to_owned(),
            args,
            workdir: spec.root.clone(),
        }
    }

    /// The full command line as shown to the operator (`$ ...` report line).
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}
