//! Diagram rendering through Graphviz.
//!
//! The automaton is written out as DOT source, handed to the `dot`
//! executable, and the resulting image is optionally opened in the
//! platform's default viewer.

mod dot;
pub mod error;

pub use dot::{to_dot, write_dot};
pub use error::RenderError;

use crate::core::{Dfa, State};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

/// Where and how to render the diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Path of the DOT source; the image is written next to it with the
    /// format appended as extension
    pub output_stem: PathBuf,

    /// Graphviz output format, e.g. `png` or `svg`
    pub format: String,

    /// Open the rendered image in a viewer
    pub view: bool,

    /// Graphviz executable
    pub program: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_stem: PathBuf::from("currency_dfa"),
            format: "png".to_string(),
            view: true,
            program: "dot".to_string(),
        }
    }
}

impl RenderConfig {
    /// Path of the rendered image.
    pub fn image_path(&self) -> PathBuf {
        let mut name = self.output_stem.clone().into_os_string();
        name.push(".");
        name.push(&self.format);
        PathBuf::from(name)
    }
}

/// Renders automaton tables with the Graphviz `dot` executable.
#[derive(Clone, Debug, Default)]
pub struct GraphvizRenderer {
    config: RenderConfig,
}

impl GraphvizRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Write the DOT source and render it, returning the image path.
    pub fn render<S: State>(&self, dfa: &Dfa<S>) -> Result<PathBuf, RenderError> {
        let source_path = &self.config.output_stem;
        let name = graph_name(source_path);

        fs::write(source_path, to_dot(dfa, &name)).map_err(|source| RenderError::WriteSource {
            path: source_path.display().to_string(),
            source,
        })?;

        let image_path = self.config.image_path();
        let output = Command::new(&self.config.program)
            .arg(format!("-T{}", self.config.format))
            .arg("-o")
            .arg(&image_path)
            .arg(source_path)
            .output()
            .map_err(|source| RenderError::BackendMissing {
                program: self.config.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::BackendFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(image = %image_path.display(), "rendered diagram");

        if self.config.view {
            open_viewer(&image_path);
        }

        Ok(image_path)
    }
}

/// DOT identifiers cannot contain path separators or dots.
fn graph_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("g{name}")
    } else {
        name
    }
}

fn viewer_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

fn open_viewer(image: &Path) {
    let program = viewer_command();
    let spawned = Command::new(program)
        .arg(image)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(err) = spawned {
        warn!(viewer = program, error = %err, "could not open diagram viewer");
    }
}
