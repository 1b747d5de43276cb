//! Text, report and SVG output built from classification results.

pub mod report;
pub mod svg;
pub mod table;

pub use report::render_report;
pub use svg::{render_svg, RenderConfig};
pub use table::{render_scientific_table, render_table};

use crate::error::{Result, ShadowError};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Svg,
    Report,
}

impl ArtifactKind {
    fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Svg => "_shadows.svg",
            ArtifactKind::Report => "_report.txt",
        }
    }
}

/// Lower-case, underscore-separated form of a system name for filenames.
pub fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let trimmed = slug.trim_matches('_');
    if trimmed.is_empty() {
        "system".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn artifact_path(dir: &Path, system_name: &str, kind: ArtifactKind) -> PathBuf {
    dir.join(format!("{}{}", slug(system_name), kind.suffix()))
}

/// Writes the whole buffer in one call.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| ShadowError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
