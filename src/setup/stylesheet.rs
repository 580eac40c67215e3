use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::project::inspect::ProjectLayout;
use crate::report::Reporter;

/// The entire stylesheet after setup. Prior content is not preserved.
pub const STYLESHEET_CONTENT: &str = "@import \"tailwindcss\";\n";

/// Overwrite the stylesheet entry point, creating its directory first when
/// the project does not have one yet.
pub fn apply(root: &Path, layout: &ProjectLayout, reporter: &dyn Reporter) -> Result<()> {
    let path = root.join(&layout.stylesheet);
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(&path, STYLESHEET_CONTENT).with_context(|| format!("writing {}", layout.stylesheet))?;
    reporter.info(&format!(
        "Updated {} with Tailwind import.",
        layout.stylesheet
    ));
    Ok(())
}
