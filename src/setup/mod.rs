pub mod install;
pub mod stylesheet;
pub mod tailwind_config;
pub mod vite_config;

use std::path::Path;

use anyhow::{Result, bail};

use crate::project::inspect::{self, DiskProbe, ProjectLayout};
use crate::report::Reporter;

/// Run the full workflow against `root`: classify, install the packages,
/// then rewrite the three config files.
pub fn run(root: &Path, reporter: &dyn Reporter) -> Result<()> {
    let layout = classify_root(root)?;

    reporter.info("Installing Tailwind CSS...");
    install::install_packages(root)?;

    apply_file_edits(root, &layout, reporter);

    reporter.info("Tailwind setup complete!");
    Ok(())
}

/// Classify without side effects; shared by `setup` and `detect`.
pub fn classify_root(root: &Path) -> Result<ProjectLayout> {
    if !root.is_dir() {
        bail!(
            "no project directory at {}. Open a Vite project.",
            root.display()
        );
    }
    Ok(inspect::classify(&DiskProbe::new(root)))
}

/// Each edit reports its own failure and the rest continue. Nothing rolls
/// back what already ran.
fn apply_file_edits(root: &Path, layout: &ProjectLayout, reporter: &dyn Reporter) {
    if let Err(e) = vite_config::apply(root, layout, reporter) {
        reporter.error(&format!("Failed to update {}: {e:#}", layout.vite_config));
    }
    if let Err(e) = stylesheet::apply(root, layout, reporter) {
        reporter.error(&format!("Failed to update {}: {e:#}", layout.stylesheet));
    }
    if let Err(e) = tailwind_config::apply(root, reporter) {
        reporter.error(&format!(
            "Failed to update {}: {e:#}",
            tailwind_config::TAILWIND_CONFIG
        ));
    }
}
