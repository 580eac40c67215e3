use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

/// Packages wired into the Vite build.
const PACKAGES: &[&str] = &["tailwindcss", "@tailwindcss/vite"];

/// Run `npm install` for the Tailwind packages with the project root as the
/// working directory, streaming npm's output straight to the user. Blocks
/// until npm exits; no timeout, no retry.
pub fn install_packages(root: &Path) -> Result<()> {
    let status = Command::new("npm")
        .arg("install")
        .args(PACKAGES)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("spawning npm")?;

    if !status.success() {
        bail!(
            "npm install failed (code: {})",
            status.code().unwrap_or_default()
        );
    }
    Ok(())
}
