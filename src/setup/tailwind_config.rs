use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::Reporter;

/// Secondary config telling Tailwind which files to scan for class usage.
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";

/// Content globs cover both the TypeScript and JavaScript dialects.
const TAILWIND_CONFIG_TEMPLATE: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: ["./index.html", "./src/**/*.{js,ts,jsx,tsx}"],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

/// Create tailwind.config.js unless the project already has one. An
/// existing file is never touched.
pub fn apply(root: &Path, reporter: &dyn Reporter) -> Result<()> {
    let path = root.join(TAILWIND_CONFIG);
    if path.exists() {
        reporter.info(&format!("{TAILWIND_CONFIG} already exists."));
        return Ok(());
    }
    fs::write(&path, TAILWIND_CONFIG_TEMPLATE).with_context(|| format!("writing {TAILWIND_CONFIG}"))?;
    reporter.info(&format!("Created {TAILWIND_CONFIG}."));
    Ok(())
}
