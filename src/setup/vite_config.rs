use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::project::inspect::ProjectLayout;
use crate::report::Reporter;

/// Import line prepended to an existing config.
const IMPORT_LINE: &str = "import tailwindcss from '@tailwindcss/vite';\n";

/// Substring that marks the import as already present.
const IMPORT_MARKER: &str = "import tailwindcss from '@tailwindcss/vite'";

/// Substring that marks the plugin call as already registered.
const PLUGIN_MARKER: &str = "tailwindcss()";

/// Opening token of the plugins array, with arbitrary whitespace as emitted
/// by the common Vite starter templates.
static PLUGINS_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"plugins:\s*\[\s*").expect("valid plugins opener regex"));

/// Config written when the project has none. Valid as both TypeScript and
/// JavaScript, so the same bytes serve either variant.
const VITE_CONFIG_TEMPLATE: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import tailwindcss from '@tailwindcss/vite'

export default defineConfig({
  plugins: [tailwindcss(), react()],
})
"#;

/// Rewrite the detected Vite config in place, or create one when the
/// project has none.
pub fn apply(root: &Path, layout: &ProjectLayout, reporter: &dyn Reporter) -> Result<()> {
    let path = root.join(&layout.vite_config);
    if layout.vite_config_exists {
        let original =
            fs::read_to_string(&path).with_context(|| format!("reading {}", layout.vite_config))?;
        let updated = wire_tailwind(&original);
        if updated == original {
            reporter.info(&format!(
                "{} already set up for Tailwind CSS.",
                layout.vite_config
            ));
            return Ok(());
        }
        fs::write(&path, updated).with_context(|| format!("writing {}", layout.vite_config))?;
        reporter.info(&format!("Updated {} with Tailwind CSS.", layout.vite_config));
    } else {
        fs::write(&path, VITE_CONFIG_TEMPLATE)
            .with_context(|| format!("writing {}", layout.vite_config))?;
        reporter.info(&format!("Created {} with Tailwind CSS.", layout.vite_config));
    }
    Ok(())
}

/// Ensure the import line and the plugin registration in the config text.
/// Both edits are marker-guarded, so running this twice equals running it
/// once.
fn wire_tailwind(config: &str) -> String {
    let mut updated = if config.contains(IMPORT_MARKER) {
        config.to_string()
    } else {
        format!("{IMPORT_LINE}{config}")
    };
    if !updated.contains(PLUGIN_MARKER) {
        updated = insert_plugin_call(&updated);
    }
    updated
}

/// Insert `tailwindcss()` as the first element of the plugins array.
///
/// Best-effort text surgery on the first `plugins: [` opener; text without
/// a plugins array passes through untouched. Multi-line arrays work because
/// the opener match swallows the whitespace after the bracket.
fn insert_plugin_call(config: &str) -> String {
    PLUGINS_OPENER
        .replace(config, "plugins: [tailwindcss(), ")
        .into_owned()
}
