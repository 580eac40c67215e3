use std::fs;
use std::path::{Path, PathBuf};

use crate::project::manifest;

/// Vite config filenames in detection priority order; first match wins.
const VITE_CONFIG_CANDIDATES: &[&str] = &["vite.config.ts", "vite.config.js", "vite.config.mjs"];

/// Root CSS file loaded by the application.
pub const STYLESHEET_PATH: &str = "src/index.css";

/// Presence of this file alone classifies a project as TypeScript.
const TS_MARKER_FILE: &str = "tsconfig.json";

/// Read-only view of a project tree, keyed by paths relative to the root.
/// Classification depends on nothing else, so tests can feed it an
/// in-memory map instead of a real directory.
pub trait FsProbe {
    fn exists(&self, rel: &str) -> bool;
    fn read(&self, rel: &str) -> Option<String>;
}

/// Probe backed by a directory on disk.
pub struct DiskProbe {
    root: PathBuf,
}

impl DiskProbe {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl FsProbe for DiskProbe {
    fn exists(&self, rel: &str) -> bool {
        self.root.join(rel).exists()
    }

    fn read(&self, rel: &str) -> Option<String> {
        fs::read_to_string(self.root.join(rel)).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageVariant {
    TypeScript,
    JavaScript,
}

impl LanguageVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
        }
    }

    /// Config filename used when none exists on disk yet.
    fn default_vite_config(self) -> &'static str {
        match self {
            Self::TypeScript => "vite.config.ts",
            Self::JavaScript => "vite.config.js",
        }
    }
}

/// Snapshot of everything the setup workflow needs to know about a project.
/// Computed once per invocation and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub variant: LanguageVariant,
    /// Vite config path relative to the project root.
    pub vite_config: String,
    /// Whether that config was found on disk, as opposed to being the
    /// variant default for a file still to be created.
    pub vite_config_exists: bool,
    /// Stylesheet entry path relative to the project root.
    pub stylesheet: String,
}

impl ProjectLayout {
    #[allow(dead_code)]
    pub fn vite_config_ext(&self) -> &str {
        Path::new(&self.vite_config)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
    }
}

/// Classify a project from filesystem state alone; no side effects.
pub fn classify(probe: &dyn FsProbe) -> ProjectLayout {
    let variant = detect_variant(probe);
    let (vite_config, vite_config_exists) = detect_vite_config(probe, variant);
    ProjectLayout {
        variant,
        vite_config,
        vite_config_exists,
        stylesheet: STYLESHEET_PATH.to_string(),
    }
}

fn detect_variant(probe: &dyn FsProbe) -> LanguageVariant {
    if probe.exists(TS_MARKER_FILE) {
        return LanguageVariant::TypeScript;
    }
    let typed_manifest = probe
        .read(manifest::MANIFEST_FILE)
        .is_some_and(|content| manifest::declares_typed_packages(&content));
    if typed_manifest {
        LanguageVariant::TypeScript
    } else {
        LanguageVariant::JavaScript
    }
}

fn detect_vite_config(probe: &dyn FsProbe, variant: LanguageVariant) -> (String, bool) {
    for candidate in VITE_CONFIG_CANDIDATES {
        if probe.exists(candidate) {
            return ((*candidate).to_string(), true);
        }
    }
    (variant.default_vite_config().to_string(), false)
}
