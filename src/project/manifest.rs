use std::collections::HashMap;

use serde::Deserialize;

/// The npm manifest at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Dependencies whose presence marks a project as TypeScript. Covers the
/// common typed Vite starters (react-ts, vue-ts, vanilla-ts).
const TYPED_PACKAGES: &[&str] = &["typescript", "vue-tsc", "@types/node"];

/// The slice of package.json this tool cares about.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    pub dev_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// True when `package` appears as a direct or dev dependency.
    pub fn declares(&self, package: &str) -> bool {
        self.dependencies.contains_key(package) || self.dev_dependencies.contains_key(package)
    }
}

/// Whether the manifest text declares any of the typed-indicator packages.
/// A manifest that fails to parse contributes no signal at all.
pub fn declares_typed_packages(content: &str) -> bool {
    let Ok(parsed) = serde_json::from_str::<PackageManifest>(content) else {
        return false;
    };
    TYPED_PACKAGES.iter().any(|package| parsed.declares(package))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_dependency_marks_typed() {
        let manifest = r#"{
  "dependencies": { "typescript": "~5.6.2" }
}"#;
        assert!(declares_typed_packages(manifest));
    }

    #[test]
    fn dev_dependency_marks_typed() {
        let manifest = r#"{
  "dependencies": { "react": "^18.3.1" },
  "devDependencies": { "vue-tsc": "^2.1.10" }
}"#;
        assert!(declares_typed_packages(manifest));
    }

    #[test]
    fn types_node_counts_as_typed_indicator() {
        let manifest = r#"{ "devDependencies": { "@types/node": "^22.10.1" } }"#;
        assert!(declares_typed_packages(manifest));
    }

    #[test]
    fn untyped_manifest_gives_no_signal() {
        let manifest = r#"{
  "dependencies": { "react": "^18.3.1", "react-dom": "^18.3.1" },
  "devDependencies": { "vite": "^6.0.1" }
}"#;
        assert!(!declares_typed_packages(manifest));
    }

    #[test]
    fn invalid_json_is_swallowed() {
        assert!(!declares_typed_packages("{ not json"));
        assert!(!declares_typed_packages(""));
    }

    #[test]
    fn non_object_json_is_swallowed() {
        assert!(!declares_typed_packages("[1, 2, 3]"));
    }

    #[test]
    fn substring_matches_do_not_count() {
        // Only exact dependency keys are a signal.
        let manifest = r#"{ "dependencies": { "typescript-eslint": "^8.15.0" } }"#;
        assert!(!declares_typed_packages(manifest));
    }
}
