use std::path::PathBuf;

use derive_getters::Getters;

/// Subpaths walked under the destination root
pub const OPTIONAL_CONFIG_PATHS: &[&str] = &["mixins/grafana_dashboards", "mixins/prometheus"];

/// Subpaths walked under the source root; these must exist
pub const REQUIRED_CONFIG_PATHS: &[&str] = &["mixins/lib/config_util.libsonnet"];

/// File extensions eligible for copying, dot included
pub const WANTED_EXTENSIONS: &[&str] = &[".jsonnet", ".libsonnet"];

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Getters)]
pub struct Config {
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl Config {
    pub fn new(source_root: impl Into<PathBuf>, destination_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
        }
    }
}

/// Which subpaths to walk and which extensions to keep
///
/// Built once and handed to the syncer; the defaults are the monitoring
/// mixin layout.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SyncPlan {
    optional: Vec<PathBuf>,
    required: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl SyncPlan {
    pub fn new(optional: Vec<PathBuf>, required: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            optional,
            required,
            extensions,
        }
    }
}

impl Default for SyncPlan {
    fn default() -> Self {
        Self::new(
            OPTIONAL_CONFIG_PATHS.iter().map(PathBuf::from).collect(),
            REQUIRED_CONFIG_PATHS.iter().map(PathBuf::from).collect(),
            WANTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_matches_mixin_layout() {
        let plan = SyncPlan::default();
        assert_eq!(
            plan.optional(),
            &vec![
                PathBuf::from("mixins/grafana_dashboards"),
                PathBuf::from("mixins/prometheus"),
            ]
        );
        assert_eq!(
            plan.required(),
            &vec![PathBuf::from("mixins/lib/config_util.libsonnet")]
        );
        assert_eq!(plan.extensions(), &vec![".jsonnet", ".libsonnet"]);
    }

    #[test]
    fn test_config_keeps_roots() {
        let config = Config::new("/tmp/src", "/tmp/dst");
        assert_eq!(config.source_root(), &PathBuf::from("/tmp/src"));
        assert_eq!(config.destination_root(), &PathBuf::from("/tmp/dst"));
    }
}
