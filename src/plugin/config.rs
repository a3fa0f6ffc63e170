//! Configuration for [`ResponsesPlugin`](super::ResponsesPlugin).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::framework::LifecycleEvent;

/// Plugin settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PluginConfig {
    /// The lifecycle event the plugin runs on.
    pub hook: LifecycleEvent,
    /// Fail the event when any endpoint produced a diagnostic.
    pub strict: bool,
}

/// Errors that can occur while loading a [`PluginConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PluginConfig {
    /// Loads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies command-line overrides. A given `hook` replaces the configured
    /// one; `strict` can only switch strict mode on.
    pub fn with_overrides(mut self, hook: Option<LifecycleEvent>, strict: bool) -> Self {
        if let Some(hook) = hook {
            self.hook = hook;
        }
        self.strict |= strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_uses_defaults() {
        let config: PluginConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, PluginConfig::default());
        assert_eq!(config.hook, LifecycleEvent::BeforeDeployDeploy);
        assert!(!config.strict);
    }

    #[test]
    fn reads_camel_case_fields() {
        let config: PluginConfig =
            serde_json::from_value(json!({ "hook": "before:package:finalize", "strict": true }))
                .unwrap();
        assert_eq!(config.hook, LifecycleEvent::BeforePackageFinalize);
        assert!(config.strict);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(serde_json::from_value::<PluginConfig>(json!({ "strcit": true })).is_err());
    }

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "multiple-responses-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn load_reads_a_config_file() {
        let path = temp_config("load", r#"{ "hook": "before:package:finalize", "strict": true }"#);
        let config = PluginConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            config,
            PluginConfig {
                hook: LifecycleEvent::BeforePackageFinalize,
                strict: true,
            }
        );
    }

    #[test]
    fn load_reports_invalid_json() {
        let path = temp_config("invalid", r#"{ "strict": "yes" }"#);
        let err = PluginConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn overrides_replace_hook_and_enable_strict() {
        let file = PluginConfig {
            hook: LifecycleEvent::BeforePackageFinalize,
            strict: false,
        };

        assert_eq!(file.clone().with_overrides(None, false), file);
        assert_eq!(
            file.clone()
                .with_overrides(Some(LifecycleEvent::BeforeDeployDeploy), true),
            PluginConfig {
                hook: LifecycleEvent::BeforeDeployDeploy,
                strict: true,
            }
        );
    }

    #[test]
    fn strict_flag_cannot_disable_configured_strict_mode() {
        let file = PluginConfig {
            strict: true,
            ..PluginConfig::default()
        };
        assert!(file.with_overrides(None, false).strict);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = PluginConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
