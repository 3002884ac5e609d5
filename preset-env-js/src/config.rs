use crate::error::PresetError;
use crate::error::Result;
use ahash::HashMap;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::Serialize;

/// Lookup tables consulted by the version and polyfill helpers.
///
/// [`Config::default`] holds the built-in data. Callers that need different
/// tables (tests, or a host that ships its own polyfill library) construct
/// their own and pass it in; nothing reads global state directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  /// Environment name to the label that stands for its unreleased version.
  pub unreleased_labels: HashMap<String, String>,
  /// Polyfill module name to import path, for modules that don't live under
  /// the default polyfill prefix.
  pub module_paths: HashMap<String, String>,
}

static BUILTIN: Lazy<Config> = Lazy::new(Config::default);

impl Default for Config {
  fn default() -> Self {
    Config {
      unreleased_labels: [("safari", "tp")]
        .into_iter()
        .map(|(env, label)| (env.to_string(), label.to_string()))
        .collect(),
      module_paths: [("regenerator-runtime", "regenerator-runtime/runtime")]
        .into_iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect(),
    }
  }
}

impl Config {
  /// Shared instance of the built-in tables.
  pub fn builtin() -> &'static Config {
    &BUILTIN
  }

  /// Parses a JSON config. Omitted tables keep their built-in contents.
  pub fn from_json(source: &str) -> Result<Config> {
    serde_json::from_str(source).map_err(PresetError::InvalidConfig)
  }

  pub fn with_unreleased_label(mut self, env: impl Into<String>, label: impl Into<String>) -> Self {
    self.unreleased_labels.insert(env.into(), label.into());
    self
  }

  pub fn with_module_path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
    self.module_paths.insert(name.into(), path.into());
    self
  }

  pub fn unreleased_label(&self, env: &str) -> Option<&str> {
    self.unreleased_labels.get(env).map(String::as_str)
  }

  pub fn module_path_override(&self, name: &str) -> Option<&str> {
    self.module_paths.get(name).map(String::as_str)
  }
}
