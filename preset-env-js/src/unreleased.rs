use crate::config::Config;
use crate::version::VersionValue;

/// Whether `version` is `env`'s unreleased label. Comparison is against the
/// lower-cased string form, so `"TP"` matches a `"tp"` label. Environments
/// without a label never match.
pub fn is_unreleased_version(config: &Config, version: &VersionValue, env: &str) -> bool {
  match config.unreleased_label(env) {
    Some(label) => version.to_string().to_lowercase() == label,
    None => false,
  }
}

/// A target version after the unreleased label has been recognised, so the
/// version helpers can match on it instead of comparing strings.
#[derive(Clone, Debug, PartialEq)]
pub enum VersionSpecifier {
  Concrete(VersionValue),
  /// The environment's unreleased label: no upper bound on support.
  Unreleased,
}

impl VersionSpecifier {
  pub fn classify(config: &Config, env: &str, value: &VersionValue) -> Self {
    if is_unreleased_version(config, value, env) {
      VersionSpecifier::Unreleased
    } else {
      VersionSpecifier::Concrete(value.clone())
    }
  }

  pub fn is_unreleased(&self) -> bool {
    matches!(self, VersionSpecifier::Unreleased)
  }
}
