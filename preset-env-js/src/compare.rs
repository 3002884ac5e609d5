use crate::config::Config;
use crate::unreleased::VersionSpecifier;
use crate::version::semver_min;
use crate::version::VersionValue;

/// Picks the binding requirement of two versions for `env`, i.e. the lower
/// one.
///
/// An unreleased label places no constraint, so any concrete version beats
/// it. When both are unreleased, or the concrete one is empty, `a` is
/// returned.
pub fn get_lowest_unreleased(
  config: &Config,
  a: &VersionValue,
  b: &VersionValue,
  env: &str,
) -> VersionValue {
  match (
    VersionSpecifier::classify(config, env, a),
    VersionSpecifier::classify(config, env, b),
  ) {
    (VersionSpecifier::Concrete(_), VersionSpecifier::Concrete(_)) => semver_min(a, b),
    (VersionSpecifier::Unreleased, VersionSpecifier::Concrete(other)) if !other.is_empty() => other,
    _ => a.clone(),
  }
}
