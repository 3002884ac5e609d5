use crate::compare::get_lowest_unreleased;
use crate::config::Config;
use crate::error::PresetError;
use crate::error::Result;
use crate::version::prettify_version;
use crate::version::VersionValue;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::trace;

/// Environment name to the minimum version that must be supported.
pub type Targets = BTreeMap<String, VersionValue>;

/// Parses a JSON object of targets, e.g. `{"chrome": "60", "ie": 11}`.
pub fn parse_targets(source: &str) -> Result<Targets> {
  serde_json::from_str(source).map_err(PresetError::InvalidTargets)
}

/// Prettifies every string version in `targets`. Unreleased labels and
/// numeric values are kept as they are.
pub fn prettify_targets(config: &Config, targets: &Targets) -> Targets {
  targets
    .iter()
    .map(|(env, value)| {
      let value = match value {
        VersionValue::Text(text) if config.unreleased_label(env) != Some(text.as_str()) => {
          VersionValue::Text(prettify_version(text))
        }
        other => other.clone(),
      };
      (env.clone(), value)
    })
    .collect()
}

/// Collapses `(env, version)` pairs, such as those produced by resolving a
/// browser query, into one entry per environment holding its lowest version.
pub fn lowest_targets(
  config: &Config,
  versions: impl IntoIterator<Item = (String, VersionValue)>,
) -> Targets {
  let mut targets = Targets::new();
  for (env, version) in versions {
    match targets.entry(env) {
      Entry::Vacant(entry) => {
        entry.insert(version);
      }
      Entry::Occupied(mut entry) => {
        let lowest = get_lowest_unreleased(config, entry.get(), &version, entry.key());
        trace!(env = entry.key().as_str(), %lowest, "merged target version");
        entry.insert(lowest);
      }
    }
  }
  targets
}

/// Listing of the prettified targets as printed in debug mode: a heading
/// followed by the targets as pretty-printed JSON.
pub fn describe_targets(config: &Config, targets: &Targets) -> Result<String> {
  let body = serde_json::to_string_pretty(&prettify_targets(config, targets))
    .map_err(PresetError::Render)?;
  Ok(format!("Using targets:\n{body}\n"))
}

/// Entries of `list` whose key doesn't appear in `stage_list`.
pub fn filter_stage_from_list<V: Clone, S>(
  list: &BTreeMap<String, V>,
  stage_list: &BTreeMap<String, S>,
) -> BTreeMap<String, V> {
  list
    .iter()
    .filter(|(name, _)| !stage_list.contains_key(name.as_str()))
    .map(|(name, value)| (name.clone(), value.clone()))
    .collect()
}
