use semver::Version;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;
use std::fmt;

/// A version exactly as it appears in a targets map.
///
/// Target resolution hands us either bare numbers (`60`, `10.1`) or strings
/// (`"60.5"`, `"60.5.0"`, or an environment's unreleased label such as
/// `"tp"`). Nothing is validated here; see [`semverify`] for coercion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VersionValue {
  Number(f64),
  Text(String),
}

impl VersionValue {
  /// Whether this value counts as absent when choosing between two versions:
  /// empty strings, `0` and `NaN`.
  pub fn is_empty(&self) -> bool {
    match self {
      VersionValue::Number(n) => *n == 0.0 || n.is_nan(),
      VersionValue::Text(text) => text.is_empty(),
    }
  }
}

// Number rendering as JavaScript's `Number.prototype.toString` does it:
// exponent form outside [1e-6, 1e21), `-0` as `0`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
  if n.is_nan() {
    return f.write_str("NaN");
  }
  if n.is_infinite() {
    return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
  }
  if n == 0.0 {
    return f.write_str("0");
  }
  let abs = n.abs();
  if !(1e-6..1e21).contains(&abs) {
    let exp = format!("{n:e}");
    return match exp.split_once('e') {
      Some((mantissa, exponent)) if !exponent.starts_with('-') => {
        write!(f, "{mantissa}e+{exponent}")
      }
      _ => f.write_str(&exp),
    };
  }
  // f64's Display already drops a zero fraction (`2.0` prints as `2`).
  write!(f, "{n}")
}

impl fmt::Display for VersionValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VersionValue::Number(n) => write_number(f, *n),
      VersionValue::Text(text) => f.write_str(text),
    }
  }
}

// Integral numbers serialize as JSON integers so `60` doesn't come back as `60.0`.
impl Serialize for VersionValue {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      VersionValue::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
        serializer.serialize_i64(*n as i64)
      }
      VersionValue::Number(n) => serializer.serialize_f64(*n),
      VersionValue::Text(text) => serializer.serialize_str(text),
    }
  }
}

impl From<&str> for VersionValue {
  fn from(value: &str) -> Self {
    VersionValue::Text(value.to_string())
  }
}

impl From<String> for VersionValue {
  fn from(value: String) -> Self {
    VersionValue::Text(value)
  }
}

impl From<f64> for VersionValue {
  fn from(value: f64) -> Self {
    VersionValue::Number(value)
  }
}

impl From<u32> for VersionValue {
  fn from(value: u32) -> Self {
    VersionValue::Number(value.into())
  }
}

impl From<i32> for VersionValue {
  fn from(value: i32) -> Self {
    VersionValue::Number(value.into())
  }
}

impl From<&VersionValue> for VersionValue {
  fn from(value: &VersionValue) -> Self {
    value.clone()
  }
}

/// Converts a version to a three-component semver string.
///
/// Valid semver strings are returned as is. Anything else is split on `.` and
/// padded with `0` components up to three, so `2` becomes `2.0.0` and `"2.5"`
/// becomes `"2.5.0"`. Values with three or more components are never
/// truncated and segments are not checked; `"2.5.1.9"` comes back unchanged.
pub fn semverify(version: impl Into<VersionValue>) -> String {
  let version = version.into();
  if let VersionValue::Text(text) = &version {
    if Version::parse(text).is_ok() {
      return text.clone();
    }
  }

  let mut split: Vec<String> = version.to_string().split('.').map(str::to_string).collect();
  while split.len() < 3 {
    split.push("0".to_string());
  }
  split.join(".")
}

/// A strictly parsed `major.minor.patch` version.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SemanticVersion(Version);

impl SemanticVersion {
  pub fn new(major: u64, minor: u64, patch: u64) -> Self {
    SemanticVersion(Version::new(major, minor, patch))
  }

  /// Runs [`semverify`] and parses the result, returning `None` if the
  /// coerced string still isn't semver (e.g. non-numeric segments).
  pub fn coerce(version: impl Into<VersionValue>) -> Option<Self> {
    Version::parse(&semverify(version)).ok().map(SemanticVersion)
  }

  pub fn major(&self) -> u64 {
    self.0.major
  }

  pub fn minor(&self) -> u64 {
    self.0.minor
  }

  pub fn patch(&self) -> u64 {
    self.0.patch
  }

  /// Ordering key. Pre-release and build metadata don't participate.
  pub fn triple(&self) -> (u64, u64, u64) {
    (self.0.major, self.0.minor, self.0.patch)
  }
}

impl fmt::Display for SemanticVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
  }
}

/// Returns whichever of `first` and `second` is the lower version. The
/// original values are returned, not their coerced forms.
///
/// `first` only wins when it's non-empty and strictly lower; ties go to
/// `second`. A value that can't be coerced never beats one that can.
pub fn semver_min(first: &VersionValue, second: &VersionValue) -> VersionValue {
  let first_is_lower = match (SemanticVersion::coerce(first), SemanticVersion::coerce(second)) {
    (Some(a), Some(b)) => a.triple() < b.triple(),
    (Some(_), None) => true,
    (None, _) => false,
  };
  if !first.is_empty() && first_is_lower {
    first.clone()
  } else {
    second.clone()
  }
}

/// Renders a version in its shortest equivalent form: `6.0.0` as `6`,
/// `6.1.0` as `6.1`, `6.0.1` as `6.0.1`.
///
/// Partial versions are coerced first. Input that isn't a version even after
/// coercion is returned unchanged.
pub fn prettify_version(version: &str) -> String {
  let Some(parsed) = SemanticVersion::coerce(version) else {
    return version.to_string();
  };

  let mut parts = vec![parsed.major().to_string()];
  if parsed.minor() != 0 || parsed.patch() != 0 {
    parts.push(parsed.minor().to_string());
  }
  if parsed.patch() != 0 {
    parts.push(parsed.patch().to_string());
  }
  parts.join(".")
}
