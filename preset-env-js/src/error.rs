#[derive(Debug, thiserror::Error)]
pub enum PresetError {
  #[error("unknown require type '{0}', expected \"import\" or \"require\"")]
  UnknownRequireType(String),
  #[error("invalid config: {0}")]
  InvalidConfig(#[source] serde_json::Error),
  #[error("invalid targets: {0}")]
  InvalidTargets(#[source] serde_json::Error),
  #[error("failed to render targets: {0}")]
  Render(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PresetError>;
