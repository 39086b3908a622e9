use crate::model::ComponentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("failed to write markup: {0}")]
  Io(#[from] std::io::Error),

  #[error("node tree nested deeper than {limit} levels")]
  DepthExceeded { limit: usize },

  #[error("component `{name}` failed")]
  Component {
    name: String,
    #[source]
    source: ComponentError,
  },

  #[error("invalid node tree: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
