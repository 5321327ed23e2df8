use error_stack::Report;

use crate::database;

mod impls;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a request handler can answer with.
///
/// Nothing here carries detail to the client: storage errors come back
/// as a bare `500`, missing rows as a bare `404`. Only a rejected
/// payload gets a body, and that is a fixed one-line message.
#[derive(Debug)]
pub enum Error {
  /// The request payload was not a JSON object of the expected shape.
  BadPayload(serde_json::Error),
  NotFound,
  Internal(Report<database::Error>),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::BadPayload(..) => f.write_str("Error in request"),
      Self::NotFound => f.write_str("Not Found"),
      Self::Internal(..) => f.write_str("Internal Server Error"),
    }
  }
}

impl From<Report<database::Error>> for Error {
  fn from(value: Report<database::Error>) -> Self {
    Self::Internal(value)
  }
}
