use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum Error {
  Configuration(String),
  Transport(reqwest::Error),
  Parse(serde_json::Error),
  DataShape(String),
  NotFound(String),
  Api(String),
  Io(std::io::Error),
  Progress(indicatif::style::TemplateError),
}

impl std::error::Error for Error {}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Error::Configuration(e) => std::fmt::Display::fmt(e, f),
      Error::Transport(e) => write!(f, "Request to App Annie failed: {e}"),
      Error::Parse(e) => write!(f, "App Annie answered with invalid JSON: {e}"),
      Error::DataShape(e) => std::fmt::Display::fmt(e, f),
      Error::NotFound(e) => std::fmt::Display::fmt(e, f),
      Error::Api(e) => std::fmt::Display::fmt(e, f),
      Error::Io(e) => write!(f, "Could not write report: {e}"),
      Error::Progress(e) => std::fmt::Display::fmt(e, f),
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(reqwest_error: reqwest::Error) -> Self {
    Error::Transport(reqwest_error)
  }
}

impl From<serde_json::Error> for Error {
  fn from(serde_json_error: serde_json::Error) -> Self {
    Error::Parse(serde_json_error)
  }
}

impl From<std::io::Error> for Error {
  fn from(io_error: std::io::Error) -> Self {
    Error::Io(io_error)
  }
}

impl From<indicatif::style::TemplateError> for Error {
  fn from(template_error: indicatif::style::TemplateError) -> Self {
    Error::Progress(template_error)
  }
}
