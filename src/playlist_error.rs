use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    NetworkError(String),
    ParseError(String),
    WriteError(String),
}

impl Display for PlaylistError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            PlaylistError::NetworkError(ref v) => write!(f, "NetworkError '{}'", v),
            PlaylistError::ParseError(ref v) => write!(f, "ParseError '{}'", v),
            PlaylistError::WriteError(ref v) => write!(f, "WriteError '{}'", v),
        }
    }
}

impl Error for PlaylistError {}

impl From<reqwest::Error> for PlaylistError {
    fn from(err: reqwest::Error) -> Self {
        PlaylistError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for PlaylistError {
    fn from(err: serde_json::Error) -> Self {
        PlaylistError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PlaylistError {
    fn from(err: std::io::Error) -> Self {
        PlaylistError::WriteError(err.to_string())
    }
}
