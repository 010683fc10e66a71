use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    TypeError(String, String),
    UrlError(String, String),
    NoOutputDir,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            ConfigError::TypeError(ref field_name, ref field_value) => write!(f, "Value {} for field {} has wrong type", field_value, field_name),
            ConfigError::UrlError(ref field_name, ref field_value) => write!(f, "Value {} for field {} is not a valid url", field_value, field_name),
            ConfigError::NoOutputDir => write!(f, "Unable to find the home directory, please specify --output"),
        }
    }
}

impl Error for ConfigError {}
