use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{InjectError, Result};

pub const API_KEY_NAME: &str = "GOOGLE_MAPS_API_KEY";

// CR, LS and PS end a line as well as LF.
static API_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"GOOGLE_MAPS_API_KEY=([^\r\n\x{2028}\x{2029}]+)").expect("valid api key pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<ApiKey> for String {
    fn from(key: ApiKey) -> String {
        key.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn extract_api_key(contents: &str) -> Option<ApiKey> {
    API_KEY_PATTERN
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|value| ApiKey(trim_value(value.as_str()).to_string()))
}

fn trim_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn read_api_key(path: &Path) -> Result<ApiKey> {
    let contents = fs::read_to_string(path).map_err(|err| InjectError::read(path, err))?;
    extract_api_key(&contents).ok_or_else(|| InjectError::MissingKey {
        path: path.to_path_buf(),
    })
}
