use thiserror::Error;

/// Longest request path accepted by the generate route.
pub const DEFAULT_MAX_PATH_LEN: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    #[error("Path is too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },
}

/// A validated request path, without its leading `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    raw: String,
    extension: String,
}

impl RequestPath {
    /// Validate `raw` against `max_len` (counted in characters) and derive
    /// its extension.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, PathError> {
        let raw = raw.trim_start_matches('/');
        let len = raw.chars().count();
        if len > max_len {
            return Err(PathError::TooLong { len, max: max_len });
        }

        Ok(Self {
            raw: raw.to_string(),
            extension: extension_of(raw),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lower-cased extension of the final segment, empty when there is none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Final `/`-separated segment (empty for a trailing slash).
    pub fn file_name(&self) -> &str {
        last_segment(&self.raw)
    }
}

impl std::fmt::Display for RequestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn extension_of(path: &str) -> String {
    last_segment(path)
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
