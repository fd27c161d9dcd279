use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Name of the cookie the platform reads the session token from.
pub const SESSION_COOKIE: &str = "LEETCODE_SESSION";

/// An authenticated session token, loaded once at process start and read-only
/// for the rest of the invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Load a session token from a plain UTF-8 file. The entire trimmed file
    /// content is the token. A missing file and an empty file are distinct
    /// failures, both different from "never loaded".
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SessionFileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| Error::SessionFileRead {
            path: path.display().to_string(),
            source,
        })?;

        let token = content.trim();
        if token.is_empty() {
            return Err(Error::SessionFileEmpty {
                path: path.display().to_string(),
            });
        }

        tracing::info!("session loaded from {}", path.display());
        Ok(Session {
            token: token.to_string(),
        })
    }

    /// Write a token back to the session file. This is the only writer; the
    /// fetch path never touches the file.
    pub fn save(path: impl AsRef<Path>, token: &str) -> Result<Self> {
        let path = path.as_ref();
        fs::write(path, token).map_err(|source| Error::SessionFileWrite {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("session saved to {}", path.display());
        Ok(Session {
            token: token.to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Cookie` header carrying this session.
    pub fn cookie(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.token)
    }
}
