use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{CredentialError, Error, IoError};

/// Name of the credential entry, both in the env file and in the environment.
pub const KEY_VAR: &str = "FBR_API_KEY";

/// Default location of the persisted credential, relative to the working dir.
pub const ENV_FILE: &str = ".env";

/// Resolve the API key: the environment wins (a real variable, or one loaded
/// by `dotenv()` at startup), otherwise the `.env` file is parsed directly.
pub fn api_key() -> Result<String, Error> {
    if let Ok(key) = env::var(KEY_VAR) {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    load_api_key(Path::new(ENV_FILE))
}

/// Read the key back from a `NAME=value` file.
pub fn load_api_key(path: &Path) -> Result<String, Error> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::from(CredentialError::NotFound(path.to_path_buf())),
        _ => Error::from(IoError::new(path.to_path_buf(), e)),
    })?;

    let entries = parse_env(&contents, path)?;
    match entries.get(KEY_VAR) {
        Some(key) if !key.is_empty() => Ok(key.clone()),
        _ => Err(CredentialError::Missing(path.to_path_buf()).into()),
    }
}

/// Write (or overwrite) the credential file with a single `FBR_API_KEY` line.
pub fn store_api_key(path: &Path, key: &str) -> Result<(), Error> {
    fs::write(path, format!("{}={}\n", KEY_VAR, key.trim()))
        .map_err(|e| IoError::new(path.to_path_buf(), e).into())
}

/// Parse `NAME=value` lines into a map. Blank lines and `#` comments are
/// skipped; a remaining line without `=` makes the whole file malformed.
fn parse_env(contents: &str, path: &Path) -> Result<HashMap<String, String>, CredentialError> {
    let mut entries = HashMap::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, value) = line.split_once('=').ok_or(CredentialError::Malformed {
            file: path.to_path_buf(),
            line: idx + 1,
        })?;
        entries.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(entries)
}

/// Default path helper for callers that sit at the project root.
pub fn env_file() -> PathBuf {
    PathBuf::from(ENV_FILE)
}
