//! Read-only access to the locally cached hub token.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// Returns the cached hub token, if any.
///
/// Looks at `HF_TOKEN` first, then the token file under `HF_HOME` (or the
/// default `~/.cache/huggingface`), then the legacy `~/.huggingface/token`.
///
/// # Errors
/// `Io` if a token file exists but cannot be read.
pub fn get_user_token() -> Result<Option<String>> {
    if let Some(token) = env::var("HF_TOKEN").ok().and_then(non_empty) {
        return Ok(Some(token));
    }
    read_first_token(&token_paths())
}

/// Candidate token files, most specific first.
pub fn token_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);

    let hf_home = env::var_os("HF_HOME").map(PathBuf::from).or_else(|| {
        env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
            .map(|cache| cache.join("huggingface"))
    });
    if let Some(hf_home) = hf_home {
        paths.push(hf_home.join("token"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".huggingface").join("token"));
    }

    paths
}

/// Reads the first non-empty token among `paths`, skipping missing files.
pub fn read_first_token<P: AsRef<Path>>(paths: &[P]) -> Result<Option<String>> {
    for path in paths {
        match fs::read_to_string(path) {
            Ok(content) => {
                if let Some(token) = non_empty(content) {
                    return Ok(Some(token));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

fn non_empty(token: String) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}
