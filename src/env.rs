use std::path::{Path, PathBuf};

use log::debug;

const APP_DIR: &str = "genre-scout";

/// Seed the process environment from a `.env` file.
///
/// `./.env` is tried first, then `<config dir>/genre-scout/.env`. Variables
/// already present in the environment are never overridden, and a missing file
/// is not an error: credentials may come from the real environment.
pub fn load_env_file() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    candidates.extend(config_env_path());
    load_first(&candidates)
}

/// Load the first candidate that exists and parses; later ones are not read.
fn load_first(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find_map(|path| load_from(path))
}

fn load_from(path: &Path) -> Option<PathBuf> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("Loaded environment from {path:?}");
            Some(path.to_path_buf())
        }
        Err(e) => {
            debug!("No .env at {path:?}: {e}");
            None
        }
    }
}

fn config_env_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(".env"))
}
