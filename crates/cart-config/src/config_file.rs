use crate::paths::config_dir;
use std::{env, path::PathBuf};

pub(crate) const CONFIG_FILE: &str = ".cart-tui.toml";
pub(crate) const PLATFORM_CONFIG_FILE: &str = "config.toml";

/// Load the first config file found
///
/// Searches in order:
/// 1. `.cart-tui.toml` in the current working directory
/// 2. `config.toml` in the platform config directory (`~/.config/cart-tui/` on Linux)
/// 3. `.cart-tui.toml` in the home directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    for path in candidate_paths() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    match config_dir() {
        Ok(dir) => paths.push(dir.join(PLATFORM_CONFIG_FILE)),
        Err(e) => log::debug!("Skipping platform config directory: {:#}", e),
    }
    paths.extend(home_config_path());
    paths
}

/// Returns ~/.cart-tui.toml if HOME is set.
fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_config_path_uses_config_file_name() {
        if let Some(path) = home_config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }

    #[test]
    fn test_candidate_paths_order() {
        let paths = candidate_paths();
        assert_eq!(paths[0], PathBuf::from(CONFIG_FILE));

        if let Ok(dir) = config_dir() {
            assert_eq!(paths[1], dir.join(PLATFORM_CONFIG_FILE));
        }
        if let Some(home) = home_config_path() {
            assert_eq!(paths.last(), Some(&home));
        }
    }
}
