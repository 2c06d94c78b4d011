use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const MAKERMIND_DIR: &str = ".makermind";
pub const CONFIG_FILE: &str = ".makermind/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn makermind_dir(root: &Path) -> PathBuf {
    root.join(MAKERMIND_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// File backing a single storage key: `.makermind/<key>.json`.
pub fn slot_path(root: &Path, key: &str) -> PathBuf {
    makermind_dir(root).join(format!("{key}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_path_lives_under_makermind_dir() {
        let p = slot_path(Path::new("/tmp/proj"), "maker_inventory");
        assert_eq!(p, PathBuf::from("/tmp/proj/.makermind/maker_inventory.json"));
    }

    #[test]
    fn config_path_is_yaml() {
        let p = config_path(Path::new("/tmp/proj"));
        assert_eq!(p, PathBuf::from("/tmp/proj/.makermind/config.yaml"));
    }
}
