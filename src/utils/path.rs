use std::path::PathBuf;

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Config directory (always ~/.config/screenhop, regardless of OS)
pub fn get_config_dir() -> PathBuf {
    get_home_dir().join(".config").join("screenhop")
}

/// Config file path (~/.config/screenhop/config.toml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Log directory: the platform cache dir, falling back to home
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("screenhop")
}
