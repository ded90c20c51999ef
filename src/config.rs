use crate::cmds::Cmd;

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, error, fmt, fs, io};
use unsegen::input::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "DAYPICK_CONFIG_FILE";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "could not read config file: {}", err),
            ConfigError::Parse(err) => write!(f, "invalid config file: {}", err),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub today_char: Option<char>,
    pub focus_char: Option<char>,
    #[serde(skip, default = "default_key_map")]
    pub key_map: KeyMap,
}

fn default_key_map() -> KeyMap {
    let mut key_map = HashMap::new();

    key_map.insert(Key::Char('l'), Cmd::FocusNextDay);
    key_map.insert(Key::Char('h'), Cmd::FocusPrevDay);
    key_map.insert(Key::Char('j'), Cmd::FocusNextWeek);
    key_map.insert(Key::Char('k'), Cmd::FocusPrevWeek);
    key_map.insert(Key::Right, Cmd::FocusNextDay);
    key_map.insert(Key::Left, Cmd::FocusPrevDay);
    key_map.insert(Key::Down, Cmd::FocusNextWeek);
    key_map.insert(Key::Up, Cmd::FocusPrevWeek);
    key_map.insert(Key::Char('n'), Cmd::NextMonth);
    key_map.insert(Key::Char('p'), Cmd::PrevMonth);
    key_map.insert(Key::PageDown, Cmd::NextMonth);
    key_map.insert(Key::PageUp, Cmd::PrevMonth);
    key_map.insert(Key::Char('t'), Cmd::Today);
    key_map.insert(Key::Char('\n'), Cmd::Select);
    key_map.insert(Key::Char(' '), Cmd::Select);
    key_map.insert(Key::Char('q'), Cmd::Exit);

    key_map
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            today_char: Some('*'),
            focus_char: None,
            key_map: default_key_map(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("daypick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".daypick.toml"));
    }

    locations
}

/// Loads the explicitly given config file, or the first one found in
/// the usual locations, or the defaults.
pub fn load_suitable_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            return Config::load(&location);
        }
    }

    log::info!("no config file found, using defaults");
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_commands() {
        let config = Config::default();

        for cmd in &[
            Cmd::FocusNextDay,
            Cmd::FocusPrevDay,
            Cmd::FocusNextWeek,
            Cmd::FocusPrevWeek,
            Cmd::NextMonth,
            Cmd::PrevMonth,
            Cmd::Today,
            Cmd::Select,
            Cmd::Exit,
        ] {
            assert!(
                config.key_map.values().any(|mapped| mapped == cmd),
                "no binding for {:?}",
                cmd
            );
        }
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("tick_rate_ms = 250").unwrap();

        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert_eq!(config.today_char, Some('*'));
        assert!(!config.key_map.is_empty());
    }

    #[test]
    fn theme_chars_from_toml() {
        let config: Config = toml::from_str("today_char = \"@\"\nfocus_char = \">\"").unwrap();

        assert_eq!(config.today_char, Some('@'));
        assert_eq!(config.focus_char, Some('>'));
    }
}
