use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crossterm::style::Color;
use log::{warn, LevelFilter};
use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    render::Theme,
};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

pub const DEFAULT_SIZE: usize = 51;
pub const MIN_SIZE: usize = 5;
pub const DEFAULT_DELAY_MS: u64 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub wall: Color,
    pub empty: Color,
    pub depth_first: Color,
    pub breadth_first: Color,
    pub both: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            empty: Color::White,
            depth_first: Color::Cyan,
            breadth_first: Color::Red,
            both: Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub wall_char: Option<char>,
    #[serde(default)]
    pub visit_char: Option<char>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_size(mut self, value: usize) -> Self {
        self.size = Some(value);
        self
    }

    pub fn get_size(&self) -> usize {
        self.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_delay_ms(mut self, value: u64) -> Self {
        self.delay_ms = Some(value);
        self
    }

    pub fn get_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn get_color_scheme(&self) -> ColorScheme {
        self.color_scheme.clone().unwrap_or_default()
    }

    pub fn get_theme(&self) -> Theme {
        let default = Theme::default();
        Theme {
            colors: self.get_color_scheme(),
            wall_char: self.wall_char.unwrap_or(default.wall_char),
            visit_char: self.visit_char.unwrap_or(default.visit_char),
        }
    }

    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazerace")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> std::result::Result<Self, ron::error::SpannedError> {
        Self::options().from_str(text)
    }

    /// Loads settings from `path`, writing the bundled defaults there first if it doesn't exist.
    ///
    /// An existing file is never overwritten, even when it can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("no settings at {:?}, writing defaults", path);
                Self::reset_config(path)?;
                DEFAULT_SETTINGS.to_string()
            }
            Err(err) => return Err(err.into()),
        };

        let settings = Self::from_ron(&text).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(size) = settings.size {
            check_size(size)?;
        }

        Ok(settings)
    }

    pub fn reset_config(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

/// Side lengths accepted for a square maze: odd and at least [`MIN_SIZE`].
pub fn check_size(size: usize) -> Result<usize> {
    if size < MIN_SIZE || size % 2 == 0 {
        return Err(Error::BadSize { size });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.get_size(), DEFAULT_SIZE);
        assert_eq!(settings.get_delay(), Duration::from_millis(DEFAULT_DELAY_MS));
        assert_eq!(settings.get_log_level(), LogLevel::Warn);
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron("(size: 21)").unwrap();
        assert_eq!(settings.get_size(), 21);
        assert_eq!(settings.get_seed(), None);
        assert_eq!(settings.get_color_scheme(), ColorScheme::default());
        assert_eq!(settings.get_theme().wall_char, '#');
    }

    #[test]
    fn implicit_some() {
        let settings = Settings::from_ron("(seed: 5, log_level: Debug, visit_char: '*')").unwrap();
        assert_eq!(settings.get_seed(), Some(5));
        assert_eq!(settings.get_log_level(), LogLevel::Debug);
        assert_eq!(settings.get_theme().visit_char, '*');
    }

    #[test]
    fn survives_serialization() {
        let settings = Settings::new()
            .set_size(31)
            .set_delay_ms(0)
            .set_seed(77)
            .set_log_level(LogLevel::Trace);
        let text = ron::to_string(&settings).unwrap();
        assert_eq!(Settings::from_ron(&text).unwrap(), settings);
    }

    fn temp_settings(name: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "mazerace-settings-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.ron");
        (dir, path)
    }

    #[test]
    fn malformed_file_is_reported() {
        let (dir, path) = temp_settings("malformed");
        fs::write(&path, "(size: \"big\")").unwrap();

        assert!(matches!(Settings::load(&path), Err(Error::Settings { .. })));

        Settings::reset_config(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap().get_size(), DEFAULT_SIZE);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_created() {
        let (dir, path) = temp_settings("missing");
        let _ = fs::remove_file(&path);

        assert_eq!(Settings::load(&path).unwrap().get_size(), DEFAULT_SIZE);
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_SETTINGS);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unreadable_file_is_kept() {
        let (dir, path) = temp_settings("binary");
        let bytes = b"(s\xff\xfe)";
        fs::write(&path, bytes).unwrap();

        assert!(matches!(Settings::load(&path), Err(Error::Io(_))));
        assert_eq!(fs::read(&path).unwrap(), bytes);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn sizes_must_be_odd_and_at_least_five() {
        assert_eq!(check_size(5).unwrap(), 5);
        assert_eq!(check_size(DEFAULT_SIZE).unwrap(), DEFAULT_SIZE);
        for size in [0, 3, 4, 6, 50] {
            assert!(matches!(check_size(size), Err(Error::BadSize { .. })));
        }
    }

    #[test]
    fn small_size_in_file_is_rejected() {
        let (dir, path) = temp_settings("small");
        for text in ["(size: 3)", "(size: 4)"] {
            fs::write(&path, text).unwrap();
            assert!(matches!(Settings::load(&path), Err(Error::BadSize { .. })));
            assert_eq!(fs::read_to_string(&path).unwrap(), text);
        }
        fs::remove_dir_all(&dir).unwrap();
    }
}
