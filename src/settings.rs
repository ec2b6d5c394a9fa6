//! Glyph settings
//!
//! Loaded once at startup from a JSON file. Only affects rendering.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::LoadError;

/// Symbols used to draw the arena and its entities
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Live ball
    pub ball: String,
    /// Ghost decoration cells
    pub ghost: String,
    pub wall: String,
    /// Paddle cell
    pub dot: String,
    /// Unused by the game, accepted for config compatibility
    pub pill: String,
    /// Ball once the game is over
    pub death: String,
    /// Empty floor
    pub space: String,
    /// Glyphs are two columns wide (emoji)
    pub use_emoji: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball: "o".to_string(),
            ghost: "G".to_string(),
            wall: "#".to_string(),
            dot: "|".to_string(),
            pill: ".".to_string(),
            death: "X".to_string(),
            space: " ".to_string(),
            use_emoji: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let settings: Settings = serde_json::from_reader(reader)?;
        log::info!(
            "Loaded settings from {} (emoji: {})",
            path.display(),
            settings.use_emoji
        );
        Ok(settings)
    }

    /// Terminal columns taken by one grid cell
    pub fn cell_width(&self) -> u16 {
        if self.use_emoji { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "ball": "⚽", "ghost": "👻", "wall": "🧱", "dot": "🟦",
            "pill": "💊", "death": "💥", "space": "  ", "use_emoji": true
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.ball, "⚽");
        assert_eq!(settings.death, "💥");
        assert!(settings.use_emoji);
        assert_eq!(settings.cell_width(), 2);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"ball": "@"}"#).unwrap();
        assert_eq!(settings.ball, "@");
        assert_eq!(settings.wall, "#");
        assert!(!settings.use_emoji);
        assert_eq!(settings.cell_width(), 1);
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            Settings::load("no/such/config.json"),
            Err(LoadError::Io(_))
        ));
        assert!(matches!(
            serde_json::from_str::<Settings>("{not json").map_err(LoadError::from),
            Err(LoadError::Config(_))
        ));
    }
}
