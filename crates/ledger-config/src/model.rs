use serde::{de::Deserializer, Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Stores user-configurable ledger preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub theme: Theme,
    /// When disabled, submitted dates are ignored and no month filter applies.
    #[serde(default = "Config::default_track_dates")]
    pub track_dates: bool,
    #[serde(default = "Config::default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub color_assignment: ColorAssignment,
    /// Per-category color overrides keyed by category label, used with
    /// [`ColorAssignment::ByCategory`].
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub category_colors: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            theme: Theme::default(),
            track_dates: Self::default_track_dates(),
            palette: Self::default_palette(),
            color_assignment: ColorAssignment::default(),
            category_colors: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_track_dates() -> bool {
        true
    }

    pub fn default_palette() -> Vec<String> {
        ["#4F46E5", "#22C55E", "#EF4444", "#FACC15"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    /// Lenient parse: anything other than `dark` is the light theme.
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

/// How chart colors are bound to categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorAssignment {
    /// Cycle the palette by slice position.
    #[default]
    Positional,
    /// Fix each category's color once.
    ByCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let cfg: Config = serde_json::from_str(
            r#"{"locale":"en-IN","currency":"INR","theme":"neon"}"#,
        )
        .unwrap();
        assert_eq!(cfg.theme, Theme::Light);
        assert!(cfg.track_dates);
        assert_eq!(cfg.palette, Config::default_palette());
        assert_eq!(cfg.color_assignment, ColorAssignment::Positional);
    }

    #[test]
    fn empty_object_loads_every_default() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn color_assignment_uses_snake_case() {
        let json = serde_json::to_string(&ColorAssignment::ByCategory).unwrap();
        assert_eq!(json, "\"by_category\"");
    }
}
