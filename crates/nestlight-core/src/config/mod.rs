//! Highlighter configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! Serde is Rust's standard for serialization/deserialization.
//! The `#[derive(Serialize, Deserialize)]` macro generates
//! code to convert structs to/from JSON, TOML, etc.
//!
//! `#[serde(default)]` uses Default::default() for missing fields,
//! making configs backward-compatible.
//!
//! Two types live here. [`Settings`] mirrors the settings file: every
//! field is optional and may be overridden per syntax. [`Configuration`]
//! is what a highlighting pass consumes: validated, complete and
//! immutable.

mod color;

pub use color::{Color, ColorPair, ColorSpec, Rgb};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bracket::BracketPair;
use crate::scope::Classification;

/// How a classified scope is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Not painted at all
    #[default]
    None,
    /// Only the two brackets are painted
    Brackets,
    /// The whole scope, brackets included, is painted
    Expression,
}

/// Which side of a scope a cursor must touch for it to count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjacentSide {
    #[default]
    None,
    Left,
    Right,
    Both,
}

impl AdjacentSide {
    pub fn needs_left(self) -> bool {
        matches!(self, AdjacentSide::Left | AdjacentSide::Both)
    }

    pub fn needs_right(self) -> bool {
        matches!(self, AdjacentSide::Right | AdjacentSide::Both)
    }
}

/// Display mode per classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    pub primary: ColorMode,
    pub secondary: ColorMode,
    pub offside: ColorMode,
    pub adjacent: ColorMode,
    pub inconsistent: ColorMode,
}

impl Modes {
    pub fn of(&self, classification: Classification) -> ColorMode {
        match classification {
            Classification::Primary => self.primary,
            Classification::Secondary(_) => self.secondary,
            Classification::Offside(_) => self.offside,
            Classification::Adjacent => self.adjacent,
            Classification::Inconsistent => self.inconsistent,
        }
    }
}

/// Colors of every classification plus the opaque base colors.
///
/// Base colors are `Rgb`, not `Color`, so the bottom of every background
/// stack is opaque by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    pub primary: ColorPair,
    /// Cycled by outer level; never empty
    pub secondary: Vec<ColorPair>,
    /// Cycled by inner level; never empty
    pub offside: Vec<ColorPair>,
    pub adjacent: ColorPair,
    pub inconsistent: ColorPair,
    /// Default text color
    pub text: Rgb,
    /// Editor background
    pub background: Rgb,
    /// Background of lines holding a cursor
    pub current_line: Rgb,
}

/// Validated settings for one highlighting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub enabled: bool,
    pub brackets: Vec<BracketPair>,
    pub scope_blacklist: Vec<String>,
    /// Characters scanned on each side of a cursor
    pub scan_radius: usize,
    pub modes: Modes,
    /// Deepest secondary level painted (`None` = unlimited)
    pub secondary_limit: Option<u32>,
    /// Deepest offside level painted (`None` = unlimited)
    pub offside_limit: Option<u32>,
    pub adjacent_side: AdjacentSide,
    pub colors: ColorTable,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enabled: true,
            brackets: vec![
                BracketPair::new("(", ")"),
                BracketPair::new("[", "]"),
                BracketPair::new("{", "}"),
            ],
            scope_blacklist: vec!["comment".to_string(), "string".to_string()],
            scan_radius: 100,
            modes: Modes {
                primary: ColorMode::Expression,
                secondary: ColorMode::Expression,
                offside: ColorMode::Brackets,
                adjacent: ColorMode::Brackets,
                inconsistent: ColorMode::Brackets,
            },
            secondary_limit: None,
            offside_limit: Some(2),
            adjacent_side: AdjacentSide::Both,
            colors: ColorTable {
                primary: ColorPair::new(Color::rgb(0xFFD700), Color::rgb(0x3A3520)),
                secondary: vec![
                    ColorPair::new(Color::Transparent, Color::rgb(0x2B2838)),
                    ColorPair::new(Color::Transparent, Color::rgb(0x232B36)),
                ],
                offside: vec![
                    ColorPair::foreground(0xDA70D6),
                    ColorPair::foreground(0x32CD32),
                    ColorPair::foreground(0x1E90FF),
                ],
                adjacent: ColorPair::foreground(0xFF7F50),
                inconsistent: ColorPair::new(Color::rgb(0xFF5555), Color::rgb(0x4A1E1E)),
                text: Rgb::from_u32(0xD4D4D4),
                background: Rgb::from_u32(0x1E1E1E),
                current_line: Rgb::from_u32(0x2A2A2A),
            },
        }
    }
}

/// Colors of one classification, as written in the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPairSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,
}

impl ColorPairSpec {
    /// Parses both colors; a missing one is transparent.
    pub fn parse(&self) -> Result<ColorPair, ConfigError> {
        let parse = |spec: &Option<ColorSpec>| spec.as_ref().map_or(Ok(Color::Transparent), ColorSpec::parse);
        Ok(ColorPair::new(parse(&self.foreground)?, parse(&self.background)?))
    }
}

/// Settings of one classification.
///
/// Not every key applies to every classification: `colors` and
/// `depth_limit` belong to `secondary` and `offside`, `side` to
/// `adjacent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KindSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ColorMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorPairSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<ColorPairSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<AdjacentSide>,
}

impl KindSettings {
    /// Applies an override on top of these settings.
    ///
    /// `color` and `colors` are replaced together, so an override never
    /// ends up with both.
    fn overlay(&self, over: &KindSettings) -> KindSettings {
        let (color, colors) = if over.color.is_some() || over.colors.is_some() {
            (over.color.clone(), over.colors.clone())
        } else {
            (self.color.clone(), self.colors.clone())
        };

        KindSettings {
            enabled: over.enabled.or(self.enabled),
            mode: over.mode.or(self.mode),
            color,
            colors,
            depth_limit: over.depth_limit.or(self.depth_limit),
            side: over.side.or(self.side),
        }
    }

    /// Effective mode: disabled kinds are never painted.
    fn mode_or(&self, fallback: ColorMode) -> ColorMode {
        if self.enabled == Some(false) {
            ColorMode::None
        } else {
            self.mode.unwrap_or(fallback)
        }
    }

    fn single_color(&self, section: &'static str, fallback: ColorPair) -> Result<ColorPair, ConfigError> {
        if self.colors.is_some() {
            return Err(ConfigError::UnexpectedKey { section, key: "colors" });
        }
        self.color.as_ref().map_or(Ok(fallback), ColorPairSpec::parse)
    }

    fn color_list(&self, section: &'static str, fallback: &[ColorPair]) -> Result<Vec<ColorPair>, ConfigError> {
        match (&self.color, &self.colors) {
            (Some(_), Some(_)) => Err(ConfigError::Conflict {
                section,
                first: "color",
                second: "colors",
            }),
            (Some(color), None) => Ok(vec![color.parse()?]),
            (None, Some(colors)) if colors.is_empty() => Err(ConfigError::EmptyColors(section)),
            (None, Some(colors)) => colors.iter().map(ColorPairSpec::parse).collect(),
            (None, None) => Ok(fallback.to_vec()),
        }
    }

    fn limit(&self, section: &'static str, fallback: Option<u32>) -> Result<Option<u32>, ConfigError> {
        match self.depth_limit {
            Some(0) => Err(ConfigError::InvalidDepthLimit(section)),
            Some(limit) => Ok(Some(limit)),
            None => Ok(fallback),
        }
    }

    fn reject(&self, section: &'static str, depth_limit: bool, side: bool) -> Result<(), ConfigError> {
        if depth_limit && self.depth_limit.is_some() {
            return Err(ConfigError::UnexpectedKey { section, key: "depth_limit" });
        }
        if side && self.side.is_some() {
            return Err(ConfigError::UnexpectedKey { section, key: "side" });
        }
        Ok(())
    }
}

/// Base colors of the editor theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_line: Option<ColorSpec>,
}

impl ThemeSettings {
    fn base(name: &str, spec: &Option<ColorSpec>, fallback: Rgb) -> Result<Rgb, ConfigError> {
        match spec {
            None => Ok(fallback),
            Some(spec) => spec
                .parse()?
                .opaque()
                .ok_or_else(|| ConfigError::TransparentBase(name.to_string())),
        }
    }
}

/// One or several syntax names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyntaxNames {
    One(String),
    Many(Vec<String>),
}

impl SyntaxNames {
    pub fn matches(&self, syntax: &str) -> bool {
        match self {
            SyntaxNames::One(name) => name.eq_ignore_ascii_case(syntax),
            SyntaxNames::Many(names) => names.iter().any(|n| n.eq_ignore_ascii_case(syntax)),
        }
    }
}

/// Settings applied only to some syntaxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Override {
    pub syntax: SyntaxNames,

    /// Replaces the bracket list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brackets: Option<Vec<BracketPair>>,
    /// Extends the bracket list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_brackets: Vec<BracketPair>,

    /// Replaces the scope blacklist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_blacklist: Option<Vec<String>>,
    /// Extends the scope blacklist
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_scope_blacklist: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_radius: Option<usize>,

    #[serde(default)]
    pub primary: KindSettings,
    #[serde(default)]
    pub secondary: KindSettings,
    #[serde(default)]
    pub offside: KindSettings,
    #[serde(default)]
    pub adjacent: KindSettings,
    #[serde(default)]
    pub inconsistent: KindSettings,
}

/// The settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub enabled: bool,
    pub brackets: Vec<BracketPair>,
    pub scope_blacklist: Vec<String>,
    pub scan_radius: usize,
    pub theme: ThemeSettings,
    pub primary: KindSettings,
    pub secondary: KindSettings,
    pub offside: KindSettings,
    pub adjacent: KindSettings,
    pub inconsistent: KindSettings,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<Override>,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = Configuration::default();
        Self {
            enabled: defaults.enabled,
            brackets: defaults.brackets,
            scope_blacklist: defaults.scope_blacklist,
            scan_radius: defaults.scan_radius,
            theme: ThemeSettings::default(),
            primary: KindSettings::default(),
            secondary: KindSettings::default(),
            offside: KindSettings::default(),
            adjacent: KindSettings::default(),
            inconsistent: KindSettings::default(),
            overrides: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_else(|err| {
            tracing::warn!("Falling back to default settings: {}", err);
            Self::default()
        })
    }

    /// Loads settings from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads from the default settings path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default settings file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("nestlight").join("config.toml"))
    }

    /// Writes the settings to a file, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates the settings and produces the configuration for a syntax.
    ///
    /// Overrides whose syntax matches are applied in file order.
    pub fn resolve(&self, syntax: Option<&str>) -> Result<Configuration, ConfigError> {
        let mut enabled = self.enabled;
        let mut brackets = self.brackets.clone();
        let mut blacklist = self.scope_blacklist.clone();
        let mut scan_radius = self.scan_radius;
        let mut kinds = [
            self.primary.clone(),
            self.secondary.clone(),
            self.offside.clone(),
            self.adjacent.clone(),
            self.inconsistent.clone(),
        ];

        let applicable = self
            .overrides
            .iter()
            .filter(|o| syntax.is_some_and(|s| o.syntax.matches(s)));
        for over in applicable {
            tracing::debug!("Applying override for {:?}", over.syntax);
            enabled = over.enabled.unwrap_or(enabled);
            scan_radius = over.scan_radius.unwrap_or(scan_radius);
            if let Some(replacement) = &over.brackets {
                brackets = replacement.clone();
            }
            brackets.extend(over.additional_brackets.iter().cloned());
            if let Some(replacement) = &over.scope_blacklist {
                blacklist = replacement.clone();
            }
            blacklist.extend(over.additional_scope_blacklist.iter().cloned());

            let layers = [
                &over.primary,
                &over.secondary,
                &over.offside,
                &over.adjacent,
                &over.inconsistent,
            ];
            for (kind, layer) in kinds.iter_mut().zip(layers) {
                *kind = kind.overlay(layer);
            }
        }

        if brackets
            .iter()
            .any(|pair| pair.left.is_empty() || pair.right.is_empty())
        {
            return Err(ConfigError::EmptyBracket);
        }

        let [primary, secondary, offside, adjacent, inconsistent] = kinds;
        let defaults = Configuration::default();
        let base = &defaults.colors;

        primary.reject("primary", true, true)?;
        secondary.reject("secondary", false, true)?;
        offside.reject("offside", false, true)?;
        adjacent.reject("adjacent", true, false)?;
        inconsistent.reject("inconsistent", true, true)?;

        let colors = ColorTable {
            primary: primary.single_color("primary", base.primary)?,
            secondary: secondary.color_list("secondary", &base.secondary)?,
            offside: offside.color_list("offside", &base.offside)?,
            adjacent: adjacent.single_color("adjacent", base.adjacent)?,
            inconsistent: inconsistent.single_color("inconsistent", base.inconsistent)?,
            text: ThemeSettings::base("text", &self.theme.text, base.text)?,
            background: ThemeSettings::base("background", &self.theme.background, base.background)?,
            current_line: ThemeSettings::base(
                "current_line",
                &self.theme.current_line,
                base.current_line,
            )?,
        };

        Ok(Configuration {
            enabled,
            brackets,
            scope_blacklist: blacklist,
            scan_radius,
            modes: Modes {
                primary: primary.mode_or(defaults.modes.primary),
                secondary: secondary.mode_or(defaults.modes.secondary),
                offside: offside.mode_or(defaults.modes.offside),
                adjacent: adjacent.mode_or(defaults.modes.adjacent),
                inconsistent: inconsistent.mode_or(defaults.modes.inconsistent),
            },
            secondary_limit: secondary.limit("secondary", defaults.secondary_limit)?,
            offside_limit: offside.limit("offside", defaults.offside_limit)?,
            adjacent_side: adjacent.side.unwrap_or(defaults.adjacent_side),
            colors,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("'{0}' is not a valid color")]
    InvalidColor(String),

    #[error("{0} is not in the 24-bit color range")]
    ColorOutOfRange(i64),

    #[error("Base color '{0}' must not be transparent")]
    TransparentBase(String),

    #[error("[{section}] sets both '{first}' and '{second}'")]
    Conflict {
        section: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("[{section}] does not accept '{key}'")]
    UnexpectedKey {
        section: &'static str,
        key: &'static str,
    },

    #[error("[{0}] colors must not be empty")]
    EmptyColors(&'static str),

    #[error("[{0}] depth_limit must be positive")]
    InvalidDepthLimit(&'static str),

    #[error("Bracket strings must not be empty")]
    EmptyBracket,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Settings::default().resolve(None).unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.scan_radius, 100);
        assert_eq!(config.modes.primary, ColorMode::Expression);
    }

    #[test]
    fn test_config_serialization() {
        let mut settings = Settings::default();
        settings.offside.colors = Some(vec![ColorPairSpec {
            foreground: Some("orchid".into()),
            background: None,
        }]);
        let toml = toml::to_string(&settings).unwrap();
        let parsed = Settings::parse(&toml).unwrap();
        assert_eq!(parsed.resolve(None).unwrap(), settings.resolve(None).unwrap());
    }

    #[test]
    fn test_parse_full_file() {
        let settings = Settings::parse(
            r##"
            brackets = [["(", ")"], ["[", "]"]]
            scan_radius = 40

            [theme]
            background = "#000"
            current_line = 0x111111

            [primary]
            mode = "brackets"
            color = { foreground = "red", background = "transparent" }

            [secondary]
            colors = [{ background = "#202020" }, { background = "#303030" }]
            depth_limit = 3

            [adjacent]
            side = "left"

            [inconsistent]
            enabled = false
            "##,
        )
        .unwrap();
        let config = settings.resolve(None).unwrap();

        assert_eq!(config.scan_radius, 40);
        assert_eq!(config.brackets.len(), 2);
        assert_eq!(config.modes.primary, ColorMode::Brackets);
        assert_eq!(config.modes.inconsistent, ColorMode::None);
        assert_eq!(config.colors.primary, ColorPair::foreground(0xFF0000));
        assert_eq!(config.colors.secondary.len(), 2);
        assert_eq!(config.colors.secondary[1].background, Color::rgb(0x303030));
        assert_eq!(config.secondary_limit, Some(3));
        assert_eq!(config.adjacent_side, AdjacentSide::Left);
        assert_eq!(config.colors.background, Rgb::from_u32(0x000000));
        assert_eq!(config.colors.current_line, Rgb::from_u32(0x111111));
    }

    #[test]
    fn test_invalid_mode_is_parse_error() {
        let result = Settings::parse("[primary]\nmode = \"rainbow\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_conflicting_color_keys() {
        let settings = Settings::parse(
            "[offside]\ncolor = { foreground = \"red\" }\ncolors = [{ foreground = \"blue\" }]\n",
        )
        .unwrap();
        assert!(matches!(
            settings.resolve(None),
            Err(ConfigError::Conflict { section: "offside", .. })
        ));
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            ("[secondary]\ncolors = []\n", "empty"),
            ("[offside]\ndepth_limit = 0\n", "limit"),
            ("[primary]\nside = \"left\"\n", "side"),
            ("[theme]\nbackground = \"transparent\"\n", "base"),
            ("brackets = [[\"\", \")\"]]\n", "bracket"),
            ("[adjacent]\ncolor = { foreground = \"#12345\" }\n", "color"),
        ];
        for (text, label) in cases {
            let result = Settings::parse(text).and_then(|s| s.resolve(None));
            assert!(result.is_err(), "{label} should fail");
        }
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::parse(
            r##"
            [offside]
            colors = [{ foreground = "red" }, { foreground = "green" }]

            [[overrides]]
            syntax = ["lisp", "Scheme"]
            additional_brackets = [["#(", ")"]]
            additional_scope_blacklist = ["constant.character"]
            primary = { mode = "brackets" }
            offside = { color = { foreground = "blue" } }

            [[overrides]]
            syntax = "rust"
            enabled = false
            "##,
        )
        .unwrap();

        let plain = settings.resolve(None).unwrap();
        assert_eq!(plain.brackets.len(), 3);
        assert_eq!(plain.colors.offside.len(), 2);

        let lisp = settings.resolve(Some("scheme")).unwrap();
        assert_eq!(lisp.brackets.len(), 4);
        assert!(lisp.brackets.contains(&BracketPair::new("#(", ")")));
        assert_eq!(lisp.scope_blacklist.len(), 3);
        assert_eq!(lisp.modes.primary, ColorMode::Brackets);
        assert_eq!(lisp.colors.offside, vec![ColorPair::foreground(0x0000FF)]);

        let rust = settings.resolve(Some("rust")).unwrap();
        assert!(!rust.enabled);
    }

    #[test]
    fn test_load_and_save_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.scan_radius = 7;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.scan_radius, 7);
        assert!(Settings::load_from(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_adjacent_side_flags() {
        assert!(AdjacentSide::Both.needs_left() && AdjacentSide::Both.needs_right());
        assert!(AdjacentSide::Left.needs_left() && !AdjacentSide::Left.needs_right());
        assert!(!AdjacentSide::None.needs_left() && !AdjacentSide::None.needs_right());
    }
}
