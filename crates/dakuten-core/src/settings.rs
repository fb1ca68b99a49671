//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use crate::converter::Converter;
use crate::transliterate::Segmentation;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML.get();
        debug!(custom = custom.is_some(), "loading settings");
        let toml_str = custom.map(|s| s.as_str()).unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineSettings,
    pub message: MessageSettings,
    pub inline: InlineSettings,
    converters: ConverterSettings,
    /// Parsed `converters.order`.
    #[serde(skip)]
    order_parsed: Vec<Converter>,
}

impl Settings {
    /// Converters to offer, in presentation order.
    pub fn converters(&self) -> &[Converter] {
        &self.order_parsed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub segmentation: Segmentation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageSettings {
    pub max_chars: usize,
    pub too_long: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InlineSettings {
    pub description_max_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct ConverterSettings {
    order: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.order_parsed = parse_order(&s.converters.order)?;
    Ok(s)
}

fn parse_order(raw: &[String]) -> Result<Vec<Converter>, SettingsError> {
    if raw.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "converters.order".to_string(),
            reason: "must list at least one converter".to_string(),
        });
    }
    let mut result: Vec<Converter> = Vec::with_capacity(raw.len());
    for id in raw {
        let converter: Converter = id.parse().map_err(|e| SettingsError::InvalidValue {
            field: "converters.order".to_string(),
            reason: format!("{e}"),
        })?;
        if result.contains(&converter) {
            return Err(SettingsError::InvalidValue {
                field: "converters.order".to_string(),
                reason: format!("duplicate converter: {id}"),
            });
        }
        result.push(converter);
    }
    Ok(result)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive_usize!(message.max_chars);
    check_positive_usize!(inline.description_max_bytes);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.engine.segmentation, Segmentation::Grapheme);
        assert_eq!(s.message.max_chars, 4096);
        assert_eq!(s.message.too_long, "Input is too long!");
        assert_eq!(s.inline.description_max_bytes, 64);
        assert_eq!(s.converters(), &Converter::ALL);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[engine]
segmentation = "codepoint"

[message]
max_chars = 200
too_long = "too long"

[inline]
description_max_bytes = 32

[converters]
order = ["de", "combining-handakuon"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.engine.segmentation, Segmentation::CodePoint);
        assert_eq!(s.message.max_chars, 200);
        assert_eq!(
            s.converters(),
            &[Converter::ExternalDakuon, Converter::CombiningHandakuon]
        );
    }

    #[test]
    fn segmentation_defaults_to_grapheme() {
        let toml = r#"
[engine]

[message]
max_chars = 10
too_long = "x"

[inline]
description_max_bytes = 8

[converters]
order = ["dc"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.engine.segmentation, Segmentation::Grapheme);
    }

    #[test]
    fn error_zero_max_chars() {
        let toml = r#"
[engine]
[message]
max_chars = 0
too_long = "x"
[inline]
description_max_bytes = 64
[converters]
order = ["dc"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("message.max_chars"));
    }

    #[test]
    fn error_unknown_converter() {
        let toml = r#"
[engine]
[message]
max_chars = 10
too_long = "x"
[inline]
description_max_bytes = 64
[converters]
order = ["dc", "zz"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("unknown converter: zz"));
    }

    #[test]
    fn error_duplicate_converter() {
        let toml = r#"
[engine]
[message]
max_chars = 10
too_long = "x"
[inline]
description_max_bytes = 64
[converters]
order = ["dc", "combining-dakuon"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate converter"));
    }

    #[test]
    fn error_empty_order() {
        let toml = r#"
[engine]
[message]
max_chars = 10
too_long = "x"
[inline]
description_max_bytes = 64
[converters]
order = []
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "converters.order"));
    }

    #[test]
    fn error_unknown_segmentation() {
        let toml = r#"
[engine]
segmentation = "word"
[message]
max_chars = 10
too_long = "x"
[inline]
description_max_bytes = 64
[converters]
order = ["dc"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
