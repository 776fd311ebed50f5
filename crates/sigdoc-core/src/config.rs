//! Per-dialect rendering conventions and their TOML form.
//!
//! ```toml
//! [kotlin]
//! at_strategy = "always"
//!
//! [java]
//! list_brackets = "[]"
//! ignored_modifiers = ["open", "empty", "sealed", "final"]
//! ```
//!
//! Any key left out keeps the dialect's default.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Annotation, Modifier, SymbolId, Visibility};
use crate::signature::{AtStrategy, Dialect};

/// Errors that can occur when loading a signature configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid list brackets '{0}': expected exactly two characters")]
    InvalidBrackets(String),
}

/// Conventions of one dialect
#[derive(Debug, Clone, PartialEq)]
pub struct DialectConfig {
    pub at_strategy: AtStrategy,
    /// Brackets around array-valued annotation arguments
    pub list_brackets: (char, char),
    /// Appended to class literals in annotation arguments
    pub class_suffix: String,
    /// Visibilities that render no keyword
    pub ignored_visibilities: Vec<Visibility>,
    /// Inheritance modifiers that render no keyword
    pub ignored_modifiers: Vec<Modifier>,
    /// Annotations never shown
    pub ignored_annotations: Vec<Annotation>,
}

impl DialectConfig {
    pub fn kotlin() -> Self {
        Self {
            at_strategy: AtStrategy::OnlyOnce,
            list_brackets: ('[', ']'),
            class_suffix: "::class".to_string(),
            ignored_visibilities: vec![Visibility::Public],
            ignored_modifiers: vec![Modifier::Final],
            ignored_annotations: Vec::new(),
        }
    }

    pub fn java() -> Self {
        let bridging = ["Transient", "Volatile", "Transitive", "Strictfp", "JvmStatic"];
        Self {
            at_strategy: AtStrategy::Always,
            list_brackets: ('{', '}'),
            class_suffix: ".class".to_string(),
            ignored_visibilities: vec![Visibility::PackagePrivate],
            ignored_modifiers: vec![Modifier::Open, Modifier::Empty, Modifier::Sealed],
            ignored_annotations: bridging
                .into_iter()
                .map(|name| Annotation::new(SymbolId::class("kotlin.jvm", name)))
                .collect(),
        }
    }

    pub fn is_ignored_visibility(&self, visibility: Visibility) -> bool {
        self.ignored_visibilities.contains(&visibility)
    }

    pub fn is_ignored_modifier(&self, modifier: Modifier) -> bool {
        self.ignored_modifiers.contains(&modifier)
    }
}

/// Configuration for both dialects
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureConfig {
    pub kotlin: DialectConfig,
    pub java: DialectConfig,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            kotlin: DialectConfig::kotlin(),
            java: DialectConfig::java(),
        }
    }
}

impl SignatureConfig {
    /// Parse TOML overrides on top of the defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = Self::default();
        Ok(Self {
            kotlin: apply(raw.kotlin, defaults.kotlin)?,
            java: apply(raw.java, defaults.java)?,
        })
    }

    pub fn dialect(&self, dialect: Dialect) -> &DialectConfig {
        match dialect {
            Dialect::Kotlin => &self.kotlin,
            Dialect::Java => &self.java,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    kotlin: Option<RawDialect>,
    java: Option<RawDialect>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDialect {
    at_strategy: Option<AtStrategy>,
    list_brackets: Option<String>,
    class_suffix: Option<String>,
    ignored_visibilities: Option<Vec<Visibility>>,
    ignored_modifiers: Option<Vec<Modifier>>,
    ignored_annotations: Option<Vec<Annotation>>,
}

fn apply(raw: Option<RawDialect>, mut config: DialectConfig) -> Result<DialectConfig, ConfigError> {
    let Some(raw) = raw else {
        return Ok(config);
    };
    if let Some(strategy) = raw.at_strategy {
        config.at_strategy = strategy;
    }
    if let Some(brackets) = raw.list_brackets {
        config.list_brackets = parse_brackets(&brackets)?;
    }
    if let Some(suffix) = raw.class_suffix {
        config.class_suffix = suffix;
    }
    if let Some(visibilities) = raw.ignored_visibilities {
        config.ignored_visibilities = visibilities;
    }
    if let Some(modifiers) = raw.ignored_modifiers {
        config.ignored_modifiers = modifiers;
    }
    if let Some(annotations) = raw.ignored_annotations {
        config.ignored_annotations = annotations;
    }
    Ok(config)
}

fn parse_brackets(brackets: &str) -> Result<(char, char), ConfigError> {
    let mut chars = brackets.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(open), Some(close), None) => Ok((open, close)),
        _ => Err(ConfigError::InvalidBrackets(brackets.to_string())),
    }
}
