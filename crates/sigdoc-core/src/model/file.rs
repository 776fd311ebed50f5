//! Serialized model documents

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Declaration, Function, Platform, PlatformMap, PlatformSet, SymbolId, TypeParameter};

/// Errors that can occur when loading a model document.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to parse model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{symbol}: {attribute} has no value for platform '{platform}'")]
    MissingPlatform {
        symbol: SymbolId,
        attribute: &'static str,
        platform: Platform,
    },

    #[error("{symbol}: declared on no platform")]
    NoPlatforms { symbol: SymbolId },
}

/// A batch of declarations to render, as exchanged in JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl ModelFile {
    pub fn parse(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that every per-platform attribute covers the platforms its
    /// declaration exists on. Constructors, accessors and type parameters are
    /// checked along with their owner.
    ///
    /// Rendering never performs this check; it is meant for input coming from
    /// outside the process.
    pub fn validate(&self) -> Result<(), ModelError> {
        self.declarations.iter().try_for_each(validate_declaration)
    }
}

fn validate_declaration(declaration: &Declaration) -> Result<(), ModelError> {
    declared(declaration.id(), declaration.platforms())?;
    match declaration {
        Declaration::Classlike(c) => {
            covers(&c.id, "visibility", &c.visibility, &c.platforms)?;
            c.generics.iter().try_for_each(validate_type_parameter)?;
            c.constructors.iter().try_for_each(validate_function)
        }
        Declaration::Function(f) => validate_function(f),
        Declaration::Property(p) => {
            covers(&p.id, "visibility", &p.visibility, &p.platforms)?;
            p.generics.iter().try_for_each(validate_type_parameter)?;
            p.getter.iter().chain(&p.setter).try_for_each(validate_function)
        }
        Declaration::TypeAlias(t) => {
            covers(&t.id, "visibility", &t.visibility, &t.platforms)?;
            covers(&t.id, "underlying type", &t.underlying, &t.platforms)?;
            t.generics.iter().try_for_each(validate_type_parameter)
        }
        Declaration::TypeParameter(t) => validate_type_parameter(t),
        Declaration::EnumEntry(_) => Ok(()),
    }
}

/// Also applied to constructors and accessors
fn validate_function(f: &Function) -> Result<(), ModelError> {
    declared(&f.id, &f.platforms)?;
    covers(&f.id, "visibility", &f.visibility, &f.platforms)?;
    f.generics.iter().try_for_each(validate_type_parameter)
}

fn validate_type_parameter(t: &TypeParameter) -> Result<(), ModelError> {
    declared(&t.id, &t.platforms)
}

fn declared(symbol: &SymbolId, platforms: &PlatformSet) -> Result<(), ModelError> {
    if platforms.is_empty() {
        return Err(ModelError::NoPlatforms {
            symbol: symbol.clone(),
        });
    }
    Ok(())
}

fn covers<V>(
    symbol: &SymbolId,
    attribute: &'static str,
    values: &PlatformMap<V>,
    platforms: &PlatformSet,
) -> Result<(), ModelError> {
    match platforms.iter().find(|p| !values.contains_key(*p)) {
        Some(platform) => Err(ModelError::MissingPlatform {
            symbol: symbol.clone(),
            attribute,
            platform: platform.clone(),
        }),
        None => Ok(()),
    }
}
