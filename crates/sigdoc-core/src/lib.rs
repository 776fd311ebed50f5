//! Sigdoc Core - signature rendering for multi-platform API documentation
//!
//! This crate provides:
//! - Model: resolved declarations whose attributes may differ per platform
//! - Platform: grouping of per-platform values
//! - Content: the factory interface and the default content tree
//! - Signature: Kotlin and Java signature providers
//! - Config: per-dialect rendering conventions loaded from TOML

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Declaration model - classes, functions, properties, type expressions
pub mod model;

/// Platform grouping of per-platform attribute values
pub mod platform;

/// Content tree building
pub mod content;

/// Signature providers for both dialects
pub mod signature;

/// Rendering conventions and their TOML form
pub mod config;

/// Test utilities - helpers for building and flattening signatures
pub mod testutil;

/// Convenience re-export of the model root types
pub use model::{Declaration, ModelError, ModelFile, Platform, PlatformMap, PlatformSet, SymbolId};

/// Convenience re-export of content types
pub use content::{ContentFactory, ContentKind, ContentNode, ContentTree, Emitter, TextStyle};

/// Convenience re-export of providers
pub use signature::{Dialect, JavaSignatureProvider, KotlinSignatureProvider, SignatureProvider};

/// Convenience re-export of configuration
pub use config::{ConfigError, DialectConfig, SignatureConfig};
