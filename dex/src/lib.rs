//! Domain logic for browsing and comparing Pokemon.
//!
//! This crate is pure: it takes decoded records from `rotom-model` and
//! derives the values a presentation layer renders, with no I/O of its own.
//!
//! # Overview
//!
//! ```text
//! rotom-model (wire shapes)
//!        │
//!        ▼
//! rotom-dex (type chart + comparison assembly) ← THIS CRATE
//!        │
//!        └─> presentation layer (stat bars, type badges)
//! ```
//!
//! # Main Pieces
//!
//! - [`Type`] - the 18 Pokemon types with the effectiveness chart
//! - [`matchup`] - bucket queries (weaknesses, resistances, immunities,
//!   advantages) using multiplier products across dual types
//! - [`summarize`] - builds a [`TypeEffectiveness`] summary for a type pair
//! - [`StatAttribute`] / [`assemble`] - per-attribute rankings and
//!   normalized bar values for a compared set
//! - [`compare`] - the full [`PokemonComparison`] for 2-3 fetched records
//! - [`display`] - stat value formatting and effectiveness labels
//! - [`markdown`] - minimal markdown-to-HTML rendering for generated content
//!
//! # Example
//!
//! ```ignore
//! use rotom_dex::{compare, Type, summarize};
//!
//! let comparison = compare(&[bulbasaur, charmander])?;
//! let tallest = comparison.stat_comparison.highest["height"];
//!
//! let grass = summarize(Type::Grass, Some(Type::Poison));
//! assert!(grass.weak_against.contains(&"fire".to_string()));
//! ```

pub mod compare;
pub mod display;
pub mod effectiveness;
pub mod markdown;
pub mod matchup;
pub mod poke_type;

use thiserror::Error;

pub use compare::{MAX_SUBJECTS, MIN_SUBJECTS, StatAttribute, assemble, compare};
pub use effectiveness::{summarize, summarize_pokemon};
pub use poke_type::{TYPE_CHART, Type};

// Re-export the payload shapes this crate produces
pub use rotom_model::{PokemonComparison, StatComparison, TypeEffectiveness};

/// Errors from comparison and summarization.
///
/// Cardinality and type-resolution problems are rejected before any
/// computation begins; no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("comparison needs at least 2 Pokemon, got {got}")]
    NotEnoughSubjects { got: usize },

    #[error("comparison supports at most 3 Pokemon, got {got}")]
    TooManySubjects { got: usize },

    #[error("Pokemon has no primary type")]
    MissingType,

    #[error("unknown type name: {0}")]
    UnknownType(String),
}
