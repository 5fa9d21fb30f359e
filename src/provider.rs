//! Provider identifiers (data) and capability sets (classification).
//!
//! `kind` exposes [`ProviderType`], the canonical identifier newtype with its comparators,
//! capability predicates, and display helpers. `normalize` holds the two string tables: the
//! full alias table used when ingesting raw input and the narrower collapsing table used when
//! rendering an identifier back to text. `capability` owns the fixed capability sets.

/// Fixed capability sets and the [`Capability`] classes naming them.
pub mod capability;
pub mod kind;
pub mod normalize;

pub use capability::*;
pub use kind::*;
pub use normalize::{TOKEN_MAX_LEN, canonical_form, clean_token, normalize, resolve_alias};
