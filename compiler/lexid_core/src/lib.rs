//! Identifier classification over UTF-16 text.
//!
//! This crate decides whether a sequence of UTF-16 code units spells a legal
//! identifier. It is standalone: the name binder, editor
//! features and the escape test harness (`lexid_escape`) all depend on it,
//! and it depends on none of them.
//!
//! # Pipeline
//!
//! ```text
//! &[u16] -> Scalars -> CharClass -> { check_identifier, remove_format_scalars }
//! ```
//!
//! - [`Scalars`] decodes surrogate pairs and surfaces unpaired surrogates as
//!   their own [`Scalar`] instead of failing.
//! - [`CharClass`] maps a scalar's Unicode general category onto the five
//!   identifier-relevant facets.
//! - [`check_identifier`] runs the start/part state machine and reports why
//!   a name was rejected; [`is_valid_identifier`] is its boolean form.
//! - [`remove_format_scalars`] computes the comparison form in which
//!   formatting characters (category `Cf`) are insignificant.
//!
//! # Unicode Data
//!
//! General categories come from the compiled data baked into
//! `icu_properties`. The table is static and read-only, so every function
//! here is safe to call from any number of threads without synchronization.

mod char_class;
mod scalars;
mod strip;
mod validate;

pub use char_class::{
    general_category, is_formatting, is_identifier_part, is_identifier_start, CharClass,
};
pub use icu_properties::props::GeneralCategory;
pub use scalars::{has_unpaired_surrogate, scalar_indices, scalars, Scalar, ScalarIndices, Scalars};
pub use strip::{eq_ignoring_format, remove_format_chars, remove_format_scalars};
pub use validate::{check_identifier, check_identifier_str, is_valid_identifier, is_valid_identifier_str, Verdict};
