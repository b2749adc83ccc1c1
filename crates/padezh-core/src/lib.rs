//! Shared types and utilities for Padezh, a Russian noun inflection engine.
//!
//! This crate holds the value types every front end needs (lemmas, cases,
//! genders, result forms, errors) plus the Cyrillic character and suffix
//! helpers the rule cascades in `padezh-ru` are written against.

pub mod character;
pub mod enums;
pub mod error;
pub mod forms;
pub mod lemma;
pub mod letter_case;
pub mod word;

pub use enums::{Case, DeclensionClass, Gender};
pub use error::InflectionError;
pub use forms::Forms;
pub use lemma::{Lemma, LemmaBuilder};
