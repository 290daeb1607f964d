//! # Grader Library
//!
//! This module provides the core logic for scoring a single student submission
//! with one remote large-language-model call. It supports building a grading
//! prompt from the session configuration, issuing the structured-output request,
//! and parsing the model's verdict into a typed result.
//!
//! ## Key Concepts
//! - **GradingConfig**: The per-session grading setup (mode, title, instructions,
//!   expected output) captured at session creation time.
//! - **Grader**: Pluggable strategy for turning (code, rubric, config) into a
//!   [`types::GradingResult`]; the production implementation is
//!   [`client::GeminiGrader`].
//! - **Prompt**: Deterministic prompt assembly, pure string work with no I/O.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{Grader, GeminiGrader};
pub use error::GraderError;
pub use types::{GradingConfig, GradingMode, GradingResult};
