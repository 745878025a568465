//! # bmsearch - Boyer-Moore Substring Search
//!
//! Exact substring search that combines the bad-character and good-suffix
//! heuristics to skip comparisons, giving sublinear expected-case scans.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`search`] - Preprocessing tables and the matcher
//! - [`error`] - Error type for invalid input
//! - [`config`] - User configuration (JSON file + environment overrides)
//! - [`input`] - Loading texts from arguments, stdin prompts, or files
//! - [`output`] - Result formatting (plain, highlighted, trace, JSON)
//!
//! ## Quick Start
//!
//! ```
//! use bmsearch::search::{search_with_observer, TraceRecorder};
//!
//! let mut trace = TraceRecorder::new();
//! let positions = search_with_observer(b"GCATCGCAGAGAGTATACAGTACG", b"GCAGAGAG", &mut trace);
//!
//! assert_eq!(positions, vec![5]);
//! for step in &trace.steps {
//!     println!("offset {} -> shift {} ({})", step.offset, step.shift, step.rule.as_str());
//! }
//! ```
//!
//! ## Performance
//!
//! Patterns are preprocessed once per search into a 256-entry
//! bad-character array and two good-suffix arrays. On a mismatch the
//! larger of the two shifts is taken, so most text bytes are never
//! examined for long patterns over large alphabets.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod search;

pub use error::{Result, SearchError};
pub use search::{search, try_search, BoyerMoore};
