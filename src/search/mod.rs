//! Boyer-Moore exact substring search.
//!
//! ## Modules
//!
//! - [`bad_char`] - Rightmost-occurrence table for the bad-character rule
//! - [`good_suffix`] - Suffix lengths and the `L` / `l` good-suffix tables
//! - [`matcher`] - The right-to-left scanning loop
//! - [`observer`] - Per-round hooks for tracing shift decisions
//!
//! ## Key Functions
//!
//! ```
//! use bmsearch::search::{search, BoyerMoore};
//!
//! // One-off search; tables are built and dropped inside the call
//! assert_eq!(search(b"aaaa", b"aa"), vec![0, 1, 2]);
//!
//! // Reuse the preprocessed pattern across texts
//! let bm = BoyerMoore::new(b"abab").unwrap();
//! assert_eq!(bm.find_all(b"abababab"), vec![0, 2, 4]);
//! ```

pub mod bad_char;
pub mod good_suffix;
pub mod matcher;
pub mod observer;

pub use bad_char::*;
pub use good_suffix::*;
pub use matcher::*;
pub use observer::*;
