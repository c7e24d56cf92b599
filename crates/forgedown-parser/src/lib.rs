//! Forgedown Parser
//!
//! Line classification and entity escaping for the forgedown
//! markup-to-HTML converter.
//!
//! # Overview
//!
//! Each raw input line passes through [`escape::escape`] and
//! [`classify::observe`] before the block renderer sees it. The
//! classifier records the line in the bounded trackers of a
//! [`forgedown_core::ParserState`] and returns the line's
//! [`forgedown_core::LineType`].
//!
//! # Example
//!
//! ```
//! use forgedown_core::{LineType, ParserState};
//! use forgedown_parser::classify;
//!
//! let mut state = ParserState::new("https://example.com");
//! assert_eq!(classify::observe(&mut state, "# Title"), LineType::Header);
//! assert_eq!(state.raw_at(0), Some("# Title"));
//! ```

pub mod classify;
pub mod escape;

pub use classify::observe;
pub use escape::escape;
