#![warn(rust_2018_idioms)]

//! Contextual shaping of Arabic text.
//!
//! Rewrites each Arabic letter of a line, given in logical order, to the presentation
//! form its position calls for: isolated, initial, medial or final. Transparent marks
//! are left where they are and never block a join. Lines keep their length and order;
//! visual reordering of right-to-left runs is left to the caller.
//!
//! ```
//! let mut line: [u32; 3] = [0x0628, 0x064E, 0x062A];
//! arabjoin::shape_line(&mut line);
//! assert_eq!(line, [0xFE91, 0x064E, 0xFE96]);
//! ```

pub mod audit;
pub mod error;
pub mod forms;
pub mod joining;
/// Shared test code.
#[cfg(test)]
pub mod tests;
pub mod transparent;

pub use crate::forms::{PositionalForm, ShapeEntry, ShapeTable};
pub use crate::joining::{shape_chars, shape_line, shape_line_with, shape_str, JoiningData};
