//! Style configuration of the clock face.
//!
//! - [`StyleConfig`]: the option set with documented defaults
//! - [`ResolvedStyle`]: an immutable pixel-space snapshot used for one frame
//! - style sheets: `name: value` text documents that override defaults

mod config;
mod error;
mod lexer;
mod resolved;
mod sheet;

pub use config::{Dimension, StyleConfig, StyleOption, StyleValue, Unit};
pub use error::StyleError;
pub use resolved::ResolvedStyle;
pub use sheet::{parse_sheet, parse_value, StyleEntry};
