//! HTML and text utilities shared by the Labelify crates
//!
//! - [`html`]: escaping and attribute serialization
//! - [`text`]: identifier humanization and natural-language list joining

pub mod html;
pub mod text;

pub use html::{Attributes, escape, escape_attr, render_attributes};
pub use text::{humanize, to_sentence};
