//! vibedoc: section-aware merging of chat output into a living markdown design document.
//!
//! A document follows a [`section::SectionPlan`]. Each chat turn is narrowed to one section by
//! [`extract`], merged with that section's body by [`merge`], and the whole document is rebuilt
//! by [`builder`]. [`reducer`] wraps that loop as a pure `(document, event) -> document`
//! function and [`session::Session`] owns a document across turns.

pub mod blocks;
pub mod builder;
pub mod config;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod extract;
pub mod formats;
pub mod merge;
pub mod normalize;
pub mod progress;
pub mod reducer;
pub mod section;
pub mod session;

pub use builder::{build, template};
pub use document::{parse, ParsedDocument};
pub use extract::extract_for_section;
pub use merge::merge;
pub use reducer::{append_section_content, reduce, DocumentEvent};
pub use section::{SectionDefinition, SectionPlan};
