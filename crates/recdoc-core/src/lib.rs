//! # recdoc core
//!
//! Tree-structured documents rendered to plain monospaced text. A document
//! is an ordered tree of three block kinds, and rendering is a pure
//! function of the tree and a set of layout options.
//!
//! ## Architecture
//!
//! ```text
//! Document                ← root container, ordered children
//!     │
//! Node                    ← Paragraph | Section | Definitions
//!     │
//! RenderOptions           ← width, title/term decoration flags
//!     │
//! layout                  ← block composition, indentation, alignment
//!     │
//! wrap                    ← greedy word wrap with an indent prefix
//! ```
//!
//! Sections indent their children by two columns; text wraps at 70 columns
//! by default; definitions within one list align on a shared column.
//!
//! ```
//! use recdoc_core::{Document, Paragraph, Section};
//!
//! let doc = Document::new().add(
//!     Section::new("Section title").add(Paragraph::new("Some text")),
//! );
//! assert_eq!(doc.render(), "Section title\n  Some text");
//! ```

pub mod error;
pub mod layout;
pub mod node;
pub mod options;
pub mod wrap;

pub use error::LayoutError;
pub use node::{DefinitionItem, DefinitionList, Document, Node, Paragraph, Section};
pub use options::{DEFAULT_WIDTH, INDENT_STEP, MAX_TERM_COLUMN, RenderOptions, TERM_GAP};
pub use wrap::wrap;
