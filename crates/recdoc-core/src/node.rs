//! The document tree.
//!
//! A [`Document`] owns an ordered list of [`Node`]s; sections nest
//! arbitrarily deep. Builders move the receiver and return it, so documents
//! read as one chained expression:
//!
//! ```
//! use recdoc_core::{DefinitionList, Document, Section};
//!
//! let doc = Document::new()
//!     .add("Intro text.")
//!     .add(
//!         Section::new("Options")
//!             .add(DefinitionList::new().add("--force", "Skip all prompts.")),
//!     );
//! ```
//!
//! The serde form is externally tagged with snake_case kind names, so a
//! stored document reads as `{"section": {"title": ..., "children": [...]}}`.

use crate::layout;
use crate::options::RenderOptions;
use serde::{Deserialize, Serialize};

/// One block in a document: prose, a titled subtree, or a term list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Paragraph(Paragraph),
    Section(Section),
    Definitions(DefinitionList),
}

/// The top-level document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child block. Returns the document to allow chaining.
    pub fn add(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child block if present. `None` is a no-op, which keeps
    /// conditionally assembled documents chainable.
    pub fn maybe_add(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.add(child),
            None => self,
        }
    }

    /// Render with default options: 70 columns, no title or term
    /// decoration.
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render with explicit options.
    pub fn render_with(&self, opts: &RenderOptions) -> String {
        layout::render_blocks(&self.children, 0, opts).join("\n")
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// A run of prose. Text reflows on render; interior whitespace runs are
/// insignificant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Extend the paragraph with more text, separated by a single space.
    pub fn append(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !self.text.is_empty() && !text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(&text);
        self
    }
}

/// A titled subtree. Children render two columns deeper than the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Append a child block. Returns the section to allow chaining.
    pub fn add(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child block if present. `None` is a no-op.
    pub fn maybe_add(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.add(child),
            None => self,
        }
    }
}

/// An ordered list of terms with their definitions, aligned on a shared
/// column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionList {
    #[serde(default)]
    pub items: Vec<DefinitionItem>,
}

/// One `term → definition` entry. A missing definition renders as the bare
/// term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionItem {
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Node>,
}

impl DefinitionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term with its definition. Returns the list to allow
    /// chaining.
    pub fn add(mut self, term: impl Into<String>, definition: impl Into<Node>) -> Self {
        self.items.push(DefinitionItem {
            term: term.into(),
            definition: Some(definition.into()),
        });
        self
    }

    /// Append a term with no definition.
    pub fn add_term(mut self, term: impl Into<String>) -> Self {
        self.items.push(DefinitionItem {
            term: term.into(),
            definition: None,
        });
        self
    }
}

impl From<Paragraph> for Node {
    fn from(p: Paragraph) -> Self {
        Node::Paragraph(p)
    }
}

impl From<Section> for Node {
    fn from(s: Section) -> Self {
        Node::Section(s)
    }
}

impl From<DefinitionList> for Node {
    fn from(d: DefinitionList) -> Self {
        Node::Definitions(d)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Paragraph(Paragraph::new(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Paragraph(Paragraph::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_coerce_to_paragraphs() {
        let doc = Document::new().add("Some text");
        assert_eq!(doc.render(), "Some text");
    }

    #[test]
    fn maybe_add_skips_none() {
        let skipped: Option<Section> = None;
        let doc = Document::new()
            .add("kept")
            .maybe_add(skipped)
            .maybe_add(Some("also kept"));
        assert_eq!(doc.render(), "kept\n\nalso kept");
    }

    #[test]
    fn paragraph_append_joins_with_one_space() {
        let p = Paragraph::new("one").append("two").append("");
        assert_eq!(p.text, "one two");
        let p = Paragraph::new("").append("solo");
        assert_eq!(p.text, "solo");
    }

    #[test]
    fn display_matches_default_render() {
        let doc = Document::new().add(Section::new("Title").add("Body"));
        assert_eq!(doc.to_string(), doc.render());
    }

    #[test]
    fn serde_form_is_externally_tagged() {
        let doc = Document::new().add(Section::new("T").add("p"));
        let json = serde_json::to_value(&doc).expect("document should serialize");
        assert_eq!(json["children"][0]["section"]["title"], "T");
        assert_eq!(
            json["children"][0]["section"]["children"][0]["paragraph"]["text"],
            "p"
        );
        let back: Document = serde_json::from_value(json).expect("document should deserialize");
        assert_eq!(back, doc);
    }

    #[test]
    fn bare_term_round_trips_without_definition_key() {
        let doc = Document::new().add(DefinitionList::new().add_term("--quiet"));
        let json = serde_json::to_value(&doc).expect("document should serialize");
        let item = &json["children"][0]["definitions"]["items"][0];
        assert_eq!(item["term"], "--quiet");
        assert!(item.get("definition").is_none());
    }
}
