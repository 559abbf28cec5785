//! A line-oriented markup frontend for recdoc documents.
//!
//! The format is a small markdown-like dialect, parsed straight into a
//! [`Document`] without an intermediate AST:
//!
//! ```text
//! # Title
//!
//! A paragraph. Consecutive non-blank lines
//! join into one paragraph and reflow on render.
//!
//! ## Flags
//!
//! --force :: Skip all prompts and overwrite
//!   existing files without asking.
//! --quiet ::
//! ```
//!
//! Rules:
//! - `#`, `##`, … headings at column zero open sections at the matching
//!   nesting depth; a heading may only go one level deeper than the
//!   current depth.
//! - Runs of plain lines form one paragraph; blank lines separate blocks.
//! - `term :: definition` lines form definition-list items; consecutive
//!   items form one list. Indented lines continue the current definition
//!   (or the current paragraph). A `term ::` with nothing after the
//!   separator is a bare term.
//!
//! Indentation is structural only for continuations; the renderer decides
//! all output indentation.

use recdoc_core::{DefinitionItem, DefinitionList, Document, Node, Paragraph, Section};

/// Errors from parsing markup. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// A heading skipped a nesting level.
    #[error("line {line}: heading jumps from depth {from} to depth {to}")]
    HeadingJump { line: usize, from: usize, to: usize },

    /// A definition item with nothing before the `::` separator.
    #[error("line {line}: definition item has an empty term")]
    EmptyTerm { line: usize },

    /// An indented line with no paragraph or definition item to continue.
    #[error("line {line}: continuation line with nothing to continue")]
    OrphanContinuation { line: usize },
}

/// Parse markup into a document.
pub fn parse(input: &str) -> Result<Document, MarkupError> {
    let mut parser = Parser::default();
    for (idx, line) in input.lines().enumerate() {
        parser.line(idx + 1, line)?;
    }
    Ok(parser.finish())
}

#[derive(Default)]
struct Parser {
    root: Vec<Node>,
    /// Open sections; depth = stack length.
    stack: Vec<Section>,
    paragraph: Option<String>,
    items: Vec<DefinitionItem>,
}

impl Parser {
    fn line(&mut self, number: usize, raw: &str) -> Result<(), MarkupError> {
        if raw.trim().is_empty() {
            self.flush_paragraph();
            self.flush_items();
            return Ok(());
        }

        if let Some((level, title)) = heading(raw) {
            self.flush_paragraph();
            self.flush_items();
            if level > self.stack.len() + 1 {
                return Err(MarkupError::HeadingJump {
                    line: number,
                    from: self.stack.len(),
                    to: level,
                });
            }
            self.close_to(level - 1);
            self.stack.push(Section::new(title));
            return Ok(());
        }

        if raw.starts_with([' ', '\t']) {
            return self.continuation(number, raw.trim());
        }

        if let Some((term, definition)) = raw.split_once("::") {
            self.flush_paragraph();
            let term = term.trim();
            if term.is_empty() {
                return Err(MarkupError::EmptyTerm { line: number });
            }
            let definition = definition.trim();
            self.items.push(DefinitionItem {
                term: term.to_string(),
                definition: (!definition.is_empty())
                    .then(|| Node::Paragraph(Paragraph::new(definition))),
            });
            return Ok(());
        }

        self.flush_items();
        match &mut self.paragraph {
            Some(text) => {
                text.push(' ');
                text.push_str(raw.trim());
            }
            None => self.paragraph = Some(raw.trim().to_string()),
        }
        Ok(())
    }

    /// An indented line extends the latest definition item, or failing
    /// that the open paragraph.
    fn continuation(&mut self, number: usize, text: &str) -> Result<(), MarkupError> {
        if let Some(item) = self.items.last_mut() {
            match &mut item.definition {
                Some(Node::Paragraph(p)) => {
                    p.text.push(' ');
                    p.text.push_str(text);
                }
                None => item.definition = Some(Node::Paragraph(Paragraph::new(text))),
                // Markup-built definitions are always paragraphs.
                Some(_) => unreachable!("markup definitions are paragraphs"),
            }
            return Ok(());
        }
        if let Some(paragraph) = &mut self.paragraph {
            paragraph.push(' ');
            paragraph.push_str(text);
            return Ok(());
        }
        Err(MarkupError::OrphanContinuation { line: number })
    }

    fn flush_paragraph(&mut self) {
        if let Some(text) = self.paragraph.take() {
            self.attach(Node::Paragraph(Paragraph::new(text)));
        }
    }

    fn flush_items(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.items);
        self.attach(Node::Definitions(DefinitionList { items }));
    }

    fn close_to(&mut self, depth: usize) {
        while self.stack.len() > depth {
            let section = self.stack.pop().expect("stack checked non-empty");
            let node = Node::Section(section);
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.root.push(node),
            }
        }
    }

    fn attach(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(section) => section.children.push(node),
            None => self.root.push(node),
        }
    }

    fn finish(mut self) -> Document {
        self.flush_paragraph();
        self.flush_items();
        self.close_to(0);
        Document {
            children: self.root,
        }
    }
}

/// `## Title` → `(2, "Title")`. Headings must start at column zero; the
/// `#` run must be followed by whitespace or end of line.
fn heading(raw: &str) -> Option<(usize, &str)> {
    let level = raw.chars().take_while(|&c| c == '#').count();
    if level == 0 {
        return None;
    }
    let rest = &raw[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some((level, rest.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_lines_join() {
        let doc = parse("one\ntwo\n\nthree").expect("markup should parse");
        assert_eq!(doc.render(), "one two\n\nthree");
    }

    #[test]
    fn headings_nest_sections() {
        let doc = parse("# Top\n\nbody\n\n## Inner\n\ndeep\n\n# Next\n\nafter")
            .expect("markup should parse");
        insta::assert_snapshot!(doc.render(), @r"
        Top
          body

          Inner
            deep

        Next
          after
        ");
    }

    #[test]
    fn heading_jump_is_rejected() {
        let err = parse("# Top\n\n### Too deep").expect_err("jump should fail");
        assert!(matches!(
            err,
            MarkupError::HeadingJump {
                line: 3,
                from: 1,
                to: 3
            }
        ));
    }

    #[test]
    fn definition_items_group_into_one_list() {
        let doc = parse("--force :: Skip all prompts.\n--quiet :: Print nothing.")
            .expect("markup should parse");
        assert_eq!(
            doc.render(),
            "--force  Skip all prompts.\n--quiet  Print nothing."
        );
    }

    #[test]
    fn blank_line_splits_definition_lists() {
        let doc = parse("a :: one\n\nbb :: two").expect("markup should parse");
        // Two separate lists: each aligns locally.
        assert_eq!(doc.render(), "a  one\n\nbb  two");
    }

    #[test]
    fn indented_lines_continue_a_definition() {
        let doc = parse("--force :: Skip all prompts and overwrite\n  without asking.")
            .expect("markup should parse");
        assert_eq!(
            doc.render(),
            "--force  Skip all prompts and overwrite without asking."
        );
    }

    #[test]
    fn indented_lines_continue_a_paragraph() {
        let doc = parse("start of text\n  and the rest").expect("markup should parse");
        assert_eq!(doc.render(), "start of text and the rest");
    }

    #[test]
    fn bare_term_parses_without_definition() {
        let doc = parse("--quiet ::").expect("markup should parse");
        assert_eq!(doc.render(), "--quiet");
    }

    #[test]
    fn continuation_after_bare_term_becomes_its_definition() {
        let doc = parse("--quiet ::\n  Print nothing at all.").expect("markup should parse");
        assert_eq!(doc.render(), "--quiet  Print nothing at all.");
    }

    #[test]
    fn empty_term_is_rejected() {
        let err = parse("ok\n\n:: definition").expect_err("empty term should fail");
        assert!(matches!(err, MarkupError::EmptyTerm { line: 3 }));
    }

    #[test]
    fn orphan_continuation_is_rejected() {
        let err = parse("  floating").expect_err("orphan should fail");
        assert!(matches!(err, MarkupError::OrphanContinuation { line: 1 }));
    }

    #[test]
    fn hash_without_space_is_text_not_heading() {
        let doc = parse("#hashtag stays prose").expect("markup should parse");
        assert_eq!(doc.render(), "#hashtag stays prose");
    }

    #[test]
    fn empty_input_parses_to_empty_document() {
        let doc = parse("").expect("markup should parse");
        assert_eq!(doc, Document::new());
    }

    #[test]
    fn full_document_renders_end_to_end() {
        let input = "\
# recdoc

Formats nested documents for terminals.

## Usage

recdoc render doc.md

## Flags

--width :: Wrap width in columns,
  seventy by default.
--quiet ::
";
        let doc = parse(input).expect("markup should parse");
        insta::assert_snapshot!(doc.render(), @r"
        recdoc
          Formats nested documents for terminals.

          Usage
            recdoc render doc.md

          Flags
            --width  Wrap width in columns, seventy by default.
            --quiet
        ");
    }
}
