//! Recursive layout: block composition, indentation, and definition-column
//! alignment.
//!
//! Every node renders at a `prefix` (its indentation in columns) to a list
//! of lines. Containers compose child *blocks*: exactly one empty line
//! between two adjacent children that each produced output, and nothing at
//! all for a child that produced none. Lines of a node rendered at prefix
//! `p` always start with at least `p` spaces, which the definition-list
//! splice below relies on.

use crate::node::{DefinitionItem, DefinitionList, Node, Paragraph, Section};
use crate::options::{INDENT_STEP, MAX_TERM_COLUMN, RenderOptions, TERM_GAP};
use crate::wrap::wrap;

pub(crate) fn render_blocks(
    children: &[Node],
    prefix: usize,
    opts: &RenderOptions,
) -> Vec<String> {
    let mut lines = Vec::new();
    for child in children {
        let block = render_node(child, prefix, opts);
        if block.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(block);
    }
    lines
}

fn render_node(node: &Node, prefix: usize, opts: &RenderOptions) -> Vec<String> {
    match node {
        Node::Paragraph(p) => render_paragraph(p, prefix, opts),
        Node::Section(s) => render_section(s, prefix, opts),
        Node::Definitions(d) => render_definitions(d, prefix, opts),
    }
}

fn render_paragraph(paragraph: &Paragraph, prefix: usize, opts: &RenderOptions) -> Vec<String> {
    wrap(&paragraph.text, prefix, opts.width)
}

fn render_section(section: &Section, prefix: usize, opts: &RenderOptions) -> Vec<String> {
    let title: std::borrow::Cow<'_, str> = if opts.title_colon {
        format!("{}:", section.title).into()
    } else {
        section.title.as_str().into()
    };

    let mut lines = wrap(&title, prefix, opts.width);
    if opts.underline_titles && !lines.is_empty() {
        let widest = lines
            .iter()
            .map(|line| line.chars().count() - prefix)
            .max()
            .unwrap_or(0);
        lines.push(format!("{}{}", " ".repeat(prefix), "-".repeat(widest)));
    }

    let body = render_blocks(&section.children, prefix + INDENT_STEP, opts);
    if !body.is_empty() {
        if opts.title_gap && !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(body);
    }
    lines
}

fn render_definitions(
    list: &DefinitionList,
    prefix: usize,
    opts: &RenderOptions,
) -> Vec<String> {
    // The definition column clears the widest term that still fits the
    // term-column cap; wider terms go on their own line and do not push the
    // column out.
    let prefixed: Vec<String> = list
        .items
        .iter()
        .map(|item| prefixed_term(item, prefix, opts))
        .collect();
    let def_col = TERM_GAP
        + prefixed
            .iter()
            .map(|term| term.chars().count())
            .filter(|&len| len <= MAX_TERM_COLUMN)
            .fold(prefix, usize::max);

    let mut lines = Vec::new();
    for (item, term) in list.items.iter().zip(&prefixed) {
        render_item(item, term, def_col, opts, &mut lines);
    }
    lines
}

fn render_item(
    item: &DefinitionItem,
    prefixed_term: &str,
    def_col: usize,
    opts: &RenderOptions,
    lines: &mut Vec<String>,
) {
    let term_len = prefixed_term.chars().count();
    let definition = item
        .definition
        .as_ref()
        .map(|node| render_node(node, def_col, opts))
        .unwrap_or_default();

    if term_len > MAX_TERM_COLUMN {
        lines.push(prefixed_term.to_string());
        lines.extend(definition);
        return;
    }

    let mut definition = definition.into_iter();
    match definition.next() {
        // The first definition line starts with def_col spaces; the term
        // plus padding replaces them.
        Some(first) => lines.push(format!(
            "{prefixed_term}{}{}",
            " ".repeat(def_col - term_len),
            &first[def_col..]
        )),
        None => lines.push(prefixed_term.to_string()),
    }
    lines.extend(definition);
}

fn prefixed_term(item: &DefinitionItem, prefix: usize, opts: &RenderOptions) -> String {
    if opts.term_colon {
        format!("{}{}:", " ".repeat(prefix), item.term)
    } else {
        format!("{}{}", " ".repeat(prefix), item.term)
    }
}
