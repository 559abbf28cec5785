use crate::cli::InputFormat;
use recdoc_core::{Document, Node, RenderOptions};
use std::fs;
use std::path::Path;

/// Render-option overrides collected from command-line flags. Boolean
/// flags only switch options on; absent flags inherit the config file (or
/// the defaults).
#[derive(Debug, Default)]
pub struct OptionFlags {
    pub width: Option<usize>,
    pub title_colon: bool,
    pub term_colon: bool,
    pub underline_titles: bool,
    pub title_gap: bool,
}

/// The format a document file was actually read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Json,
    Markup,
}

impl DocFormat {
    pub fn name(self) -> &'static str {
        match self {
            DocFormat::Json => "json",
            DocFormat::Markup => "markup",
        }
    }
}

pub fn resolve_format(path: &str, format: InputFormat) -> DocFormat {
    match format {
        InputFormat::Json => DocFormat::Json,
        InputFormat::Markup => DocFormat::Markup,
        InputFormat::Auto => {
            if Path::new(path).extension().is_some_and(|ext| ext == "json") {
                DocFormat::Json
            } else {
                DocFormat::Markup
            }
        }
    }
}

pub fn load_document_or_exit(path: &str, format: InputFormat) -> (Document, DocFormat) {
    let resolved = resolve_format(path, format);
    match load_document(path, resolved) {
        Ok(doc) => (doc, resolved),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn load_document(path: &str, format: DocFormat) -> Result<Document, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    match format {
        DocFormat::Json => serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse {path} as JSON: {e}")),
        DocFormat::Markup => {
            recdoc_markup::parse(&text).map_err(|e| format!("failed to parse {path}: {e}"))
        }
    }
}

pub fn load_options_or_exit(config: Option<&str>, flags: &OptionFlags) -> RenderOptions {
    match load_options(config, flags) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn load_options(config: Option<&str>, flags: &OptionFlags) -> Result<RenderOptions, String> {
    let mut opts: RenderOptions = match config {
        Some(path) => {
            let text =
                fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
            toml::from_str(&text).map_err(|e| format!("failed to parse {path}: {e}"))?
        }
        None => RenderOptions::default(),
    };

    if let Some(width) = flags.width {
        opts.width = width;
    }
    opts.title_colon |= flags.title_colon;
    opts.term_colon |= flags.term_colon;
    opts.underline_titles |= flags.underline_titles;
    opts.title_gap |= flags.title_gap;

    opts.validate().map_err(|e| e.to_string())?;
    Ok(opts)
}

#[derive(Debug, Default, serde::Serialize)]
pub struct DocumentStats {
    pub sections: usize,
    pub paragraphs: usize,
    pub definition_lists: usize,
    pub definition_items: usize,
    pub max_depth: usize,
}

pub fn document_stats(doc: &Document) -> DocumentStats {
    let mut stats = DocumentStats::default();
    for node in &doc.children {
        visit(node, 1, &mut stats);
    }
    stats
}

fn visit(node: &Node, depth: usize, stats: &mut DocumentStats) {
    stats.max_depth = stats.max_depth.max(depth);
    match node {
        Node::Paragraph(_) => stats.paragraphs += 1,
        Node::Section(section) => {
            stats.sections += 1;
            for child in &section.children {
                visit(child, depth + 1, stats);
            }
        }
        Node::Definitions(list) => {
            stats.definition_lists += 1;
            stats.definition_items += list.items.len();
            for item in &list.items {
                if let Some(definition) = &item.definition {
                    visit(definition, depth + 1, stats);
                }
            }
        }
    }
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
