use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "recdoc",
    about = "Render recursive documents to wrapped, indented plain text",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How to read the document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Infer from the extension: `.json` is JSON, anything else is markup
    Auto,
    /// JSON document tree
    Json,
    /// recdoc markup
    Markup,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a document to plain text
    Render {
        /// Path to the document file
        doc: String,

        /// Input format
        #[arg(long, value_enum, default_value = "auto")]
        format: InputFormat,

        /// TOML file with render options; explicit flags override it
        #[arg(long)]
        config: Option<String>,

        /// Wrap width in columns
        #[arg(long)]
        width: Option<usize>,

        /// Append ':' to section titles
        #[arg(long)]
        title_colon: bool,

        /// Append ':' to definition terms
        #[arg(long)]
        term_colon: bool,

        /// Underline section titles
        #[arg(long)]
        underline_titles: bool,

        /// Leave a blank line after section titles
        #[arg(long)]
        title_gap: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the structure of a document
    Inspect {
        /// Path to the document file
        doc: String,

        /// Input format
        #[arg(long, value_enum, default_value = "auto")]
        format: InputFormat,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a document and validate render options without rendering
    Check {
        /// Path to the document file
        doc: String,

        /// Input format
        #[arg(long, value_enum, default_value = "auto")]
        format: InputFormat,

        /// TOML file with render options to validate
        #[arg(long)]
        config: Option<String>,

        /// Wrap width in columns
        #[arg(long)]
        width: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
