//! recdoc CLI: the `recdoc` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use support::OptionFlags;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            doc,
            format,
            config,
            width,
            title_colon,
            term_colon,
            underline_titles,
            title_gap,
            json,
        } => commands::render::run(commands::render::Args {
            doc,
            format,
            config,
            flags: OptionFlags {
                width,
                title_colon,
                term_colon,
                underline_titles,
                title_gap,
            },
            json,
        }),

        Commands::Inspect { doc, format, json } => commands::inspect::run(doc, format, json),

        Commands::Check {
            doc,
            format,
            config,
            width,
            json,
        } => commands::check::run(doc, format, config, width, json),
    }
}
