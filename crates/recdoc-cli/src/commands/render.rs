use crate::cli::InputFormat;
use crate::support::{OptionFlags, load_document_or_exit, load_options_or_exit};
use serde_json::json;

pub struct Args {
    pub doc: String,
    pub format: InputFormat,
    pub config: Option<String>,
    pub flags: OptionFlags,
    pub json: bool,
}

pub fn run(args: Args) {
    let opts = load_options_or_exit(args.config.as_deref(), &args.flags);
    let (doc, format) = load_document_or_exit(&args.doc, args.format);
    let rendered = doc.render_with(&opts);

    if args.json {
        let line_count = if rendered.is_empty() {
            0
        } else {
            rendered.lines().count()
        };
        let payload = json!({
            "doc": args.doc,
            "format": format.name(),
            "options": opts,
            "line_count": line_count,
            "rendered": rendered,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("{rendered}");
    }
}
