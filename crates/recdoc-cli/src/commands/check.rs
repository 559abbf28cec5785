use crate::cli::InputFormat;
use crate::support::{OptionFlags, load_document, load_options, resolve_format, yes_no};
use serde_json::json;

pub fn run(
    doc: String,
    format: InputFormat,
    config: Option<String>,
    width: Option<usize>,
    json_output: bool,
) {
    let resolved = resolve_format(&doc, format);

    let mut problems = Vec::new();
    if let Err(e) = load_document(&doc, resolved) {
        problems.push(e);
    }
    let flags = OptionFlags {
        width,
        ..OptionFlags::default()
    };
    if let Err(e) = load_options(config.as_deref(), &flags) {
        problems.push(e);
    }

    let ok = problems.is_empty();
    if json_output {
        let payload = json!({
            "doc": doc,
            "format": resolved.name(),
            "ok": ok,
            "problems": problems,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("recdoc check {doc}");
        println!("  Format: {}", resolved.name());
        println!("  Ok: {}", yes_no(ok));
        if !problems.is_empty() {
            println!("  Problems:");
            for problem in &problems {
                println!("    - {problem}");
            }
        }
    }

    if !ok {
        std::process::exit(1);
    }
}
