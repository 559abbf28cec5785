use crate::cli::InputFormat;
use crate::support::{document_stats, load_document_or_exit};
use serde_json::json;

pub fn run(doc_path: String, format: InputFormat, json_output: bool) {
    let (doc, format) = load_document_or_exit(&doc_path, format);
    let stats = document_stats(&doc);

    if json_output {
        let payload = json!({
            "doc": doc_path,
            "format": format.name(),
            "stats": stats,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("recdoc inspect {doc_path}");
        println!("  Format: {}", format.name());
        println!("  Sections: {}", stats.sections);
        println!("  Paragraphs: {}", stats.paragraphs);
        println!(
            "  Definition lists: {} ({} items)",
            stats.definition_lists, stats.definition_items
        );
        println!("  Max depth: {}", stats.max_depth);
    }
}
