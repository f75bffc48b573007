//! Story PDF Export
//!
//! Renders a story row (as stored in the `stories` table) to a PDF.
//!
//! Usage:
//!   cargo run --example render_story -- <story.json> [product_type] [output.pdf]
//!
//! Examples:
//!   cargo run --example render_story -- demos/data/sample_story.json
//!   cargo run --example render_story -- demos/data/sample_story.json hardcover_book
//!   RUST_LOG=debug cargo run --example render_story -- demos/data/sample_story.json digital output/lea.pdf

use std::path::Path;
use story_export::{parse_story, ExportConfig, ProductType, StoryExporter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <story.json> [product_type] [output.pdf]", args[0]);
        eprintln!();
        eprintln!("Product types: digital (default), hardcover_book, softcover_book");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  cargo run --example render_story -- demos/data/sample_story.json");
        eprintln!("  cargo run --example render_story -- demos/data/sample_story.json hardcover_book");
        std::process::exit(1);
    }

    let story_path = &args[1];
    let product = ProductType::parse(args.get(2).map(String::as_str));

    // Optional export configuration
    let config = match std::env::var("STORYKID_EXPORT_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read config '{}': {}", path, e))?;
            ExportConfig::from_json(&json)?
        }
        Err(_) => ExportConfig::default(),
    };

    let story_json = std::fs::read_to_string(story_path)
        .map_err(|e| format!("Failed to read story '{}': {}", story_path, e))?;
    let story = parse_story(&story_json)?;

    let exporter = StoryExporter::new(config)?;
    let exported = exporter.export(&story, product)?;

    // Derive output path from the story title if not provided
    let output_path = match args.get(3) {
        Some(path) => path.clone(),
        None => format!("output/{}", exported.filename),
    };

    if let Some(parent) = Path::new(&output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&output_path, &exported.bytes)?;

    println!("Generated: {} ({} pages)", output_path, exported.page_count);

    Ok(())
}
