//! Compare two query files (or a built-in pair) from the command line
//!
//! Run with: cargo run --example diff_demo -- [ORIGINAL.sql MODIFIED.sql] [lines|words|characters]

use query_diff::diff::{Granularity, compute_diff, render_text};
use query_diff::loader::read_query;
use std::path::Path;

const SAMPLE_ORIGINAL: &str = "SELECT id, name\nFROM users\nWHERE active = 1\nORDER BY name";
const SAMPLE_MODIFIED: &str = "SELECT id, name, email\nFROM users\nWHERE active = 1\nORDER BY name\nLIMIT 10";

fn parse_granularity(arg: Option<&str>) -> Granularity {
    match arg.map(str::to_ascii_lowercase).as_deref() {
        Some("words") => Granularity::Words,
        Some("characters") | Some("chars") => Granularity::Characters,
        _ => Granularity::Lines,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (original, modified, granularity) = match args.as_slice() {
        [a, b, rest @ ..] => (
            read_query(Path::new(a))?,
            read_query(Path::new(b))?,
            parse_granularity(rest.first().map(String::as_str)),
        ),
        [g] => (
            SAMPLE_ORIGINAL.to_string(),
            SAMPLE_MODIFIED.to_string(),
            parse_granularity(Some(g)),
        ),
        [] => (
            SAMPLE_ORIGINAL.to_string(),
            SAMPLE_MODIFIED.to_string(),
            Granularity::Lines,
        ),
    };

    let result = compute_diff(&original, &modified, granularity);

    println!("=== Diff by {} ===\n", granularity);
    println!("{}", render_text(&result.pairs, granularity));
    println!(
        "\n+{} -{} ~{} ({} blocks)",
        result.stats.added,
        result.stats.removed,
        result.stats.modified,
        result.blocks.len()
    );

    Ok(())
}
