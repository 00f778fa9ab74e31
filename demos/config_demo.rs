//! Example demonstrating the configuration system
//!
//! Run with: cargo run --example config_demo

use query_diff::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Query Diff Configuration Demo ===\n");

    // Load or create default config
    let config = Config::load()?;

    println!("Current settings:");
    println!("  Theme: {:?}", config.settings.theme);
    println!(
        "  Default granularity: {}",
        config.settings.default_granularity
    );
    println!("  Show unchanged: {}", config.settings.show_unchanged);
    println!(
        "  Collapse unchanged blocks longer than: {}",
        config.settings.collapse_threshold
    );
    println!("  Font size: {}", config.settings.font_size);

    println!("\nData directory: {}", config.data_dir().display());
    println!("Config file: {}", Config::config_path()?.display());

    Ok(())
}
