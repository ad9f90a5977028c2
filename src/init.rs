use colored::*;
use std::{fs, path::Path};

use crate::config::CONFIG_FILE;

const TEMPLATE: &str = r#"# muni Configuration File

# Dataset to use instead of the embedded one.
# Same schema: { "municipalities": [ { "prefecture": {...}, "municipality": {...} } ] }
# data_file = "municipalities.json"

# Output format: "text" or "json"
format = "text"

# Colorize text output
color = true
"#;

pub fn init_config(force: bool) -> Result<(), String> {
    write_template(Path::new(CONFIG_FILE), force)?;

    println!("{} Created {}", "✅".green(), CONFIG_FILE);
    println!("\n{}", "Configuration file created with defaults:".cyan());
    println!("  {} format = \"text\"", "•".blue());
    println!("  {} color = true", "•".blue());
    println!(
        "\n{}",
        format!("Edit {} to point at a full dataset or change the output.", CONFIG_FILE).cyan()
    );

    Ok(())
}

fn write_template(config_path: &Path, force: bool) -> Result<(), String> {
    if config_path.exists() && !force {
        return Err(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        ));
    }

    fs::write(config_path, TEMPLATE)
        .map_err(|e| format!("Failed to create {}: {}", config_path.display(), e))
}
