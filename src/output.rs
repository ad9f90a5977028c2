//! Rendering of lookup results for the terminal

use colored::*;
use muni::Municipality;
use std::collections::BTreeSet;

use crate::config::OutputFormat;

pub fn render_initials(initials: &BTreeSet<char>, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            let list: Vec<String> = initials.iter().map(char::to_string).collect();
            serde_json::to_string_pretty(&list)
                .map_err(|e| format!("Failed to serialize initials: {}", e))
        }
        OutputFormat::Text => {
            if initials.is_empty() {
                return Ok(format!("{} No matching initials", "ℹ️".blue()));
            }
            let letters: Vec<String> = initials
                .iter()
                .map(|c| c.to_string().bold().green().to_string())
                .collect();
            Ok(letters.join(" "))
        }
    }
}

pub fn render_municipalities(
    records: &[Municipality],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map_err(|e| format!("Failed to serialize municipalities: {}", e)),
        OutputFormat::Text => {
            if records.is_empty() {
                return Ok(format!("{} No municipalities found", "ℹ️".blue()));
            }

            let mut lines: Vec<String> = records
                .iter()
                .map(|m| {
                    format!(
                        "  {} {}{} {}",
                        "•".cyan(),
                        m.prefecture.full_name().yellow(),
                        m.municipality.full_name().green().bold(),
                        format!(
                            "({} / {})",
                            m.prefecture.full_rome(),
                            m.municipality.full_rome()
                        )
                        .dimmed()
                    )
                })
                .collect();
            lines.push(format!(
                "\n{} Total: {} municipalit{}",
                "✓".green(),
                records.len().to_string().bold(),
                if records.len() == 1 { "y" } else { "ies" }
            ));
            Ok(lines.join("\n"))
        }
    }
}
