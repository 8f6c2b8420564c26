//! Canvas printing for the terminal.

use canvo_core::BusinessModelCanvas;

use crate::cli::OutputFormat;

/// Print a canvas in the selected output format.
pub fn print_canvas(
    canvas: &BusinessModelCanvas,
    title: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(canvas)?);
        }
        OutputFormat::Text => {
            println!("{title}");
            println!("{}", "=".repeat(title.len()));
            for (name, bullets) in canvas.fields() {
                println!("\n{}", heading(name));
                for bullet in bullets {
                    println!("  - {bullet}");
                }
            }
        }
    }
    Ok(())
}

/// Turn `key_partners` into `Key Partners`.
fn heading(field: &str) -> String {
    field
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
