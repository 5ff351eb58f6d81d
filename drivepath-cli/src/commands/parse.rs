//! Command to split a path into its structural parts.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use drivepath::{OutputFormat, ParsedPath};

/// Split a path into root, dir, base, name and ext.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format: json or human (default from configuration)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let output_format = self
            .format
            .unwrap_or_else(|| config.output_format_or_default());

        let parsed = drivepath::parse(&self.path);
        match output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&parsed)?),
            OutputFormat::Human => print!("{}", render_human(&parsed)),
        }
        Ok(())
    }
}

/// One `field: value` line per field, in declaration order.
pub fn render_human(parsed: &ParsedPath) -> String {
    [
        ("root", &parsed.root),
        ("dir", &parsed.dir),
        ("base", &parsed.base),
        ("name", &parsed.name),
        ("ext", &parsed.ext),
    ]
    .iter()
    .map(|(field, value)| format!("{field}: {value}\n"))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_human() {
        let rendered = render_human(&drivepath::parse("C:\\dir\\f.txt"));
        assert_eq!(
            rendered,
            "root: C:\\\ndir: C:\\dir\nbase: f.txt\nname: f\next: .txt\n"
        );
    }

    #[test]
    fn test_render_human_empty_fields() {
        assert_eq!(
            render_human(&ParsedPath::default()),
            "root: \ndir: \nbase: \nname: \next: \n"
        );
    }
}
