//! Command to build a path from its structural parts.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use drivepath::ParsedPath;

/// Build a path from root, dir, base, name and ext.
///
/// Parts may come from a JSON object (as printed by `parse`) and from flags;
/// flags win.
#[derive(Args)]
pub struct FormatCommand {
    /// Root (drive plus at most one separator)
    #[arg(long)]
    pub root: Option<String>,

    /// Directory
    #[arg(long)]
    pub dir: Option<String>,

    /// Base name (name plus extension)
    #[arg(long)]
    pub base: Option<String>,

    /// Name without extension
    #[arg(long)]
    pub name: Option<String>,

    /// Extension including its dot
    #[arg(long)]
    pub ext: Option<String>,

    /// Parts as a JSON object
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}

impl FormatCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let parts = self.into_parts()?;
        println!("{}", drivepath::format(&parts));
        Ok(())
    }

    /// Merge the JSON object and the flags into one record.
    pub fn into_parts(self) -> Result<ParsedPath, CliError> {
        let mut parts = match self.json {
            Some(ref json) => serde_json::from_str::<ParsedPath>(json)
                .map_err(|e| CliError::InvalidArguments(format!("--json: {e}")))?,
            None => ParsedPath::default(),
        };

        for (flag, field) in [
            (self.root, &mut parts.root),
            (self.dir, &mut parts.dir),
            (self.base, &mut parts.base),
            (self.name, &mut parts.name),
            (self.ext, &mut parts.ext),
        ] {
            if let Some(value) = flag {
                *field = value;
            }
        }

        Ok(parts)
    }
}
