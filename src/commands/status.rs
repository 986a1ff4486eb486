//! Status command implementation

use std::path::Path;

use console::Style;

use crate::common::fs::DiskStore;
use crate::error::Result;
use crate::operations::{PodfileStatus, StatusOperation};

/// Run status command
pub fn run(project_root: &Path, verbose: bool) -> Result<()> {
    let status = StatusOperation::new(&DiskStore).execute(project_root)?;

    match &status {
        PodfileStatus::Missing { podfile } => {
            println!(
                "{} {}",
                Style::new().yellow().bold().apply_to("Podfile not found:"),
                podfile.display()
            );
        }
        PodfileStatus::Present {
            podfile,
            hook_lines,
            ..
        } => {
            let label = if status.is_patched() {
                Style::new().green().bold().apply_to("patched")
            } else {
                Style::new().yellow().bold().apply_to("not patched")
            };
            println!("{} {}", podfile.display(), label);
            if verbose {
                let hook = match hook_lines {
                    Some((first, last)) => format!("lines {first}-{last}"),
                    None => "absent".to_string(),
                };
                println!(
                    "  {} {}",
                    Style::new().bold().apply_to("pre_install hook:"),
                    hook
                );
            }
        }
    }

    Ok(())
}
