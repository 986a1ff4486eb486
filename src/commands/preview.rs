//! Preview command implementation
//!
//! Prints the hook block a Podfile without any `pre_install` hook would get,
//! by patching an empty Podfile.

use crate::cli::PreviewArgs;
use crate::error::Result;
use crate::podfile::{normalize, patch};
use crate::ui::{ConsoleReporter, Reporter};

use super::helpers;

/// Run preview command
pub fn run(verbose: bool, args: PreviewArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let entries = helpers::library_entries(&args.libraries, &current_dir)?;
    let libraries = normalize(&entries);

    if libraries.all_libraries.is_empty() {
        ConsoleReporter::new(verbose)
            .warn("No libraries given; pass names or list them in podstatic.yaml");
        return Ok(());
    }

    // An empty Podfile gets exactly the generated hook appended
    let content = patch("", &libraries.all_libraries, &libraries.modular_header_libraries);
    println!("{}", content.trim_matches('\n'));

    Ok(())
}
