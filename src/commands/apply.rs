//! Apply command implementation
//!
//! Reads the library list, patches `<project-root>/Podfile` and writes it
//! back when it changed. With `--dry-run` the resulting Podfile goes to
//! stdout and only warnings are printed.

use std::path::Path;

use crate::cli::ApplyArgs;
use crate::common::fs::DiskStore;
use crate::error::Result;
use crate::operations::{ApplyOperation, ApplyOptions};
use crate::ui::{ConsoleReporter, QuietReporter, Reporter};

use super::helpers;

/// Run apply command
pub fn run(project_root: &Path, verbose: bool, args: ApplyArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let entries = helpers::library_entries(&args.libraries, &current_dir)?;

    let console = ConsoleReporter::new(verbose);
    let reporter: &dyn Reporter = if args.dry_run {
        &QuietReporter
    } else {
        &console
    };

    let options = ApplyOptions {
        project_root: project_root.to_path_buf(),
        dry_run: args.dry_run,
    };
    let report = ApplyOperation::new(&DiskStore, reporter).execute(&entries, &options)?;

    if args.dry_run {
        if let Some(content) = &report.content {
            print!("{content}");
        }
    } else if report.outcome.is_some() && !report.written {
        console.detail(&format!("{} not modified", report.podfile.display()));
    }

    Ok(())
}
