//! Apply operation: patch the Podfile on disk
//!
//! 1. Locate the Podfile (missing file is a warning, not an error)
//! 2. Normalize library entries
//! 3. Read the Podfile and run the patcher in memory
//! 4. Write back only when the text changed and this is not a dry run
//!
//! Read and write failures propagate unchanged. Nothing is written before
//! the new text is fully computed.

use std::path::PathBuf;

use crate::common::fs::TextStore;
use crate::error::Result;
use crate::podfile::{
    LibraryEntry, NormalizedLibraries, PatchOutcome, codegen, normalize, patch_podfile,
};
use crate::ui::Reporter;

/// Options for [`ApplyOperation`]
#[derive(Debug, Clone)]
pub struct ApplyOptions {
    /// iOS project root containing the Podfile
    pub project_root: PathBuf,
    /// Compute the result without writing it
    pub dry_run: bool,
}

/// What [`ApplyOperation::execute`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub podfile: PathBuf,
    /// `None` when the Podfile does not exist
    pub outcome: Option<PatchOutcome>,
    /// Whether the Podfile was rewritten
    pub written: bool,
    /// Resulting Podfile text, present unless skipped
    pub content: Option<String>,
}

/// Apply operation for patching a Podfile
pub struct ApplyOperation<'a> {
    store: &'a dyn TextStore,
    reporter: &'a dyn Reporter,
}

impl<'a> ApplyOperation<'a> {
    pub fn new(store: &'a dyn TextStore, reporter: &'a dyn Reporter) -> Self {
        Self { store, reporter }
    }

    /// Execute the apply operation
    pub fn execute(&self, entries: &[LibraryEntry], options: &ApplyOptions) -> Result<ApplyReport> {
        let podfile = super::podfile_path(&options.project_root);

        if !self.store.exists(&podfile) {
            self.reporter.warn(&format!(
                "Podfile not found at {}, skipping",
                podfile.display()
            ));
            return Ok(ApplyReport {
                podfile,
                outcome: None,
                written: false,
                content: None,
            });
        }

        let libraries = normalize(entries);
        self.report_libraries(&libraries);

        let text = self.store.read(&podfile)?;
        let patched = patch_podfile(
            &text,
            &libraries.all_libraries,
            &libraries.modular_header_libraries,
        );
        let outcome = patched.outcome;

        match outcome {
            PatchOutcome::NothingToDo => {
                self.reporter
                    .info("No libraries configured, Podfile left unchanged");
            }
            PatchOutcome::AlreadyPatched => {
                self.reporter.info(&format!(
                    "{} already patched, leaving it unchanged",
                    podfile.display()
                ));
                self.warn_on_stale_patch(&text, &libraries);
            }
            PatchOutcome::ExtendedHook => {
                self.reporter
                    .detail("Adding to the existing pre_install hook");
            }
            PatchOutcome::AppendedHook => {
                self.reporter.detail("Appending a new pre_install hook");
            }
        }

        let content = patched.content.into_owned();
        let written = outcome.changed() && !options.dry_run;

        if written {
            self.store.write(&podfile, &content)?;
            self.reporter.success(&format!(
                "Patched {} ({} static {})",
                podfile.display(),
                libraries.all_libraries.len(),
                if libraries.all_libraries.len() == 1 {
                    "library"
                } else {
                    "libraries"
                }
            ));
        } else if outcome.changed() {
            self.reporter
                .detail("Dry run, Podfile not written");
        }

        Ok(ApplyReport {
            podfile,
            outcome: Some(outcome),
            written,
            content: Some(content),
        })
    }

    fn report_libraries(&self, libraries: &NormalizedLibraries) {
        for name in &libraries.all_libraries {
            let modular = libraries.modular_header_libraries.contains(name);
            self.reporter.detail(&format!(
                "{name}{}",
                if modular { " (modular headers)" } else { "" }
            ));
        }
    }

    /// The marker guard ignores configuration changes; point them out
    fn warn_on_stale_patch(&self, text: &str, libraries: &NormalizedLibraries) {
        let missing: Vec<&str> = libraries
            .all_libraries
            .iter()
            .filter(|lib| {
                let clause = codegen::library_condition(std::slice::from_ref(*lib));
                !text.contains(&clause)
            })
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            self.reporter.warn(&format!(
                "Podfile was patched earlier without {}; remove the block marked '{}' to re-apply",
                missing.join(", "),
                crate::podfile::MARKER
            ));
        }
    }
}
