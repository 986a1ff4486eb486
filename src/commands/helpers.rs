//! Helpers shared by commands that take a library list

use std::path::Path;

use crate::cli::LibraryArgs;
use crate::config::PodstaticConfig;
use crate::error::Result;
use crate::podfile::LibraryEntry;

/// Collect library entries from the config file and the command line
///
/// Order: config entries, positional names, then `--modular-headers` names.
/// An explicit `--config` must exist; the default `podstatic.yaml` in
/// `current_dir` is optional.
pub fn library_entries(args: &LibraryArgs, current_dir: &Path) -> Result<Vec<LibraryEntry>> {
    let mut config = match &args.config {
        Some(path) => PodstaticConfig::load(path)?,
        None => PodstaticConfig::load_default(current_dir)?.unwrap_or_default(),
    };

    config.extend(args.libraries.iter().cloned().map(LibraryEntry::from));
    config.extend(
        args.modular_headers
            .iter()
            .map(|name| LibraryEntry::with_modular_headers(name.clone())),
    );
    config.validate()?;

    Ok(config.libraries)
}
