//! Status operation: is the Podfile already patched?

use std::path::{Path, PathBuf};

use crate::common::fs::TextStore;
use crate::error::Result;
use crate::podfile::{is_patched, scanner};

/// Podfile state as seen by [`StatusOperation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodfileStatus {
    Missing { podfile: PathBuf },
    Present {
        podfile: PathBuf,
        /// The marker is present
        patched: bool,
        /// First and last line of the `pre_install` hook, ours or not
        hook_lines: Option<(usize, usize)>,
    },
}

impl PodfileStatus {
    pub fn is_patched(&self) -> bool {
        matches!(self, PodfileStatus::Present { patched: true, .. })
    }
}

/// Status operation for inspecting a Podfile
pub struct StatusOperation<'a> {
    store: &'a dyn TextStore,
}

impl<'a> StatusOperation<'a> {
    pub fn new(store: &'a dyn TextStore) -> Self {
        Self { store }
    }

    pub fn execute(&self, project_root: &Path) -> Result<PodfileStatus> {
        let podfile = super::podfile_path(project_root);
        if !self.store.exists(&podfile) {
            return Ok(PodfileStatus::Missing { podfile });
        }

        let text = self.store.read(&podfile)?;
        Ok(PodfileStatus::Present {
            patched: is_patched(&text),
            hook_lines: scanner::find_hook_block(&text).map(|block| block.lines(&text)),
            podfile,
        })
    }
}
