//! Operations coordinating configuration, the Podfile on disk and the patcher
//!
//! - ApplyOperation: patch the Podfile in place (or preview it)
//! - StatusOperation: report whether the Podfile carries the hook
//!
//! Operations never print directly; they go through a [`crate::ui::Reporter`]
//! and read and write through a [`crate::common::fs::TextStore`].

pub mod apply;
pub mod status;

use std::path::{Path, PathBuf};

use normpath::PathExt;

use crate::podfile::PODFILE_NAME;

pub use apply::{ApplyOperation, ApplyOptions, ApplyReport};
pub use status::{PodfileStatus, StatusOperation};

/// Podfile location inside an iOS project root
///
/// The root is normalized when it exists so messages show a clean path.
pub fn podfile_path(project_root: &Path) -> PathBuf {
    let root = project_root
        .normalize()
        .map(|np| np.into_path_buf())
        .unwrap_or_else(|_| project_root.to_path_buf());
    root.join(PODFILE_NAME)
}
