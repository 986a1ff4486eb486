//! Podfile patching
//!
//! This module forces selected pods to build as static libraries by
//! injecting a `pre_install` hook into the iOS `Podfile`:
//!
//! ```ruby
//! # Added by expo-plugin-ios-static-libraries
//! pre_install do |installer|
//!   installer.pod_targets.each do |pod|
//!     if pod.name.eql?('LibA') || pod.name.eql?('LibB')
//!       def pod.build_type
//!         Pod::BuildType.static_library
//!       end
//!     end
//!   end
//! end
//! ```
//!
//! - [`normalize`]: library entries to flat name lists
//! - [`codegen`]: Ruby snippet builders
//! - [`scanner`]: locating an existing hook block
//! - [`patch`]: the text surgery itself
//!
//! Patching is idempotent by marker: once [`MARKER`] is in the text, later
//! runs leave it alone, even with a different library list.

pub mod codegen;
pub mod normalize;
pub mod patch;
pub mod scanner;


pub use normalize::{LibraryEntry, NormalizedLibraries, normalize};
pub use patch::{PatchOutcome, Patched, is_patched, patch, patch_podfile};

/// Comment line marking a Podfile as already patched
pub const MARKER: &str = "# Added by expo-plugin-ios-static-libraries";

/// File name of the manifest inside the iOS project root
pub const PODFILE_NAME: &str = "Podfile";
