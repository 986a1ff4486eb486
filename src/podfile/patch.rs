//! Injecting the static-library hook into Podfile text
//!
//! The patcher is a pure function of its inputs. It either returns the
//! original text untouched (borrowed) or a new string with the hook merged
//! into the first `pre_install` block, or appended when there is none.

use std::borrow::Cow;

use super::{MARKER, codegen, scanner};

/// What [`patch_podfile`] did to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// No libraries were requested
    NothingToDo,
    /// The marker was already present
    AlreadyPatched,
    /// Code was spliced into an existing `pre_install` block
    ExtendedHook,
    /// A new `pre_install` block was appended
    AppendedHook,
}

impl PatchOutcome {
    /// Whether the text differs from the input
    pub fn changed(self) -> bool {
        matches!(self, PatchOutcome::ExtendedHook | PatchOutcome::AppendedHook)
    }
}

/// Patched Podfile text together with the [`PatchOutcome`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched<'a> {
    pub content: Cow<'a, str>,
    pub outcome: PatchOutcome,
}

/// Whether the text carries the marker
pub fn is_patched(text: &str) -> bool {
    text.contains(MARKER)
}

/// Patch `text` and report what happened
pub fn patch_podfile<'a>(
    text: &'a str,
    libraries: &[String],
    modular_header_libraries: &[String],
) -> Patched<'a> {
    if libraries.is_empty() {
        return unchanged(text, PatchOutcome::NothingToDo);
    }
    if is_patched(text) {
        return unchanged(text, PatchOutcome::AlreadyPatched);
    }

    let condition = codegen::library_condition(libraries);
    let modular_headers = codegen::modular_headers_block(modular_header_libraries);

    match scanner::find_hook_block(text) {
        Some(block) => {
            let snippet = codegen::insertion_snippet(&condition, &modular_headers);
            let mut content = String::with_capacity(text.len() + snippet.len());
            content.push_str(&text[..block.closing]);
            content.push_str(&snippet);
            content.push_str(&text[block.closing..]);
            Patched {
                content: Cow::Owned(content),
                outcome: PatchOutcome::ExtendedHook,
            }
        }
        None => {
            let block = codegen::hook_block(&condition, &modular_headers);
            Patched {
                content: Cow::Owned(format!("{text}\n{block}\n")),
                outcome: PatchOutcome::AppendedHook,
            }
        }
    }
}

/// Patch `text`, returning it borrowed when nothing changes
pub fn patch<'a>(
    text: &'a str,
    libraries: &[String],
    modular_header_libraries: &[String],
) -> Cow<'a, str> {
    patch_podfile(text, libraries, modular_header_libraries).content
}

fn unchanged(text: &str, outcome: PatchOutcome) -> Patched<'_> {
    Patched {
        content: Cow::Borrowed(text),
        outcome,
    }
}
