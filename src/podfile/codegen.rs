//! Ruby snippet builders for the `pre_install` hook
//!
//! Every function here is a pure string builder. The patcher composes them
//! depending on whether it extends an existing hook or appends a new one.

use super::MARKER;

/// Opening line of a freshly generated hook block
pub const HOOK_OPENER: &str = "pre_install do |installer|";

/// Escape a library name for use inside a single-quoted Ruby string
///
/// Backslashes are doubled first so a trailing backslash cannot swallow
/// the closing quote, then quotes are escaped.
pub fn escape_ruby_single_quoted(name: &str) -> String {
    name.replace('\\', "\\\\").replace('\'', "\\'")
}

/// `pod.name.eql?('A') || pod.name.eql?('B')`, in input order
pub fn library_condition(libraries: &[String]) -> String {
    libraries
        .iter()
        .map(|lib| format!("pod.name.eql?('{}')", escape_ruby_single_quoted(lib)))
        .collect::<Vec<_>>()
        .join(" || ")
}

/// Snippet enabling modular headers per target definition
///
/// Returns an empty string for an empty list so nothing is left behind.
pub fn modular_headers_block(modular_header_libraries: &[String]) -> String {
    if modular_header_libraries.is_empty() {
        return String::new();
    }

    let pods = modular_header_libraries
        .iter()
        .map(|lib| format!("'{}'", escape_ruby_single_quoted(lib)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "  modular_header_pods = [{pods}]
  installer.podfile.target_definition_list.each do |target_definition|
    modular_header_pods.each do |pod_name|
      target_definition.set_use_modular_headers_for_pod(pod_name, true)
    end
  end
"
    )
}

/// Loop overriding `build_type` for every matching pod target
pub fn static_library_block(condition: &str) -> String {
    format!(
        "  installer.pod_targets.each do |pod|
    if {condition}
      def pod.build_type
        Pod::BuildType.static_library
      end
    end
  end
"
    )
}

/// Code spliced into an existing hook, right before its closing `end`
pub fn insertion_snippet(condition: &str, modular_headers: &str) -> String {
    format!(
        "\n  {MARKER}\n{modular_headers}{}",
        static_library_block(condition)
    )
}

/// A complete hook block, used when the Podfile has none
pub fn hook_block(condition: &str, modular_headers: &str) -> String {
    format!(
        "\n{MARKER}\n{HOOK_OPENER}\n{modular_headers}{}end\n",
        static_library_block(condition)
    )
}
