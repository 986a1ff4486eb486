//! Locating the `pre_install` hook inside a Podfile
//!
//! The opener is matched with a regex, but its closing `end` is found by a
//! small keyword scanner that tracks `do`/`if`/`def`/... nesting. A plain
//! non-greedy match would stop at the first `end` of a nested block and
//! splice code into the middle of it.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static HOOK_OPENER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bpre_install\s+do\s+\|installer\|").expect("Invalid pre_install regex")
});

#[allow(clippy::expect_used)]
static END_WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bend\b").expect("Invalid end keyword regex"));

/// Keywords that always open a level closed by `end`
const BLOCK_KEYWORDS: &[&str] = &["do", "def", "class", "module", "begin", "case"];

/// Keywords that open a level only when they start a statement.
/// In modifier position (`foo if bar`) they take no `end`.
const CONDITIONAL_KEYWORDS: &[&str] = &["if", "unless", "while", "until", "for"];

/// Loop headers that may carry an optional `do` sharing their `end`
const LOOP_KEYWORDS: &[&str] = &["while", "until", "for"];

/// Keywords after which a new statement begins on the same line
const STATEMENT_LEADERS: &[&str] = &["do", "then", "else", "begin", "and", "or"];

/// Byte span of the first hook block in a Podfile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookBlock {
    /// Offset of `pre_install`
    pub start: usize,
    /// Offset of the block's own closing `end`
    pub closing: usize,
}

impl HookBlock {
    /// Offset just past the closing `end`
    pub fn end(&self) -> usize {
        self.closing + "end".len()
    }

    /// 1-based line numbers of the opener and the closing `end`
    pub fn lines(&self, text: &str) -> (usize, usize) {
        let line_of = |offset: usize| text[..offset].matches('\n').count() + 1;
        (line_of(self.start), line_of(self.closing))
    }
}

/// Find the first `pre_install do |installer| ... end` block
///
/// Returns `None` when there is no opener, or when the opener has no `end`
/// after it at all. If the nesting never balances, the first whole-word
/// `end` after the opener is used instead.
pub fn find_hook_block(text: &str) -> Option<HookBlock> {
    let opener = HOOK_OPENER_REGEX.find(text)?;
    let body_start = opener.end();

    let closing = find_matching_end(text, body_start).or_else(|| {
        END_WORD_REGEX
            .find(&text[body_start..])
            .map(|m| body_start + m.start())
    })?;

    Some(HookBlock {
        start: opener.start(),
        closing,
    })
}

/// Walk from `from` (inside a block at depth 1) to the `end` that closes it
fn find_matching_end(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut statement_start = true;
    // Inside a `while`/`until`/`for` header, before its line ends
    let mut loop_header = false;
    let mut i = from;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'#' => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'\'' | b'"' => {
                i = skip_string(bytes, i);
                statement_start = false;
            }
            b'\n' | b';' => {
                statement_start = true;
                loop_header = false;
                i += 1;
            }
            b' ' | b'\t' | b'\r' => i += 1,
            c if is_ident_start(c) => {
                let start = i;
                while i < bytes.len() && is_ident_continue(bytes[i]) {
                    i += 1;
                }
                let word = &text[start..i];

                if is_keyword_position(bytes, start, i) {
                    if word == "do" && loop_header {
                        loop_header = false;
                    } else if statement_start && CONDITIONAL_KEYWORDS.contains(&word) {
                        depth += 1;
                        loop_header = LOOP_KEYWORDS.contains(&word);
                    } else if BLOCK_KEYWORDS.contains(&word) {
                        depth += 1;
                    } else if word == "end" {
                        depth -= 1;
                        if depth == 0 {
                            return Some(start);
                        }
                    }
                    statement_start = STATEMENT_LEADERS.contains(&word);
                } else {
                    statement_start = false;
                }
            }
            _ => {
                statement_start = matches!(b, b'(' | b'=' | b'|' | b'&' | b'{' | b'[' | b',');
                i += 1;
            }
        }
    }

    None
}

/// A word is a keyword unless it is a method call (`.end`), a symbol or
/// variable (`:end`, `@end`, `$end`), a predicate (`end?`) or a hash key (`end:`)
fn is_keyword_position(bytes: &[u8], start: usize, end: usize) -> bool {
    let before = start
        .checked_sub(1)
        .and_then(|p| bytes.get(p))
        .copied();
    let after = bytes.get(end).copied();

    !matches!(before, Some(b'.' | b':' | b'@' | b'$'))
        && !matches!(after, Some(b'?' | b'!' | b':'))
}

/// Skip a quoted literal starting at `start`, honoring backslash escapes
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
