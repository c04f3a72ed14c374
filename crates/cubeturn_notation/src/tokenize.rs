//! Splitting move strings into tokens.

use crate::is_turn_suffix;

/// Splits a string of moves into tokens.
///
/// Whitespace is ignored entirely. Scanning left to right, a token is one
/// character optionally followed by a single turn suffix (`2` or `'`). Tokens
/// are not checked against the known move families here: `"Rw2"` becomes `R`
/// and `w2`, and the bad token is only rejected when it is parsed. A suffix
/// with nothing to attach to becomes its own token.
pub fn tokenize(s: &str) -> Vec<String> {
    let mut tokens = vec![];
    let mut current = String::new();
    let mut current_len = 0;
    for c in s.chars().filter(|c| !c.is_whitespace()) {
        if (current_len == 1 && !is_turn_suffix(c)) || current_len == 2 {
            tokens.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(c);
        current_len += 1;
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
