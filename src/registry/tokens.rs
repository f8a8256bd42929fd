//! Raw extension list parsing

use std::collections::BTreeSet;

/// Split a comma-delimited extension list into its distinct tokens.
///
/// Pieces are trimmed and empty pieces dropped. Nothing else is normalized:
/// `MD` and `md` are different tokens, and so are `.md` and `md`.
pub fn parse_extensions(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
