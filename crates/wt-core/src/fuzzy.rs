//! Fuzzy matching for the interactive pickers
//!
//! [`score`] runs a single greedy left-to-right scan over the candidate text,
//! matching pattern characters in order and case-insensitively. Each matched
//! character adjusts the score with positional bonuses and gap penalties, so
//! that matches at word starts and in contiguous runs rank above scattered ones.
//!
//! Scores are only comparable between candidates matched against the same
//! pattern; they are not normalized.

/// Matched character is the first character of the text
pub const BONUS_FIRST_CHAR: i32 = 16;
/// Matched character follows one of `- _ . /`
pub const BONUS_SEPARATOR: i32 = 16;
/// Matched uppercase character follows a lowercase one
pub const BONUS_CAMEL_CASE: i32 = 16;
/// Matched character directly follows the previous matched character
pub const BONUS_ADJACENT: i32 = 8;
/// Per skipped character before the first match
pub const PENALTY_LEADING_GAP: i32 = -3;
/// Per skipped character between two matches
pub const PENALTY_GAP: i32 = -1;

/// Result of scoring one candidate against a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    /// Whether every pattern character was found in order
    pub matched: bool,
    /// Quality rating, higher is better; always 0 when not matched
    pub score: i32,
    /// Character indices of the matched characters, strictly increasing
    pub positions: Vec<usize>,
}

impl Match {
    /// The match every candidate gets against an empty pattern
    pub fn trivial() -> Self {
        Self {
            matched: true,
            score: 0,
            positions: Vec::new(),
        }
    }

    /// A failed match
    pub fn none() -> Self {
        Self::default()
    }
}

/// Score `text` against `pattern`.
///
/// Positions are character indices into `text`, not byte offsets. Boundary
/// bonuses look at the original text; folding only affects the equality test.
pub fn score(text: &str, pattern: &str) -> Match {
    if pattern.is_empty() {
        return Match::trivial();
    }
    if text.is_empty() {
        return Match::none();
    }

    let original: Vec<char> = text.chars().collect();
    let needle: Vec<char> = pattern.chars().map(fold).collect();
    if needle.len() > original.len() {
        return Match::none();
    }

    let mut positions = Vec::with_capacity(needle.len());
    let mut total = 0i32;
    let mut previous: Option<usize> = None;

    for (si, &ch) in original.iter().enumerate() {
        let Some(&wanted) = needle.get(positions.len()) else {
            break;
        };
        if fold(ch) != wanted {
            continue;
        }

        match previous {
            None => total += si as i32 * PENALTY_LEADING_GAP,
            Some(prev) => {
                let gap = si - prev - 1;
                if gap == 0 {
                    total += BONUS_ADJACENT;
                } else {
                    total += gap as i32 * PENALTY_GAP;
                }
            }
        }

        if si == 0 {
            total += BONUS_FIRST_CHAR;
        } else {
            let before = original[si - 1];
            if is_separator(before) {
                total += BONUS_SEPARATOR;
            }
            if before.is_lowercase() && ch.is_uppercase() {
                total += BONUS_CAMEL_CASE;
            }
        }

        positions.push(si);
        previous = Some(si);
    }

    if positions.len() < needle.len() {
        return Match::none();
    }

    Match {
        matched: true,
        score: total,
        positions,
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | '/')
}

/// Simple one-to-one case folding. Characters whose lowercase form expands
/// to several characters are compared as-is so indices stay aligned.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
