//! Branch name to directory name conversion

use std::sync::LazyLock;

use regex::Regex;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.\-]").unwrap());

static DASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Turn a branch name into a flat directory name.
///
/// Anything outside `[A-Za-z0-9.-]` becomes `-`, runs of `-` collapse to one,
/// and leading or trailing `-` are trimmed.
pub fn sanitize(branch: &str) -> String {
    let replaced = UNSAFE_CHARS.replace_all(branch, "-");
    let collapsed = DASH_RUNS.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}
