//! Line-oriented text heuristics shared by the rubric.
//!
//! Text is split on `\n`; blank lines and `#` comment lines are dropped.
//! None of these understand continuation lines, heredocs, or YAML anchors.

/// Lines that carry content, with their original indentation.
pub fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    })
}

/// Trimmed significant lines that start with `keyword`, ignoring case.
///
/// A line starting with a longer word (`COPYRIGHT` for `COPY`) also matches.
pub fn instructions<'a>(text: &'a str, keyword: &str) -> Vec<&'a str> {
    significant_lines(text)
        .map(str::trim)
        .filter(|line| starts_with_ignore_case(line, keyword))
        .collect()
}

/// Whether some indented line opens the mapping key `key`.
///
/// Matches `  app:` but not a top-level `app:`. A key of the same name nested
/// anywhere else in the document also matches.
pub fn has_indented_key(text: &str, key: &str) -> bool {
    significant_lines(text).any(|line| {
        let trimmed = line.trim_start();
        trimmed.len() < line.len()
            && trimmed.strip_prefix(key).is_some_and(|rest| rest.starts_with(':'))
    })
}

/// Whether some line opens `key` at column zero.
pub fn has_top_level_key(text: &str, key: &str) -> bool {
    significant_lines(text)
        .any(|line| line.strip_prefix(key).is_some_and(|rest| rest.starts_with(':')))
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
