//! Line-based `{{placeholder}}` substitution, independent of the tree model.
//!
//! Working on raw text keeps quoting and structure intact, at the price of
//! not seeing placeholders split across lines.

/// Replace the first `{{...}}` span on each line whose interior matches
/// `name` with `replacement`.
///
/// Matching strips surrounding whitespace and compares case-insensitively,
/// so `{{ Foo }}` matches the name `foo`. Lines without a well-formed
/// placeholder, or with a different name, pass through unchanged. Only the
/// first placeholder per line is considered.
pub fn fill_placeholder(text: &str, name: &str, replacement: &str) -> String {
    let target = name.trim().to_lowercase();
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| fill_line(line, &target, replacement))
        .collect();
    lines.join("\n")
}

fn fill_line(line: &str, target: &str, replacement: &str) -> String {
    let Some(open) = line.find("{{") else {
        return line.to_string();
    };
    let Some(close) = line[open + 2..].find("}}").map(|i| open + 2 + i) else {
        return line.to_string();
    };
    let inner = &line[open + 2..close];
    if inner.trim().to_lowercase() != *target {
        return line.to_string();
    }
    format!("{}{}{}", &line[..open], replacement, &line[close + 2..])
}
