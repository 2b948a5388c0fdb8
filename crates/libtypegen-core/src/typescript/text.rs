//! Line-joining and indentation helpers for the emitted TypeScript.
//! Pure functions, no failure modes.

/// Joins lines into a brace-wrapped block, indenting each line by one unit
/// and trimming trailing whitespace. Multi-line entries are indented as a
/// whole, so nested blocks re-indent correctly. With no non-blank content
/// the block collapses to the empty-braces literal.
pub(crate) fn braced_block<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let lines: Vec<String> = lines.into_iter().collect();
    let mut body: Vec<&str> = vec![];
    for line in &lines {
        for part in line.split('\n') {
            body.push(part.trim_end());
        }
    }

    if body.iter().all(|line| line.trim().is_empty()) {
        return "{}".to_string();
    }

    let indented = body.iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{{\n{indented}\n}}")
}

/// Collapses every whitespace run to a single space. Applied to
/// re-serialized operation source so the emitted constant is stable across
/// source formatting.
pub(crate) fn collapse_whitespace(source: &str) -> String {
    source.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders `value` as a double-quoted TypeScript string literal.
pub(crate) fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
