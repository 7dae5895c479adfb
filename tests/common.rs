/// Codepoints of `text` in logical order.
pub fn codepoints(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// Render `line` as `U+XXXX` values for assertion messages.
pub fn display_codepoints(line: &[u32]) -> String {
    line.iter()
        .map(|cp| format!("U+{:04X}", cp))
        .collect::<Vec<_>>()
        .join(" ")
}
