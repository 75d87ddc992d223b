//! Results message formatting

/// Render a results message: header naming the label, then a numbered list.
///
/// Asterisks are stripped from the label and, again, from every name so that
/// nothing reaching the chat can open a markup span.
pub fn format_track_names(label: &str, names: &[String]) -> String {
    let mut out = format!("🎧 {} Track Names 🎧\n\n", header_label(label));

    let lines: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name.replace('*', "")))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Asterisk-free label with the first character uppercased and the rest
/// lowercased
pub fn header_label(label: &str) -> String {
    let cleaned = label.replace('*', "");
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
