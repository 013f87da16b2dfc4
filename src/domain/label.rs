/// Upper-cases the first character and keeps the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a camel-cased command id into a button label.
///
/// A new word starts before every ASCII upper-case letter or digit (except at
/// the very start), and each word is capitalized: `inputHdmi` becomes
/// `Input Hdmi`, `menu2x` becomes `Menu 2x`.
#[must_use]
pub fn prettify_command(command: &str) -> String {
    split_words(command)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(command: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (idx, c) in command.char_indices() {
        if idx > 0 && (c.is_ascii_uppercase() || c.is_ascii_digit()) {
            words.push(&command[start..idx]);
            start = idx;
        }
    }
    words.push(&command[start..]);
    words
}
