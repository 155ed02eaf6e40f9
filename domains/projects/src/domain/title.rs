//! Human-readable titles derived from project slugs

/// Uppercase the first character, leaving the rest untouched
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_short_acronym(word: &str) -> bool {
    word.chars().count() <= 2 && word.to_uppercase() == word
}

/// Format a project slug into a display title.
///
/// Slugs containing `-` or `_` are split on them and each word gets its first
/// letter capitalized (`plugd-studio` becomes `Plugd Studio`, `So-FI` becomes
/// `So FI`). Otherwise the slug is treated as camel or Pascal case: a space is
/// inserted before every ASCII uppercase letter, words of at most two
/// characters that are already uppercase are kept, the first word is kept
/// as-is, and the remaining words are capitalized.
///
/// ```
/// use portfolio_projects::format_title;
///
/// assert_eq!(format_title("AirbnbRedesign"), "Airbnb Redesign");
/// assert_eq!(format_title("plugd-studio"), "Plugd Studio");
/// ```
pub fn format_title(slug: &str) -> String {
    if slug.contains(['-', '_']) {
        return slug
            .split(['-', '_', ' '])
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let mut spaced = String::with_capacity(slug.len() * 2);
    for ch in slug.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    spaced
        .trim()
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if is_short_acronym(word) || index == 0 {
                word.to_string()
            } else {
                capitalize_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
