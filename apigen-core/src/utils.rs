//! Identifier casing and path template helpers shared by all generators.
//!
//! Both casings split the raw input into words, then drop every character
//! outside `[A-Za-z0-9]`. A word boundary is any non-alphanumeric character
//! or a lowercase letter directly followed by an uppercase one.

/// Split a raw string into words (e.g., "getUser_by-id" -> ["get", "User", "by", "id"])
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }

        if c.is_ascii_uppercase() && prev_lower {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev_lower = c.is_ascii_lowercase();
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

/// Convert a string to PascalCase (e.g., "get_users" -> "GetUsers")
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|word| capitalize(word)).collect()
}

/// Convert a string to camelCase (e.g., "GetUsers" -> "getUsers")
pub fn to_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    match words.next() {
        None => String::new(),
        Some(first) => words.fold(first.to_ascii_lowercase(), |mut acc, word| {
            acc.push_str(&capitalize(&word));
            acc
        }),
    }
}

/// Extract `{name}` placeholders from a path template.
pub fn path_placeholders(path: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                names.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }

    names
}
