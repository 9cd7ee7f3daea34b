//! Identifier normalization.
//!
//! Pure functions turning wire-level GraphQL names into Rust identifiers:
//! lowerCamelCase field names become snake_case, SCREAMING_SNAKE_CASE enum
//! values become PascalCase prefixed with their enum's name.

/// Splits a name into words on camel-case and separator boundaries.
///
/// Runs of capitals are kept together as an acronym, so `userID` yields
/// `["user", "ID"]` and `HTTPServer` yields `["HTTP", "Server"]`.
#[must_use]
pub fn split_camel_case(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    split_camel_case(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for word in split_camel_case(s) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    result
}

/// Converts a wire field name into a Rust field identifier.
///
/// Leading underscores survive; keywords come back as raw identifiers
/// (`type` -> `r#type`), and the four names that cannot be raw get a
/// trailing underscore.
#[must_use]
pub fn field_identifier(name: &str) -> String {
    let leading = name.len() - name.trim_start_matches('_').len();
    let snake = to_snake_case(name);
    if snake.is_empty() {
        return "field".to_string();
    }
    escape_keyword(format!("{}{}", "_".repeat(leading), snake))
}

/// Converts a wire enum value into a variant identifier prefixed with the
/// owning enum's name (`Color`, `RED` -> `ColorRed`).
#[must_use]
pub fn enum_value_identifier(enum_name: &str, value_name: &str) -> String {
    format!("{}{}", enum_name, to_pascal_case(value_name))
}

fn escape_keyword(ident: String) -> String {
    match ident.as_str() {
        "self" | "Self" | "super" | "crate" => format!("{ident}_"),
        // syn refuses keywords when parsing a plain identifier.
        _ if syn::parse_str::<syn::Ident>(&ident).is_err() => format!("r#{ident}"),
        _ => ident,
    }
}
