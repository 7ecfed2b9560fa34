/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `ACIDARMOR` becomes `Acidarmor` and `X-SCISSOR` becomes `X-Scissor`.
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut start_of_word = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if start_of_word {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            start_of_word = false;
        } else {
            out.push(ch);
            start_of_word = true;
        }
    }
    out
}

/// Display name of a type code from pokemon.txt. The game stores the Sound
/// type under its Italian name.
pub fn display_type(raw: &str) -> String {
    let titled = title_case(raw.trim());
    if titled == "Suono" {
        "Sound".to_string()
    } else {
        titled
    }
}

/// Splits a comma-joined field, dropping empty items.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Wiki image names drop the spaces of display names.
pub fn image_name(display_name: &str) -> String {
    display_name.replace(' ', "")
}
