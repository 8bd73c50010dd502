//! Bibliography search. Independent of the language catalog: plain
//! substring match over each reference card's text.

pub fn matches(text: &str, term: &str) -> bool {
    term.is_empty() || text.to_lowercase().contains(&term.to_lowercase())
}

pub fn result_markup(count: usize) -> String {
    let noun = if count == 1 { "reference" } else { "references" };
    format!("<strong>Search results:</strong> {count} {noun}")
}
