/// Filter values that show every timeline item.
pub const SHOW_ALL: [&str; 2] = ["todos", "all"];

/// Whether an item tagged `category` is shown under `filter`.
pub fn shows(filter: &str, category: Option<&str>) -> bool {
    SHOW_ALL.contains(&filter) || category == Some(filter)
}

#[cfg(test)]
mod tests {
    use super::shows;

    #[test]
    fn show_all_ignores_category() {
        assert!(shows("todos", None));
        assert!(shows("all", Some("documentacion")));
    }

    #[test]
    fn category_must_match_exactly() {
        assert!(shows("revitalizacion", Some("revitalizacion")));
        assert!(!shows("revitalizacion", Some("documentacion")));
        assert!(!shows("revitalizacion", None));
    }
}
