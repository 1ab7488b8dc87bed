use super::*;

// =============================================================================
// parse_cors_origins
// =============================================================================

#[test]
fn unset_var_yields_dev_defaults() {
    assert_eq!(
        parse_cors_origins(None),
        vec!["http://localhost:3000".to_owned(), "http://localhost:5173".to_owned()]
    );
}

#[test]
fn single_origin_is_parsed() {
    assert_eq!(
        parse_cors_origins(Some("https://shop.example.com".to_owned())),
        vec!["https://shop.example.com".to_owned()]
    );
}

#[test]
fn comma_list_is_split_and_trimmed() {
    assert_eq!(
        parse_cors_origins(Some("https://a.example.com , https://b.example.com".to_owned())),
        vec!["https://a.example.com".to_owned(), "https://b.example.com".to_owned()]
    );
}

#[test]
fn empty_entries_are_dropped() {
    assert_eq!(
        parse_cors_origins(Some(",https://a.example.com,,".to_owned())),
        vec!["https://a.example.com".to_owned()]
    );
}

#[test]
fn all_empty_falls_back_to_defaults() {
    assert_eq!(
        parse_cors_origins(Some(" , ,".to_owned())),
        vec!["http://localhost:3000".to_owned(), "http://localhost:5173".to_owned()]
    );
}
