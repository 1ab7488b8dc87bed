use super::*;

#[test]
fn register_path_is_derived_from_its_segment() {
    assert_eq!(REGISTER_PATH, format!("/{REGISTER_SEGMENT}"));
}

#[test]
fn home_path_is_root() {
    assert_eq!(HOME_PATH, "/");
}

#[test]
fn child_segments_are_unique_among_siblings() {
    let mut seen = std::collections::HashSet::new();
    for segment in CHILD_SEGMENTS {
        assert!(seen.insert(segment), "duplicate sibling segment: {segment:?}");
    }
}

#[test]
fn index_route_is_declared_first() {
    assert_eq!(CHILD_SEGMENTS.first(), Some(&""));
}

#[test]
fn segments_carry_no_leading_slash() {
    for segment in CHILD_SEGMENTS {
        assert!(!segment.starts_with('/'), "segment {segment:?} must be relative");
    }
}
