use super::*;

#[test]
fn test_parse_standard_entry() {
    let ordinal = Ordinal::parse_leading("003-init").unwrap();
    assert_eq!(ordinal.value(), 3);
}

#[test]
fn test_parse_leading_zeros_are_decimal() {
    // 010 must not be read as octal 8
    assert_eq!(Ordinal::parse_leading("010-users").unwrap().value(), 10);
    assert_eq!(Ordinal::parse_leading("0089-x").unwrap().value(), 89);
}

#[test]
fn test_parse_entry_without_hyphen() {
    assert_eq!(Ordinal::parse_leading("042").unwrap().value(), 42);

    let result = Ordinal::parse_leading("readme");
    assert!(matches!(
        result,
        Err(ScaffoldError::InvalidMigrationFormat { ref entry, .. }) if entry == "readme"
    ));
}

#[test]
fn test_parse_non_numeric_token_fails() {
    let err = Ordinal::parse_leading("abc-foo").unwrap_err();
    assert!(err.to_string().contains("Last migration is not a number"));
    assert!(err.to_string().contains("abc-foo"));
}

#[test]
fn test_parse_empty_token_fails() {
    assert!(Ordinal::parse_leading("-foo").is_err());
    assert!(Ordinal::parse_leading("").is_err());
}

#[test]
fn test_parse_ignores_trailing_characters_after_digits() {
    assert_eq!(Ordinal::parse_leading("7abc-x").unwrap().value(), 7);
    assert_eq!(Ordinal::parse_leading("12_add_index").unwrap().value(), 12);
}

#[test]
fn test_parse_skips_whitespace_and_plus_sign() {
    assert_eq!(Ordinal::parse_leading("  5-x").unwrap().value(), 5);
    assert_eq!(Ordinal::parse_leading("+6-x").unwrap().value(), 6);
}

#[test]
fn test_parse_overflow_fails() {
    let result = Ordinal::parse_leading("99999999999999999999999-huge");
    assert!(matches!(
        result,
        Err(ScaffoldError::InvalidMigrationFormat { .. })
    ));
}

#[test]
fn test_next_increments() {
    assert_eq!(Ordinal::new(3).next().unwrap(), Ordinal::new(4));
}

#[test]
fn test_next_overflow_fails() {
    assert!(Ordinal::new(u64::MAX).next().is_err());
}

#[test]
fn test_render_pads_to_width() {
    assert_eq!(Ordinal::new(1).render(3), "001");
    assert_eq!(Ordinal::new(8).render(3), "008");
    assert_eq!(Ordinal::new(42).render(3), "042");
    assert_eq!(Ordinal::new(7).render(5), "00007");
}

#[test]
fn test_render_never_truncates() {
    assert_eq!(Ordinal::new(999).render(3), "999");
    assert_eq!(Ordinal::new(1000).render(3), "1000");
    assert_eq!(Ordinal::new(123456).render(3), "123456");
}

#[test]
fn test_written_width() {
    assert_eq!(Ordinal::written_width("003-init"), Some(3));
    assert_eq!(Ordinal::written_width("9-a"), Some(1));
    assert_eq!(Ordinal::written_width("0010"), Some(4));
    assert_eq!(Ordinal::written_width("notes.md"), None);
}
