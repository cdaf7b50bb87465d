use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge_disjoint() {
    let merged = Span::new(20, 30).merge(Span::new(0, 10));
    assert_eq!(merged, Span::new(0, 30));
}

#[test]
fn test_span_try_from_range_start_too_large() {
    let large_start = u32::MAX as usize + 1;
    let result = Span::try_from_range(large_start..large_start + 10);
    assert!(matches!(result, Err(SpanError::StartTooLarge(_))));
}

#[test]
fn test_span_try_from_range_end_too_large() {
    let large_end = u32::MAX as usize + 1;
    let result = Span::try_from_range(0..large_end);
    assert!(matches!(result, Err(SpanError::EndTooLarge(_))));
}

#[test]
fn test_span_error_display() {
    let msg = SpanError::StartTooLarge(0x1_0000_0000).to_string();
    assert!(msg.contains("start"));
    assert!(msg.contains("0x100000000"));
}

#[test]
fn test_span_point_is_empty() {
    let point = Span::point(42);
    assert!(point.is_empty());
    assert_eq!(point.start, 42);
}

#[test]
fn test_span_shifted() {
    assert_eq!(Span::new(3, 7).shifted(100), Span::new(103, 107));
}

#[test]
fn test_span_contains_span() {
    let outer = Span::new(10, 20);
    assert!(outer.contains_span(Span::new(10, 20)));
    assert!(outer.contains_span(Span::point(15)));
    assert!(!outer.contains_span(Span::new(5, 15)));
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
    assert_eq!(Span::default(), Span::DUMMY);
}
