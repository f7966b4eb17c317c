use super::*;

fn advanced(source: &str, chars: usize) -> Cursor<'_> {
    Cursor::new(source).read_n(chars).unwrap().1
}

#[test]
fn test_success() {
    let cursor = advanced("abc", 2);
    let outcome = Outcome::success(cursor, 42);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.cursor(), cursor);
    assert_eq!(outcome.reason(), None);
    assert_eq!(*outcome.value(), 42);
    assert_eq!(outcome.into_value(), 42);
}

#[test]
fn test_failure() {
    let cursor = advanced("ab\ncd", 4);
    let outcome: Outcome<'_, i32> = Outcome::failure(Reason::ValidationFailed, cursor);
    assert!(outcome.is_failure());
    assert_eq!(outcome.reason(), Some(&Reason::ValidationFailed));
    assert_eq!(outcome.position(), LinePosition::new(1, 1));
    assert_eq!(outcome.cursor(), cursor);
}

#[test]
#[should_panic(expected = "called `Outcome::value()` on a failure")]
fn test_value_on_failure_panics() {
    let outcome: Outcome<'_, i32> = Outcome::failure(Reason::EndOfInput, Cursor::new(""));
    let _ = outcome.value();
}

#[test]
#[should_panic(expected = "called `Outcome::into_value()` on a failure")]
fn test_into_value_on_failure_panics() {
    let outcome: Outcome<'_, i32> = Outcome::failure(Reason::EndOfInput, Cursor::new(""));
    let _ = outcome.into_value();
}

#[test]
fn test_map_success() {
    let outcome = Outcome::success(Cursor::new("x"), 21).map(|x| x * 2);
    assert_eq!(outcome.into_value(), 42);
}

#[test]
fn test_map_failure_passes_through() {
    let cursor = advanced("xyz", 1);
    let outcome: Outcome<'_, i32> = Outcome::failure(Reason::TrailingInput, cursor);
    let mapped = outcome.map(|x| x.to_string());
    assert_eq!(mapped.reason(), Some(&Reason::TrailingInput));
    assert_eq!(mapped.cursor(), cursor);
}

#[test]
fn test_into_result() {
    let cursor = advanced("ab", 1);
    let (value, next) = Outcome::success(cursor, 'a').into_result().unwrap();
    assert_eq!(value, 'a');
    assert_eq!(next, cursor);

    let failure = Outcome::<()>::failure(Reason::EndOfInput, cursor)
        .into_result()
        .unwrap_err();
    assert_eq!(failure.reason(), &Reason::EndOfInput);
    assert_eq!(failure.at(), cursor);
}

#[test]
fn test_relocate_keeps_reason() {
    let start = Cursor::new("abc");
    let failure = Failure::new(Reason::Excluded { found: 'c' }, advanced("abc", 3));
    let moved = failure.relocate(start);
    assert_eq!(moved.reason(), &Reason::Excluded { found: 'c' });
    assert_eq!(moved.position(), LinePosition::new(0, 0));
}

#[test]
fn test_failure_display() {
    let failure = Failure::new(
        Reason::Mismatch {
            found: 'b',
            expected: '>',
        },
        advanced("a\nb", 3),
    );
    assert_eq!(failure.to_string(), "Failed on (1, 1): found `b`, expected `>`");
}

#[test]
fn test_reason_display_escapes_control_chars() {
    let reason = Reason::Unsatisfied {
        found: '\n',
        expected: "a letter or digit",
    };
    assert_eq!(reason.to_string(), "found `\\n`, expected a letter or digit");
}
