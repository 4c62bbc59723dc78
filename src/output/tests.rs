//! Tests for output rendering

use super::*;
use crate::api::Follow;
use pretty_assertions::assert_eq;
use std::cmp::Ordering;
use test_case::test_case;

#[test_case("9", "10", Ordering::Less; "digit runs compare by value")]
#[test_case("2", "10", Ordering::Less; "shorter run with smaller value")]
#[test_case("10", "10", Ordering::Equal; "equal numbers")]
#[test_case("007", "7", Ordering::Equal; "leading zeros do not change value")]
#[test_case("a2", "a10", Ordering::Less; "digit run after common prefix")]
#[test_case("a", "b", Ordering::Less; "plain bytes")]
#[test_case("a", "a1", Ordering::Less; "prefix sorts first")]
#[test_case("12a", "12", Ordering::Greater; "longer string after equal run")]
#[test_case("1374004777531007833", "99", Ordering::Greater; "id-sized values")]
fn test_natural_cmp(a: &str, b: &str, expected: Ordering) {
    assert_eq!(natural_cmp(a, b), expected);
    assert_eq!(natural_cmp(b, a), expected.reverse());
}

#[test]
fn test_write_id_has_no_trailing_newline() {
    let mut out = Vec::new();
    write_id(&mut out, "7").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "7");
}

#[test]
fn test_write_ids_natural_order() {
    let mut out = Vec::new();
    write_ids(
        &mut out,
        vec!["10".to_string(), "2".to_string(), "1".to_string()],
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n10\n");
}

#[test]
fn test_write_ids_empty() {
    let mut out = Vec::new();
    write_ids(&mut out, Vec::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_write_follows_reverses_once() {
    let follows = vec![
        Follow {
            id: "3".to_string(),
            username: "newest".to_string(),
        },
        Follow {
            id: "1".to_string(),
            username: "oldest".to_string(),
        },
    ];

    let mut out = Vec::new();
    write_follows(&mut out, &follows).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1,oldest\n3,newest\n");
}

#[test]
fn test_write_follows_is_not_a_sort() {
    // Reversal is an ordering fix, not a general sort: ids stay wherever
    // the reversed page order puts them.
    let follows = vec![
        Follow {
            id: "1".to_string(),
            username: "c".to_string(),
        },
        Follow {
            id: "9".to_string(),
            username: "b".to_string(),
        },
        Follow {
            id: "5".to_string(),
            username: "a".to_string(),
        },
    ];

    let mut out = Vec::new();
    write_follows(&mut out, &follows).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "5,a\n9,b\n1,c\n");
}
