use insta::assert_debug_snapshot;
use seqkit::{each, egrep, egrep_with, grep, rotate, rotate_once, size, RegexOptions};

/// An iterator that produces more elements after reporting the end.
#[derive(Clone)]
struct Resuming {
    items: Vec<Option<i32>>,
    index: usize,
}

impl Resuming {
    fn new(items: Vec<Option<i32>>) -> Self {
        Self { items, index: 0 }
    }
}

impl Iterator for Resuming {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let item = self.items.get(self.index).copied().flatten();
        self.index += 1;
        item
    }
}

#[test]
fn test_each_calls_once_per_element_in_order() {
    let input = vec![10, 20, 30, 40];
    let mut seen = Vec::new();
    each(&input, |item| seen.push(*item));
    assert_eq!(seen.len(), size(&input));
    assert_eq!(seen, input);
}

#[test]
fn test_grep() {
    let found = grep(["apple", "banana", "grape"], "ap").collect::<Vec<_>>();
    assert_debug_snapshot!(found, @r###"
    [
        "apple",
        "grape",
    ]
    "###);
}

#[test]
fn test_grep_is_lazy() {
    let mut formatted = 0;
    let source = ["ab", "cd", "ab", "cd"].into_iter().inspect(|_| formatted += 1);
    let mut found = grep(source, "ab");
    assert_eq!(found.next(), Some("ab"));
    drop(found);
    assert_eq!(formatted, 1);
}

#[test]
fn test_egrep_anchored() {
    let found = egrep(["apple", "banana", "ace"], "^a.*e$")
        .unwrap()
        .collect::<Vec<_>>();
    assert_debug_snapshot!(found, @r###"
    [
        "apple",
        "ace",
    ]
    "###);
}

#[test]
fn test_egrep_multi_line() {
    let input = ["first\nsecond", "third"];
    let found = egrep(input, "^second$").unwrap().collect::<Vec<_>>();
    assert!(found.is_empty());
    let options: RegexOptions = "m".parse().unwrap();
    let found = egrep_with(input, "^second$", options)
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(found, vec!["first\nsecond"]);
}

#[test]
fn test_egrep_invalid_pattern_does_not_pull() {
    let mut pulled = 0;
    let source = ["a", "b"].into_iter().inspect(|_| pulled += 1);
    assert!(matches!(
        egrep(source, "(unclosed"),
        Err(seqkit::error::Error::Pattern(_))
    ));
    assert_eq!(pulled, 0);
}

#[test]
fn test_egrep_invalid_pattern_message() {
    let err = egrep(["a"], "a(b").err().unwrap();
    let message = err.to_string();
    assert!(message.starts_with("Invalid regular expression: "));
    // the regex diagnostic is included
    assert!(message.contains("unclosed group"), "{}", message);
}

#[test]
fn test_rotate() {
    let rotated = rotate([1, 2, 3, 4, 5], 2).unwrap().collect::<Vec<_>>();
    assert_debug_snapshot!(rotated, @r###"
    [
        3,
        4,
        5,
        1,
        2,
    ]
    "###);
}

#[test]
fn test_rotate_zero_is_identity() {
    let rotated = rotate([1, 2, 3], 0).unwrap().collect::<Vec<_>>();
    assert_eq!(rotated, vec![1, 2, 3]);
}

#[test]
fn test_rotate_by_size_is_identity() {
    let rotated = rotate([1, 2, 3], 3).unwrap().collect::<Vec<_>>();
    assert_eq!(rotated, vec![1, 2, 3]);
}

#[test]
fn test_rotate_larger_than_size() {
    let rotated = rotate(["a", "b", "c"], 4).unwrap().collect::<Vec<_>>();
    assert_eq!(rotated, vec!["b", "c", "a"]);
}

#[test]
fn test_rotate_negative_rotates_right() {
    let rotated = rotate([1, 2, 3, 4, 5], -2).unwrap().collect::<Vec<_>>();
    assert_eq!(rotated, vec![4, 5, 1, 2, 3]);
}

#[test]
fn test_rotate_once() {
    let rotated = rotate_once(vec!["x", "y", "z"]).unwrap().collect::<Vec<_>>();
    assert_eq!(rotated, vec!["y", "z", "x"]);
}

#[test]
fn test_rotate_empty_is_error() {
    let result = rotate(Vec::<u32>::new(), 3);
    let err = result.unwrap_err();
    assert!(matches!(err, seqkit::error::Error::EmptySequence));
    assert_eq!(err.to_string(), "Cannot rotate an empty sequence");
}

#[test]
fn test_rotate_preserves_size_and_elements() {
    let input = vec![5, 3, 3, 9, 1, 7];
    for distance in -13..13 {
        let mut rotated = rotate(&input, distance).unwrap().copied().collect::<Vec<_>>();
        assert_eq!(rotated.len(), size(&input));
        rotated.sort();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(rotated, expected, "distance {}", distance);
    }
}

#[test]
fn test_rotate_non_exact_source() {
    // a filtered iterator has no exact size, so it is counted first
    let evens = (1..=10).filter(|i| i % 2 == 0);
    let rotated = rotate(evens, 1).unwrap().collect::<Vec<_>>();
    assert_eq!(rotated, vec![4, 6, 8, 10, 2]);
}

#[test]
fn test_rotate_source_resuming_after_end() {
    let source = Resuming::new(vec![Some(1), Some(2), Some(3), None, Some(99), None]);
    assert_eq!(size(source.clone()), 3);
    let mut rotated = rotate(source, 1).unwrap();
    assert_eq!(rotated.by_ref().collect::<Vec<_>>(), vec![2, 3, 1]);
    assert_eq!(rotated.next(), None);
}

#[test]
fn test_rotate_early_drop() {
    let rotated = rotate(vec![String::from("a"), String::from("b")], 1).unwrap();
    let first = rotated.take(1).collect::<Vec<_>>();
    assert_eq!(first, vec!["b"]);
}
