//! Exact string comparison of the two resolved values.

use drift_types::{CheckOutcome, DiffPair};

/// Build the final outcome from the two fully resolved values.
///
/// Pure function. `changed` is true iff the strings are not
/// character-for-character identical: no line-ending, encoding, or
/// whitespace normalization of any kind.
pub fn compare(source: String, target: String) -> CheckOutcome {
    let changed = source != target;
    CheckOutcome::Compared {
        changed,
        diff: DiffPair { source, target },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_values_are_unchanged() {
        let outcome = compare("abc".to_string(), "abc".to_string());
        assert!(!outcome.is_changed());
    }

    #[test]
    fn differing_values_are_changed() {
        let outcome = compare("abc".to_string(), "xyz".to_string());
        assert!(outcome.is_changed());
    }

    #[test]
    fn whitespace_is_significant() {
        assert!(compare("abc".to_string(), "abc ".to_string()).is_changed());
        assert!(compare("abc\n".to_string(), "abc".to_string()).is_changed());
        assert!(compare("a\r\nb".to_string(), "a\nb".to_string()).is_changed());
    }

    #[test]
    fn outcome_echoes_both_values() {
        let outcome = compare("left".to_string(), "right".to_string());
        match outcome {
            CheckOutcome::Compared { diff, .. } => {
                assert_eq!(diff.source, "left");
                assert_eq!(diff.target, "right");
            }
            other => panic!("expected Compared, got {other:?}"),
        }
    }

    proptest! {
        #[test]
        fn changed_iff_unequal(a in ".*", b in ".*") {
            let outcome = compare(a.clone(), b.clone());
            prop_assert_eq!(outcome.is_changed(), a != b);
        }

        #[test]
        fn diff_preserves_inputs(a in ".*", b in ".*") {
            match compare(a.clone(), b.clone()) {
                CheckOutcome::Compared { diff, .. } => {
                    prop_assert_eq!(diff.source, a);
                    prop_assert_eq!(diff.target, b);
                }
                _ => prop_assert!(false, "compare never skips"),
            }
        }
    }
}
