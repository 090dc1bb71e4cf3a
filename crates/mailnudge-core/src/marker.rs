//! Idempotency marker handling.
//!
//! A processed item carries the [`SENT_MARKER`] label so later runs never
//! remind it again. Matching is exact: a label that merely contains the
//! marker text does not count.

/// Label recorded on an item once its reminder has been sent.
pub const SENT_MARKER: &str = "AutoReminderSent";

/// Whether the marker set already records a sent reminder.
#[must_use]
pub fn has_sent_marker(markers: &[String]) -> bool {
    markers.iter().any(|m| m == SENT_MARKER)
}

/// The marker set with the sent marker added.
///
/// Returns a new vector; the input is never mutated. Pre-existing entries
/// keep their relative order, with the marker appended at the end if absent.
/// Applying this twice yields the same set (set union, not append).
#[must_use]
pub fn with_sent_marker(markers: &[String]) -> Vec<String> {
    let mut updated = markers.to_vec();
    if !has_sent_marker(markers) {
        updated.push(SENT_MARKER.to_string());
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_exact_match_only() {
        assert!(has_sent_marker(&labels(&["Urgent", "AutoReminderSent"])));
        assert!(!has_sent_marker(&labels(&["AutoReminderSentArchive"])));
        assert!(!has_sent_marker(&labels(&["xAutoReminderSent"])));
        assert!(!has_sent_marker(&labels(&["autoremindersent"])));
        assert!(!has_sent_marker(&[]));
    }

    #[test]
    fn test_with_sent_marker_appends_once() {
        let updated = with_sent_marker(&labels(&["Urgent"]));
        assert_eq!(updated, labels(&["Urgent", "AutoReminderSent"]));

        let again = with_sent_marker(&updated);
        assert_eq!(again, updated);
    }

    #[test]
    fn test_with_sent_marker_does_not_mutate_input() {
        let original = labels(&["A", "B"]);
        let _updated = with_sent_marker(&original);
        assert_eq!(original, labels(&["A", "B"]));
    }

    proptest! {
        #[test]
        fn prop_with_sent_marker_idempotent(markers in proptest::collection::vec("[A-Za-z ]{0,12}", 0..8)) {
            let once = with_sent_marker(&markers);
            let twice = with_sent_marker(&once);
            prop_assert_eq!(&once, &twice);
            prop_assert!(has_sent_marker(&once));
        }

        #[test]
        fn prop_with_sent_marker_preserves_prefix(markers in proptest::collection::vec("[A-Za-z ]{0,12}", 0..8)) {
            let updated = with_sent_marker(&markers);
            prop_assert_eq!(&updated[..markers.len()], &markers[..]);
        }
    }
}
