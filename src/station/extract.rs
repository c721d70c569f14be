//! Bracketed station extraction from commit messages.

/// Marker that opens a station reference in a commit message.
pub const MESSAGE_OPEN: &str = " [";

/// Marker that closes a station reference in a commit message.
pub const MESSAGE_CLOSE: &str = "]";

/// Extracts the station candidate from a commit message.
///
/// Drops everything up to and including the first `" ["`, then everything
/// from the last `"]"` of what remains. Each step is a no-op when its
/// marker is missing, so a message without brackets comes back unchanged.
///
/// Multiple bracket pairs are not split apart: `"a [b] c [d]"` yields
/// `"b] c [d"`.
pub fn extract_candidate(message: &str) -> String {
    let after_open = match message.find(MESSAGE_OPEN) {
        Some(idx) => &message[idx + MESSAGE_OPEN.len()..],
        None => message,
    };

    let before_close = match after_open.rfind(MESSAGE_CLOSE) {
        Some(idx) => &after_open[..idx],
        None => after_open,
    };

    before_close.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_bracket_pair() {
        assert_eq!(extract_candidate("Deploy build [paris-01]"), "paris-01");
    }

    #[test]
    fn no_brackets_is_unchanged() {
        assert_eq!(extract_candidate("no brackets here"), "no brackets here");
    }

    #[test]
    fn multiple_pairs_span_first_open_to_last_close() {
        assert_eq!(extract_candidate("a [b] c [d]"), "b] c [d");
    }

    #[test]
    fn trailing_text_after_close_is_dropped() {
        assert_eq!(
            extract_candidate("Retrain [berlin-02] with new features"),
            "berlin-02"
        );
    }

    #[test]
    fn open_without_close_keeps_remainder() {
        assert_eq!(extract_candidate("Fix [oslo"), "oslo");
    }

    #[test]
    fn close_without_open_truncates() {
        assert_eq!(extract_candidate("tag] and more"), "tag");
    }

    #[test]
    fn bracket_without_leading_space_is_not_an_open() {
        assert_eq!(extract_candidate("[lyon]"), "[lyon");
    }

    #[test]
    fn empty_brackets_give_empty_candidate() {
        assert_eq!(extract_candidate("Update []"), "");
    }

    #[test]
    fn empty_message() {
        assert_eq!(extract_candidate(""), "");
    }

    #[test]
    fn multiline_message() {
        let message = "Tune hyperparameters [gotland-solar]\n\nBody text here.";
        assert_eq!(extract_candidate(message), "gotland-solar");
    }

    #[test]
    fn non_ascii_station() {
        assert_eq!(extract_candidate("Eval [münchen-ü]"), "münchen-ü");
    }
}
