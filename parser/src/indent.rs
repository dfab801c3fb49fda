use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("hardcoded digit-run regex is valid"));

/// Nesting depth of a sense label: one less than the number of digit runs,
/// never below zero. `"2."` is 0, `"2.1."` is 1, `"2.1.3."` is 2.
#[must_use]
pub fn indent_depth(number_label: &str) -> usize {
    DIGIT_RUN
        .find_iter(number_label)
        .count()
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::indent_depth;

    #[test]
    fn single_number_is_top_level() {
        assert_eq!(indent_depth("3."), 0);
        assert_eq!(indent_depth("12."), 0);
    }

    #[test]
    fn each_extra_digit_run_adds_a_level() {
        assert_eq!(indent_depth("3.2."), 1);
        assert_eq!(indent_depth("1.1.1."), 2);
        assert_eq!(indent_depth("10.20.30.40"), 3);
    }

    #[test]
    fn empty_and_digitless_labels_are_top_level() {
        assert_eq!(indent_depth(""), 0);
        assert_eq!(indent_depth("a)"), 0);
    }

    #[test]
    fn segmentation_is_lexical() {
        assert_eq!(indent_depth("1a2"), 1);
        assert_eq!(indent_depth(" 4 . 5 "), 1);
    }

    #[test]
    fn non_ascii_digits_do_not_count() {
        assert_eq!(indent_depth("١.٢."), 0);
    }
}
