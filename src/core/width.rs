//! Terminal column width of text.

use unicode_width::UnicodeWidthChar;

/// Visual width of `s`: East-Asian Wide and Fullwidth characters take two
/// columns, every other character one.
#[must_use]
pub fn string_width(s: &str) -> usize {
    s.chars()
        .map(|c| if c.width() == Some(2) { 2 } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_counts_one_per_char() {
        assert_eq!(string_width("AB"), 2);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn cjk_counts_two() {
        assert_eq!(string_width("三月"), 4);
        assert_eq!(string_width("2020年 三月"), 11);
    }

    #[test]
    fn fullwidth_forms_count_two() {
        assert_eq!(string_width("ＡＢ"), 4);
    }

    #[test]
    fn box_drawing_is_narrow() {
        assert_eq!(string_width("─│┼"), 3);
    }
}
