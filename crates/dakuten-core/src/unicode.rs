//! Character-level Unicode classification used by the transliteration pass.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use unicode_width::UnicodeWidthChar;

/// U+309B KATAKANA-HIRAGANA VOICED SOUND MARK
pub const FULLWIDTH_DAKUTEN: char = '\u{309B}';
/// U+3099 COMBINING KATAKANA-HIRAGANA VOICED SOUND MARK
pub const COMBINING_DAKUTEN: char = '\u{3099}';
/// U+FF9E HALFWIDTH KATAKANA VOICED SOUND MARK
pub const HALFWIDTH_DAKUTEN: char = '\u{FF9E}';

/// U+309C KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK
pub const FULLWIDTH_HANDAKUTEN: char = '\u{309C}';
/// U+309A COMBINING KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK
pub const COMBINING_HANDAKUTEN: char = '\u{309A}';
/// U+FF9F HALFWIDTH KATAKANA SEMI-VOICED SOUND MARK
pub const HALFWIDTH_HANDAKUTEN: char = '\u{FF9F}';

/// True for any of the six voicing marks, spacing or combining.
pub fn is_voicing_mark(c: char) -> bool {
    matches!(
        c,
        FULLWIDTH_DAKUTEN
            | COMBINING_DAKUTEN
            | HALFWIDTH_DAKUTEN
            | FULLWIDTH_HANDAKUTEN
            | COMBINING_HANDAKUTEN
            | HALFWIDTH_HANDAKUTEN
    )
}

/// East Asian Fullwidth or Wide.
///
/// `unicode-width` reports two columns for printable W/F characters, but
/// gives zero columns to the W/F code points that are default-ignorable or
/// nonspacing (fillers, ideographic tone marks). Those are listed here so the
/// property, not the column count, decides.
pub fn is_wide(c: char) -> bool {
    c.width() == Some(2) || is_zero_column_wide(c)
}

/// East Asian Width W code points that occupy no column.
fn is_zero_column_wide(c: char) -> bool {
    matches!(
        c,
        '\u{115F}'
            | '\u{302A}'..='\u{302D}'
            | '\u{3099}'..='\u{309A}'
            | '\u{3164}'
            | '\u{16FE4}'
            | '\u{16FF0}'..='\u{16FF1}'
            | '\u{1F3FB}'..='\u{1F3FF}'
    )
}

/// Whether `c` renders as something visible: letters, marks, numbers,
/// punctuation, symbols and space separators.
///
/// Controls, format characters, line/paragraph separators, surrogates,
/// private-use and unassigned code points are not graphic.
pub fn is_graphic(c: char) -> bool {
    !matches!(
        c.general_category(),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voicing_marks() {
        for c in ['゛', '゜', 'ﾞ', 'ﾟ', '\u{3099}', '\u{309A}'] {
            assert!(is_voicing_mark(c), "{c:?}");
        }
        assert!(!is_voicing_mark('が'));
        assert!(!is_voicing_mark('"'));
    }

    #[test]
    fn test_width_classification() {
        assert!(is_wide('あ'));
        assert!(is_wide('ア'));
        assert!(is_wide('漢'));
        assert!(is_wide('。'));
        assert!(is_wide('　'));
        assert!(is_wide('Ａ'));
        assert!(!is_wide('A'));
        assert!(!is_wide(' '));
        assert!(!is_wide('ｱ'));
        assert!(!is_wide('!'));
        // Ambiguous width stays narrow
        assert!(!is_wide('α'));
    }

    #[test]
    fn test_zero_column_wide() {
        // HANGUL FILLER and IDEOGRAPHIC LEVEL TONE MARK are East Asian Wide
        // even though they take no column.
        assert!(is_wide('\u{3164}'));
        assert!(is_wide('\u{302A}'));
        assert!(is_wide('\u{302D}'));
        assert!(is_wide('\u{115F}'));
        assert!(!is_wide('\u{FFA0}'));
        assert!(!is_wide('\u{0301}'));
    }

    #[test]
    fn test_graphic_classification() {
        assert!(is_graphic('a'));
        assert!(is_graphic(' '));
        assert!(is_graphic('　'));
        assert!(is_graphic('\u{0301}'));
        assert!(is_graphic('あ'));
        assert!(!is_graphic('\n'));
        assert!(!is_graphic('\t'));
        assert!(!is_graphic('\u{7F}'));
        assert!(!is_graphic('\u{200B}'));
        assert!(!is_graphic('\u{FEFF}'));
        assert!(!is_graphic('\u{2028}'));
        assert!(!is_graphic('\u{E000}'));
        assert!(!is_graphic('\u{0378}'));
        assert!(!is_graphic('\u{0085}'));
    }
}
