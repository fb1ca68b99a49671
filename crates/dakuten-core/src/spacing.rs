use unicode_segmentation::UnicodeSegmentation;

pub const HALFWIDTH_SPACE: &str = " ";
pub const FULLWIDTH_SPACE: &str = "\u{3000}";

/// Join the grapheme clusters of `text` with `sep`.
pub fn insert_spaces(text: &str, sep: &str) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    graphemes.join(sep)
}

pub fn insert_halfwidth_spaces(text: &str) -> String {
    insert_spaces(text, HALFWIDTH_SPACE)
}

pub fn insert_fullwidth_spaces(text: &str) -> String {
    insert_spaces(text, FULLWIDTH_SPACE)
}
