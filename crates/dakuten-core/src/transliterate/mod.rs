//! Detaches precomposed voicing marks from kana.
//!
//! Every unit of input (a grapheme cluster, or a code point under
//! [`Segmentation::CodePoint`]) goes through the same steps:
//!
//! 1. voicing marks already present are dropped;
//! 2. non-graphic units pass through untouched;
//! 3. a precomposed base is decomposed to its bare kana;
//! 4. in [`MarkStyle::Combining`], a bare kana with a precomposed form in the
//!    target table is recomposed and emitted without a separate mark;
//! 5. otherwise the unit is emitted followed by a mark, wide or halfwidth
//!    depending on the East Asian width of its base.
//!
//! No Unicode normalization is applied: only the voicing tables rewrite
//! characters, so compatibility ideographs and decomposed Latin letters come
//! out with their original code points.


use serde::Deserialize;
use tracing::debug_span;
use unicode_segmentation::UnicodeSegmentation;

use crate::kana::{decompose, Voicing};
use crate::unicode::{
    is_graphic, is_voicing_mark, is_wide, COMBINING_DAKUTEN, COMBINING_HANDAKUTEN,
    FULLWIDTH_DAKUTEN, FULLWIDTH_HANDAKUTEN, HALFWIDTH_DAKUTEN, HALFWIDTH_HANDAKUTEN,
};

/// How the detached mark is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkStyle {
    /// A spacing character after the base (゛ / ﾞ).
    External,
    /// A combining character (U+3099 / U+309A), or the precomposed form when
    /// one exists.
    Combining,
}

/// Unit of iteration over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segmentation {
    /// Extended grapheme clusters. A flag or ZWJ emoji sequence is one unit
    /// and receives one mark.
    #[default]
    Grapheme,
    /// Individual code points.
    CodePoint,
}

/// Mark characters used for one (voicing, style) combination.
#[derive(Debug, Clone, Copy)]
struct Marks {
    wide: char,
    narrow: char,
}

impl Marks {
    fn for_conversion(voicing: Voicing, style: MarkStyle) -> Self {
        // Halfwidth kana have no combining slot, so both styles share the
        // spacing halfwidth mark on the narrow side.
        match (voicing, style) {
            (Voicing::Dakuon, MarkStyle::External) => Marks {
                wide: FULLWIDTH_DAKUTEN,
                narrow: HALFWIDTH_DAKUTEN,
            },
            (Voicing::Dakuon, MarkStyle::Combining) => Marks {
                wide: COMBINING_DAKUTEN,
                narrow: HALFWIDTH_DAKUTEN,
            },
            (Voicing::Handakuon, MarkStyle::External) => Marks {
                wide: FULLWIDTH_HANDAKUTEN,
                narrow: HALFWIDTH_HANDAKUTEN,
            },
            (Voicing::Handakuon, MarkStyle::Combining) => Marks {
                wide: COMBINING_HANDAKUTEN,
                narrow: HALFWIDTH_HANDAKUTEN,
            },
        }
    }

    fn for_base(&self, base: char) -> char {
        if is_wide(base) {
            self.wide
        } else {
            self.narrow
        }
    }
}

/// Append a voicing mark to every unit of `text`.
pub fn transliterate(
    text: &str,
    voicing: Voicing,
    style: MarkStyle,
    segmentation: Segmentation,
) -> String {
    let _span = debug_span!(
        "transliterate",
        %voicing,
        ?style,
        ?segmentation,
        len = text.len()
    )
    .entered();

    let marks = Marks::for_conversion(voicing, style);
    // Most units gain one mark of at most three bytes.
    let mut out = String::with_capacity(text.len() * 2);
    match segmentation {
        Segmentation::Grapheme => {
            for unit in text.graphemes(true) {
                push_unit(&mut out, unit.chars(), voicing, style, marks);
            }
        }
        Segmentation::CodePoint => {
            for c in text.chars() {
                push_unit(&mut out, std::iter::once(c), voicing, style, marks);
            }
        }
    }
    out
}

fn push_unit(
    out: &mut String,
    unit: impl Iterator<Item = char>,
    voicing: Voicing,
    style: MarkStyle,
    marks: Marks,
) {
    let mut chars = unit.filter(|&c| !is_voicing_mark(c));
    let Some(first) = chars.next() else {
        // Nothing but marks: drop the whole unit.
        return;
    };

    if !is_graphic(first) {
        out.push(first);
        out.extend(chars);
        return;
    }

    let base = decompose(first);
    if style == MarkStyle::Combining {
        if let Some(composed) = voicing.table().forward(base) {
            out.push(composed);
            out.extend(chars);
            return;
        }
    }

    out.push(base);
    out.extend(chars);
    out.push(marks.for_base(base));
}

/// か → か゛, だ → た゛, A → Aﾞ
pub fn to_external_dakuon(text: &str) -> String {
    transliterate(text, Voicing::Dakuon, MarkStyle::External, Segmentation::default())
}

/// は → は゜, ば → は゜, A → Aﾟ
pub fn to_external_handakuon(text: &str) -> String {
    transliterate(
        text,
        Voicing::Handakuon,
        MarkStyle::External,
        Segmentation::default(),
    )
}

/// か → が, ね → ね\u{3099}, A → Aﾞ
pub fn to_combining_dakuon(text: &str) -> String {
    transliterate(
        text,
        Voicing::Dakuon,
        MarkStyle::Combining,
        Segmentation::default(),
    )
}

/// は → ぱ, か → か\u{309A}, A → Aﾟ
pub fn to_combining_handakuon(text: &str) -> String {
    transliterate(
        text,
        Voicing::Handakuon,
        MarkStyle::Combining,
        Segmentation::default(),
    )
}
