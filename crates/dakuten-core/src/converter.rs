//! The closed set of text conversions offered to users.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::kana::Voicing;
use crate::settings::settings;
use crate::spacing::{insert_fullwidth_spaces, insert_halfwidth_spaces};
use crate::transliterate::{transliterate, MarkStyle, Segmentation};

#[derive(Debug, thiserror::Error)]
pub enum ConverterError {
    #[error("unknown converter: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Converter {
    CombiningDakuon,
    CombiningHandakuon,
    HalfwidthSpaces,
    FullwidthSpaces,
    ExternalDakuon,
    ExternalHandakuon,
}

impl Converter {
    /// Declaration order, which is also the default presentation order.
    pub const ALL: [Converter; 6] = [
        Converter::CombiningDakuon,
        Converter::CombiningHandakuon,
        Converter::HalfwidthSpaces,
        Converter::FullwidthSpaces,
        Converter::ExternalDakuon,
        Converter::ExternalHandakuon,
    ];

    /// Short stable id, used as the inline result id suffix and in settings.
    pub fn id(self) -> &'static str {
        match self {
            Converter::CombiningDakuon => "dc",
            Converter::CombiningHandakuon => "hc",
            Converter::HalfwidthSpaces => "hs",
            Converter::FullwidthSpaces => "fs",
            Converter::ExternalDakuon => "de",
            Converter::ExternalHandakuon => "he",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Converter::CombiningDakuon => "combining-dakuon",
            Converter::CombiningHandakuon => "combining-handakuon",
            Converter::HalfwidthSpaces => "halfwidth-spaces",
            Converter::FullwidthSpaces => "fullwidth-spaces",
            Converter::ExternalDakuon => "external-dakuon",
            Converter::ExternalHandakuon => "external-handakuon",
        }
    }

    /// Human-readable title shown next to the result.
    pub fn label(self) -> &'static str {
        match self {
            Converter::CombiningDakuon => "濁点（結合文字）",
            Converter::CombiningHandakuon => "半濁点（結合文字）",
            Converter::HalfwidthSpaces => "Spaces",
            Converter::FullwidthSpaces => "Fullwidth Spaces",
            Converter::ExternalDakuon => "濁点",
            Converter::ExternalHandakuon => "半濁点",
        }
    }

    /// Voicing and mark style, for the four transliterating converters.
    pub fn transliteration(self) -> Option<(Voicing, MarkStyle)> {
        match self {
            Converter::CombiningDakuon => Some((Voicing::Dakuon, MarkStyle::Combining)),
            Converter::CombiningHandakuon => Some((Voicing::Handakuon, MarkStyle::Combining)),
            Converter::ExternalDakuon => Some((Voicing::Dakuon, MarkStyle::External)),
            Converter::ExternalHandakuon => Some((Voicing::Handakuon, MarkStyle::External)),
            Converter::HalfwidthSpaces | Converter::FullwidthSpaces => None,
        }
    }

    /// Convert using the configured segmentation.
    pub fn apply(self, text: &str) -> String {
        self.apply_with(text, settings().engine.segmentation)
    }

    pub fn apply_with(self, text: &str, segmentation: Segmentation) -> String {
        match (self, self.transliteration()) {
            (_, Some((voicing, style))) => transliterate(text, voicing, style, segmentation),
            (Converter::FullwidthSpaces, None) => insert_fullwidth_spaces(text),
            (_, None) => insert_halfwidth_spaces(text),
        }
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Converter {
    type Err = ConverterError;

    /// Accepts either the short id (`dc`) or the name (`combining-dakuon`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Converter::ALL
            .into_iter()
            .find(|c| c.id() == s || c.name() == s)
            .ok_or_else(|| ConverterError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Converter {
    type Error = ConverterError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Converter> for &'static str {
    fn from(c: Converter) -> Self {
        c.id()
    }
}
