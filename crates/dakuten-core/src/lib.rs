pub mod converter;
pub mod kana;
pub mod report;
pub mod settings;
pub mod spacing;
pub mod transliterate;
pub mod unicode;

pub use converter::{Converter, ConverterError};
pub use transliterate::{
    to_combining_dakuon, to_combining_handakuon, to_external_dakuon, to_external_handakuon,
    MarkStyle, Segmentation,
};
