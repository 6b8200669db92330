//! Script-based language routing.
//!
//! A single Hiragana, Katakana or CJK Unified Ideograph anywhere in a string routes
//! the whole string to the Japanese extractor.

use std::ops::RangeInclusive;

pub(crate) const HIRAGANA: RangeInclusive<u32> = 0x3040..=0x309F;
pub(crate) const KATAKANA: RangeInclusive<u32> = 0x30A0..=0x30FF;
pub(crate) const CJK_UNIFIED: RangeInclusive<u32> = 0x4E00..=0x9FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Japanese,
}

#[inline]
pub fn is_japanese_char(c: char) -> bool {
    let cp = c as u32;
    HIRAGANA.contains(&cp) || KATAKANA.contains(&cp) || CJK_UNIFIED.contains(&cp)
}

pub fn contains_japanese(text: &str) -> bool {
    text.chars().any(is_japanese_char)
}

pub fn detect_language(text: &str) -> Language {
    if contains_japanese(text) {
        Language::Japanese
    } else {
        Language::English
    }
}
