use std::cmp::Ordering;

use crate::adaptive::EncodedLevel;

/// Index of the `NativeDirect` entry in every published level list.
pub const NATIVE_LEVEL_INDEX: usize = 0;

/// Index of the `AdaptiveAuto` entry in every published level list.
pub const ADAPTIVE_AUTO_LEVEL_INDEX: usize = 1;

const NUMBER_SUFFIXES: [&str; 7] = ["", "k", "M", "G", "T", "P", "E"];

/// What selecting a `QualityLevel` actually does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    /// Play the direct source, at its only quality.
    NativeDirect,
    /// Play through the streaming engine, letting it pick the level.
    AdaptiveAuto,
    /// Play through the streaming engine, locked to the encoded level at that index.
    AdaptiveManual(usize),
}

impl LevelKind {
    /// Returns `true` if that kind is played through the HLS manifest.
    pub fn is_adaptive(&self) -> bool {
        !matches!(self, LevelKind::NativeDirect)
    }
}

/// Entry of the list of qualities offered to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualityLevel {
    /// Identifier, unique inside one generated list.
    pub id: usize,
    pub kind: LevelKind,
    pub display_name: String,
    /// Supplementary information, such as the level an automatic selection settled on.
    pub description: Option<String>,
}

impl QualityLevel {
    /// Index of the encoded level in the streaming engine's list, only for manual levels.
    pub fn encoded_level_index(&self) -> Option<usize> {
        match self.kind {
            LevelKind::AdaptiveManual(idx) => Some(idx),
            _ => None,
        }
    }
}

/// Produce the list of selectable levels.
///
/// The list always starts with the `NativeDirect` entry, followed by `AdaptiveAuto`, then by
/// every encoded level from the highest quality to the lowest.
///
/// `auto_description` is set as the description of the `AdaptiveAuto` entry.
pub(crate) fn build_levels(
    encoded: &[EncodedLevel],
    auto_description: Option<String>,
) -> Vec<QualityLevel> {
    let mut ret = Vec::with_capacity(encoded.len() + 2);
    ret.push(QualityLevel {
        id: NATIVE_LEVEL_INDEX,
        kind: LevelKind::NativeDirect,
        display_name: "Native".to_owned(),
        description: None,
    });
    ret.push(QualityLevel {
        id: ADAPTIVE_AUTO_LEVEL_INDEX,
        kind: LevelKind::AdaptiveAuto,
        display_name: "Auto".to_owned(),
        description: auto_description,
    });

    let mut sorted: Vec<(usize, &EncodedLevel)> = encoded.iter().enumerate().collect();
    sorted.sort_by(|(_, a), (_, b)| compare_quality(b, a));
    for (encoded_idx, level) in sorted {
        ret.push(QualityLevel {
            id: ret.len(),
            kind: LevelKind::AdaptiveManual(encoded_idx),
            display_name: level_name(level),
            description: None,
        });
    }
    ret
}

fn compare_quality(a: &EncodedLevel, b: &EncodedLevel) -> Ordering {
    a.height
        .cmp(&b.height)
        .then_with(|| a.bitrate.cmp(&b.bitrate))
}

/// Name shown for an encoded level, e.g. `"1080p - 4M"`.
pub fn level_name(level: &EncodedLevel) -> String {
    format!("{}p - {}", level.height, abbreviate_number(level.bitrate))
}

/// Express `val` in its biggest 1000-based unit, without decimal.
///
/// `4_000_000` gives `"4M"`, `1_999` gives `"1k"`, `999` gives `"999"`.
pub fn abbreviate_number(val: u64) -> String {
    let mut val = val;
    let mut suffix_idx = 0;
    while val >= 1000 && suffix_idx < NUMBER_SUFFIXES.len() - 1 {
        val /= 1000;
        suffix_idx += 1;
    }
    format!("{}{}", val, NUMBER_SUFFIXES[suffix_idx])
}
