use wasm_bindgen::prelude::*;

use crate::levels::{LevelKind, QualityLevel};

/// Kind of a `JsQualityLevel`, as communicated to JavaScript.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsLevelKind {
    Native = 0,
    HlsAuto = 1,
    HlsManual = 2,
}

/// Copy of a `QualityLevel` handed to JavaScript.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct JsQualityLevel {
    id: u32,
    kind: JsLevelKind,
    display_name: String,
    description: Option<String>,
    encoded_level_index: Option<u32>,
}

#[wasm_bindgen]
impl JsQualityLevel {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> JsLevelKind {
        self.kind
    }

    #[wasm_bindgen(getter, js_name = displayName)]
    pub fn display_name(&self) -> String {
        self.display_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> Option<String> {
        self.description.clone()
    }

    /// Index in hls.js' `levels` array. Only set for `HlsManual` levels.
    #[wasm_bindgen(getter, js_name = encodedLevelIndex)]
    pub fn encoded_level_index(&self) -> Option<u32> {
        self.encoded_level_index
    }
}

impl From<&QualityLevel> for JsQualityLevel {
    fn from(level: &QualityLevel) -> Self {
        let kind = match level.kind {
            LevelKind::NativeDirect => JsLevelKind::Native,
            LevelKind::AdaptiveAuto => JsLevelKind::HlsAuto,
            LevelKind::AdaptiveManual(_) => JsLevelKind::HlsManual,
        };
        Self {
            id: level.id as u32,
            kind,
            display_name: level.display_name.clone(),
            description: level.description.clone(),
            encoded_level_index: level.encoded_level_index().map(|idx| idx as u32),
        }
    }
}

pub(crate) fn format_levels_for_js(levels: &[QualityLevel]) -> Vec<JsValue> {
    levels
        .iter()
        .map(|level| JsValue::from(JsQualityLevel::from(level)))
        .collect()
}

/// `-1` stands for "nothing selected yet".
pub(crate) fn format_level_index_for_js(index: Option<usize>) -> i32 {
    index.map_or(-1, |idx| idx as i32)
}
