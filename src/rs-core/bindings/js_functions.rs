use wasm_bindgen::prelude::*;

use crate::{
    adaptive::{EncodedLevel, EngineProvider, StreamingEngine},
    media_element::{MediaErrorCode, PlaybackElement},
};

/// # js_functions
///
/// This file lists all JavaScript functions and objects used from Rust, as well as the
/// implementations of the playback traits relying on them.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // The `<video>` element on which the media is played.
    #[wasm_bindgen(js_name = HTMLVideoElement)]
    #[derive(Clone, Debug)]
    pub type HtmlVideoElement;

    #[wasm_bindgen(method, getter, js_name = currentTime)]
    fn js_current_time(this: &HtmlVideoElement) -> f64;

    #[wasm_bindgen(method, setter, js_name = currentTime)]
    fn js_set_current_time(this: &HtmlVideoElement, position: f64);

    #[wasm_bindgen(method, getter, js_name = src)]
    fn js_src(this: &HtmlVideoElement) -> String;

    #[wasm_bindgen(method, setter, js_name = src)]
    fn js_set_src(this: &HtmlVideoElement, url: &str);

    #[wasm_bindgen(method, getter, js_name = videoWidth)]
    fn js_video_width(this: &HtmlVideoElement) -> u32;

    #[wasm_bindgen(method, getter, js_name = videoHeight)]
    fn js_video_height(this: &HtmlVideoElement) -> u32;

    #[wasm_bindgen(method, getter, js_name = error)]
    fn js_error(this: &HtmlVideoElement) -> Option<JsMediaError>;

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub(crate) fn add_event_listener(
        this: &HtmlVideoElement,
        event: &str,
        listener: &Closure<dyn FnMut()>,
    );

    #[wasm_bindgen(method, js_name = removeEventListener)]
    pub(crate) fn remove_event_listener(
        this: &HtmlVideoElement,
        event: &str,
        listener: &Closure<dyn FnMut()>,
    );

    // `MediaError` object set on a media element after an error.
    #[wasm_bindgen(js_name = MediaError)]
    type JsMediaError;

    #[wasm_bindgen(method, getter)]
    fn code(this: &JsMediaError) -> u16;

    // hls.js instance, expected to be exposed globally as `Hls`.
    #[derive(Clone, Debug)]
    pub type Hls;

    // Throws if hls.js is not loaded on the page.
    #[wasm_bindgen(static_method_of = Hls, js_name = isSupported, catch)]
    fn js_is_supported() -> Result<bool, JsValue>;

    #[wasm_bindgen(constructor)]
    fn new() -> Hls;

    #[wasm_bindgen(method, js_name = loadSource)]
    fn js_load_source(this: &Hls, url: &str);

    #[wasm_bindgen(method, js_name = attachMedia)]
    fn js_attach_media(this: &Hls, media: &HtmlVideoElement);

    #[wasm_bindgen(method, js_name = detachMedia)]
    fn js_detach_media(this: &Hls);

    #[wasm_bindgen(method, js_name = destroy)]
    fn js_destroy(this: &Hls);

    #[wasm_bindgen(method, getter, js_name = currentLevel)]
    fn js_current_level(this: &Hls) -> i32;

    #[wasm_bindgen(method, setter, js_name = currentLevel)]
    fn js_set_current_level(this: &Hls, level: i32);

    #[wasm_bindgen(method, getter, js_name = levels)]
    fn js_levels(this: &Hls) -> Option<Vec<JsValue>>;

    #[wasm_bindgen(method, js_name = on)]
    pub(crate) fn on(this: &Hls, event: &str, listener: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method, js_name = off)]
    pub(crate) fn off(this: &Hls, event: &str, listener: &Closure<dyn FnMut()>);

    // Entry of hls.js' `levels` array.
    type HlsLevel;

    #[wasm_bindgen(method, getter)]
    fn height(this: &HlsLevel) -> u32;

    #[wasm_bindgen(method, getter)]
    fn bitrate(this: &HlsLevel) -> f64;

    // Object given by the page, notified each time the levels or the selection change.
    #[derive(Clone, Debug)]
    pub type LevelsObserver;

    #[wasm_bindgen(method, js_name = onQualityLevels)]
    pub(crate) fn on_quality_levels(this: &LevelsObserver, levels: Vec<JsValue>);

    #[wasm_bindgen(method, js_name = onCurrentLevelIndex)]
    pub(crate) fn on_current_level_index(this: &LevelsObserver, index: i32);
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// hls.js event names, as found in `Hls.Events`.
pub(crate) const HLS_MANIFEST_PARSED: &str = "hlsManifestParsed";
pub(crate) const HLS_LEVEL_SWITCHED: &str = "hlsLevelSwitched";

impl PlaybackElement for HtmlVideoElement {
    fn current_time(&self) -> f64 {
        self.js_current_time()
    }

    fn set_current_time(&mut self, position: f64) {
        self.js_set_current_time(position)
    }

    fn src(&self) -> String {
        self.js_src()
    }

    fn set_src(&mut self, url: &str) {
        self.js_set_src(url)
    }

    fn video_width(&self) -> u32 {
        self.js_video_width()
    }

    fn video_height(&self) -> u32 {
        self.js_video_height()
    }

    fn error_code(&self) -> Option<MediaErrorCode> {
        self.js_error().map(|err| MediaErrorCode::from(err.code()))
    }
}

impl StreamingEngine<HtmlVideoElement> for Hls {
    fn load_source(&mut self, url: &str) {
        self.js_load_source(url)
    }

    fn attach_media(&mut self, element: &HtmlVideoElement) {
        self.js_attach_media(element)
    }

    fn detach_media(&mut self) {
        self.js_detach_media()
    }

    fn destroy(&mut self) {
        self.js_destroy()
    }

    fn current_level(&self) -> i32 {
        self.js_current_level()
    }

    fn set_current_level(&mut self, level: i32) {
        self.js_set_current_level(level)
    }

    fn levels(&self) -> Vec<EncodedLevel> {
        self.js_levels()
            .unwrap_or_default()
            .into_iter()
            .map(|val| {
                let level: HlsLevel = val.unchecked_into();
                EncodedLevel::new(level.height(), level.bitrate().max(0.) as u64)
            })
            .collect()
    }
}

/// Creates hls.js instances when hls.js is loaded and Media Source Extensions are available.
pub struct HlsProvider;

impl EngineProvider<HtmlVideoElement> for HlsProvider {
    type Engine = Hls;

    fn is_supported(&self) -> bool {
        Hls::js_is_supported().unwrap_or(false)
    }

    fn create(&self) -> Hls {
        Hls::new()
    }
}
