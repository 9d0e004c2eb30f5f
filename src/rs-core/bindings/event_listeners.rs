use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use wasm_bindgen::prelude::*;

use crate::{
    controller::{ControllerConfiguration, EventKind, SourceController},
    media::MediaDescriptor,
    utils::logger::LoggerLevel,
    Logger,
};

use super::{
    formatters::{format_level_index_for_js, format_levels_for_js},
    js_functions::{Hls, HlsProvider, HtmlVideoElement, LevelsObserver},
    HLS_LEVEL_SWITCHED, HLS_MANIFEST_PARSED,
};

type BrowserController = SourceController<HtmlVideoElement, Hls>;

/// Listener registered on the media element or on hls.js, removed on `detach`.
struct RegisteredListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

/// Plays one media on a `<video>` element, from its direct URL or through hls.js.
///
/// The `LevelsObserver` given on creation is called each time the list of selectable
/// levels or the selected level's index changes.
#[wasm_bindgen]
pub struct VideoBackend {
    controller: Rc<RefCell<BrowserController>>,
    element: HtmlVideoElement,
    engine: Option<Hls>,
    element_listeners: Vec<RegisteredListener>,
    engine_listeners: Vec<RegisteredListener>,
}

#[wasm_bindgen]
impl VideoBackend {
    /// Create a `VideoBackend` and start playing the direct source of the media at
    /// `full_path`.
    ///
    /// # Arguments
    ///
    /// * `element` - The `<video>` element on which the media will be played.
    ///
    /// * `full_path` - Path of the media in the library, as used in the media API.
    ///
    /// * `has_video` - `true` if the library knows that media to have a video track.
    ///
    /// * `observer` - Object notified of level changes.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: HtmlVideoElement,
        full_path: String,
        has_video: bool,
        observer: LevelsObserver,
    ) -> Result<VideoBackend, JsValue> {
        let descriptor = MediaDescriptor::new(full_path, has_video);
        let controller = SourceController::new(
            element.clone(),
            descriptor,
            &HlsProvider,
            ControllerConfiguration::default(),
        )
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let engine = controller.engine().cloned();
        let controller = Rc::new(RefCell::new(controller));

        {
            let mut ctrl = controller.borrow_mut();
            let levels_observer = observer.clone();
            ctrl.subscribe_quality_levels(move |levels| {
                levels_observer.on_quality_levels(format_levels_for_js(levels));
            });
            ctrl.subscribe_current_level_index(move |index| {
                observer.on_current_level_index(format_level_index_for_js(*index));
            });
        }

        let mut backend = VideoBackend {
            controller,
            element,
            engine,
            element_listeners: vec![],
            engine_listeners: vec![],
        };
        backend.add_listeners();

        // Selected once the observer is subscribed, so it receives the first publication.
        backend.select(crate::levels::NATIVE_LEVEL_INDEX)?;
        Ok(backend)
    }

    /// Select the level at `index` in the list last given to the `LevelsObserver`.
    pub fn select(&mut self, index: usize) -> Result<(), JsValue> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("VB: cannot select a level from a level update"))?;
        let level_count = controller.quality_levels().len();
        if index >= level_count {
            return Err(JsValue::from_str(&format!(
                "VB: no level at index {index} ({level_count} levels)"
            )));
        }
        controller.select(index);
        Ok(())
    }

    /// Stop playback, remove every listener and destroy the hls.js instance if one.
    ///
    /// Nothing is done if it was already detached.
    pub fn detach(&mut self) {
        for listener in self.element_listeners.drain(..) {
            self.element
                .remove_event_listener(listener.event, &listener.callback);
        }
        if let Some(engine) = self.engine.take() {
            for listener in self.engine_listeners.drain(..) {
                engine.off(listener.event, &listener.callback);
            }
        }
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.detach(),
            Err(_) => Logger::warn("VB: Cannot detach while the controller is busy"),
        }
    }

    /// Index of the selected level, `-1` if none is.
    #[wasm_bindgen(js_name = currentLevelIndex)]
    pub fn current_level_index(&self) -> i32 {
        self.controller
            .try_borrow()
            .map_or(-1, |ctrl| format_level_index_for_js(ctrl.current_level_index()))
    }
}

impl VideoBackend {
    fn add_listeners(&mut self) {
        for (event, kind) in [
            ("error", EventKind::DecodeError),
            ("loadeddata", EventKind::LoadedData),
        ] {
            let callback = event_callback(Rc::downgrade(&self.controller), kind);
            self.element.add_event_listener(event, &callback);
            self.element_listeners
                .push(RegisteredListener { event, callback });
        }

        if let Some(engine) = self.engine.as_ref() {
            for (event, kind) in [
                (HLS_MANIFEST_PARSED, EventKind::ManifestParsed),
                (HLS_LEVEL_SWITCHED, EventKind::LevelSwitched),
            ] {
                let callback = event_callback(Rc::downgrade(&self.controller), kind);
                engine.on(event, &callback);
                self.engine_listeners
                    .push(RegisteredListener { event, callback });
            }
        }
    }
}

impl Drop for VideoBackend {
    fn drop(&mut self) {
        self.detach();
    }
}

fn event_callback(
    controller: Weak<RefCell<BrowserController>>,
    kind: EventKind,
) -> Closure<dyn FnMut()> {
    Closure::new(move || {
        let Some(controller) = controller.upgrade() else {
            return;
        };
        // Events synchronously triggered by the controller's own actions land here
        match controller.try_borrow_mut() {
            Ok(mut ctrl) => ctrl.handle_event(kind),
            Err(_) => Logger::lazy_warn(&|| format!("VB: Dropping re-entrant {kind:?} event")),
        };
    })
}

/// Update the maximum level of logs emitted, from `0` (no log) to `4` (debug logs).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: u8) {
    Logger::set_logger_level(LoggerLevel::from(level));
}
