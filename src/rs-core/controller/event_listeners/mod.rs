use crate::{
    adaptive::StreamingEngine,
    media_element::{MediaErrorCode, PlaybackElement},
    Logger,
};

use super::{DeliveryPath, EventHandler, SourceController};

/// Events a `SourceController` reacts to.
///
/// None of them carry data: handlers read what they need from the media element or the
/// streaming engine when called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The streaming engine parsed the multivariant playlist: its `levels` are known.
    ManifestParsed,
    /// The streaming engine began playing another encoded level.
    LevelSwitched,
    /// The media element reported an error.
    DecodeError,
    /// The media element loaded the data of its first frame.
    LoadedData,
}

impl<E: PlaybackElement, S: StreamingEngine<E>> SourceController<E, S> {
    /// Dispatch an event from the media element or the streaming engine to its handler.
    ///
    /// Events this controller does not listen to, including every event received after
    /// teardown, are ignored.
    pub fn handle_event(&mut self, kind: EventKind) {
        match self.handlers.get(&kind).copied() {
            Some(handler) => handler(self),
            None => Logger::lazy_debug(&|| format!("SC: Ignoring {kind:?} event")),
        }
    }

    /// Returns `true` if events of that kind are currently handled.
    #[cfg(test)]
    pub(crate) fn listens_to(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Fill the dispatch table. Engine events are only listened to when there's an engine.
    pub(super) fn register_handlers(&mut self) {
        let mut table: Vec<(EventKind, EventHandler<E, S>)> = vec![
            (EventKind::DecodeError, Self::on_decode_error),
            (EventKind::LoadedData, Self::on_loaded_data),
        ];
        if self.engine.is_some() {
            table.push((EventKind::ManifestParsed, Self::on_manifest_parsed));
            table.push((EventKind::LevelSwitched, Self::on_level_switched));
        }
        self.handlers.extend(table);
    }

    fn on_manifest_parsed(&mut self) {
        Logger::debug("SC: Manifest parsed");
        self.publish_levels();
    }

    fn on_level_switched(&mut self) {
        Logger::debug("SC: Engine level switched");
        self.publish_levels();
    }

    /// Switch to adaptive streaming if the direct source's format cannot be played.
    ///
    /// Network and other errors are left to the media element.
    fn on_decode_error(&mut self) {
        if self.delivery_path() != Some(DeliveryPath::Native) {
            return;
        }
        match self.element.error_code() {
            Some(MediaErrorCode::SrcNotSupported) => {
                if self.config.fallback_on_unsupported_source {
                    self.fall_back_to_adaptive("format not supported");
                }
            }
            code => Logger::lazy_info(&|| format!("SC: Media element error: {code:?}")),
        }
    }

    /// Switch to adaptive streaming if the direct source loaded but decoded to an empty frame
    /// while a video track was expected.
    fn on_loaded_data(&mut self) {
        if !self.config.fallback_on_empty_frame
            || self.delivery_path() != Some(DeliveryPath::Native)
            || !self.descriptor.known_video_present()
        {
            return;
        }
        if self.element.video_width() == 0 || self.element.video_height() == 0 {
            self.fall_back_to_adaptive("empty video frame");
        }
    }
}
