use crate::{
    adaptive::{EncodedLevel, StreamingEngine, AUTO_LEVEL},
    levels::{build_levels, level_name, LevelKind, ADAPTIVE_AUTO_LEVEL_INDEX},
    media_element::PlaybackElement,
    Logger,
};

use super::{ControllerState, DeliveryPath, SourceController};

impl<E: PlaybackElement, S: StreamingEngine<E>> SourceController<E, S> {
    /// Play the level at `level_index` in the published list, then publish the new list and
    /// selection.
    pub(super) fn switch_level(&mut self, level_index: usize) {
        let levels = self.quality_levels.get_ref();
        let kind = match levels.get(level_index) {
            Some(level) => level.kind,
            None => panic!(
                "SC: selected level {} while only {} levels are published",
                level_index,
                levels.len()
            ),
        };

        if self.state.level_kind() == Some(kind) {
            Logger::lazy_debug(&|| format!("SC: Level {level_index} already selected"));
            return;
        }
        Logger::lazy_info(&|| format!("SC: Switching to level {level_index} ({kind:?})"));

        match kind {
            LevelKind::NativeDirect => self.attach_native(),
            LevelKind::AdaptiveAuto => {
                self.attach_adaptive();
                if let Some(engine) = self.engine.as_mut() {
                    engine.set_current_level(AUTO_LEVEL);
                }
            }
            LevelKind::AdaptiveManual(encoded_idx) => {
                self.attach_adaptive();
                if let Some(engine) = self.engine.as_mut() {
                    engine.set_current_level(encoded_idx as i32);
                }
            }
        }
        self.state = ControllerState::from(kind);
        self.publish_levels();
        self.current_level_index.set(Some(level_index));
    }

    /// Replace the current source by the direct URL, detaching the engine if needed.
    fn attach_native(&mut self) {
        if self.delivery_path() == Some(DeliveryPath::Native) {
            return;
        }
        let position = self.playing_position();

        if self.engine_attached {
            if let Some(engine) = self.engine.as_mut() {
                engine.detach_media();
            }
            self.engine_attached = false;
        }
        self.element.set_src(self.sources.native_url());

        if let Some(position) = position {
            self.element.set_current_time(position);
        }
    }

    /// Replace the current source by the HLS manifest.
    ///
    /// The manifest is played through the streaming engine if there's one, or given directly
    /// to the media element otherwise.
    fn attach_adaptive(&mut self) {
        if self.delivery_path() == Some(DeliveryPath::Adaptive) {
            return;
        }
        let position = self.playing_position();

        match self.engine.as_mut() {
            Some(engine) => {
                self.element.set_src("");
                engine.attach_media(&self.element);
                self.engine_attached = true;
            }
            None => {
                Logger::debug("SC: No engine, giving the manifest to the media element");
                self.element.set_src(self.sources.manifest_url());
            }
        }

        if let Some(position) = position {
            self.element.set_current_time(position);
        }
    }

    /// Position to restore after a source change, `None` if no source was set.
    fn playing_position(&self) -> Option<f64> {
        self.delivery_path().map(|_| self.element.current_time())
    }

    /// Regenerate the list of levels from the engine's current state and publish it.
    pub(super) fn publish_levels(&mut self) {
        let encoded = self
            .engine
            .as_ref()
            .map(|engine| engine.levels())
            .unwrap_or_default();
        let auto_description = self.auto_level_description(&encoded);
        self.quality_levels.set(build_levels(&encoded, auto_description));
    }

    /// Name of the level the engine settled on, when it is left choosing by itself.
    fn auto_level_description(&self, encoded: &[EncodedLevel]) -> Option<String> {
        if self.state != ControllerState::AdaptiveAuto {
            return None;
        }
        let engine = self.engine.as_ref()?;
        let playing = usize::try_from(engine.current_level()).ok()?;
        encoded.get(playing).map(level_name)
    }

    /// Give up on the direct source and let the engine play the manifest.
    ///
    /// Callers only reach this on the `Native` path, which this leaves: a direct-source attempt
    /// falls back at most once.
    pub(super) fn fall_back_to_adaptive(&mut self, reason: &str) {
        Logger::lazy_warn(&|| format!("SC: Direct source failed ({reason}), switching to HLS"));
        self.switch_level(ADAPTIVE_AUTO_LEVEL_INDEX);
    }
}
