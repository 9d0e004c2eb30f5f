use std::collections::HashMap;

use crate::{
    adaptive::{EngineProvider, StreamingEngine},
    error::ControllerError,
    levels::{build_levels, QualityLevel},
    media::{MediaDescriptor, MediaSources},
    media_element::PlaybackElement,
    store::{Observable, SubscriptionId},
    Logger,
};

use super::{ControllerConfiguration, ControllerState, DeliveryPath, SourceController};

/// Methods exposed to the user interface and to the code owning the playback session.
///
/// Events coming from the media element and the streaming engine are given through
/// `handle_event`, defined alongside the corresponding handlers.
impl<E: PlaybackElement, S: StreamingEngine<E>> SourceController<E, S> {
    /// Create a new `SourceController` playing the media described by `descriptor` on
    /// `element`.
    ///
    /// If `provider` reports that adaptive streaming is supported, an engine is created and
    /// starts loading the media's manifest right away, without waiting for it.
    ///
    /// Unless `config.initial_level` is set, nothing is played until `select` is called.
    pub fn new<P>(
        element: E,
        descriptor: MediaDescriptor,
        provider: &P,
        config: ControllerConfiguration,
    ) -> Result<Self, ControllerError>
    where
        P: EngineProvider<E, Engine = S>,
    {
        let sources =
            MediaSources::try_new(&descriptor, &config.api_root, &config.manifest_name)?;
        let initial_levels = build_levels(&[], None);
        if let Some(index) = config.initial_level {
            if index >= initial_levels.len() {
                return Err(ControllerError::InvalidInitialLevel {
                    index,
                    len: initial_levels.len(),
                });
            }
        }

        let engine = if provider.is_supported() {
            Logger::lazy_info(&|| format!("SC: Loading manifest {}", sources.manifest_url()));
            let mut engine = provider.create();
            engine.load_source(sources.manifest_url());
            Some(engine)
        } else {
            Logger::info("SC: Adaptive streaming not supported in this environment");
            None
        };

        let initial_level = config.initial_level;
        let mut controller = Self {
            element,
            descriptor,
            sources,
            config,
            engine,
            engine_attached: false,
            state: ControllerState::Unattached,
            handlers: HashMap::new(),
            current_level_index: Observable::new(None),
            quality_levels: Observable::new(initial_levels),
        };
        controller.register_handlers();

        if let Some(index) = initial_level {
            controller.select(index);
        }
        Ok(controller)
    }

    /// Play the level at `level_index` in the currently published list.
    ///
    /// The playback position is kept when switching between the direct source and the
    /// manifest. Selecting the level already played does nothing.
    ///
    /// Ignored once the `SourceController` has been torn down.
    ///
    /// # Panics
    ///
    /// Panics if `level_index` is outside of the published list of levels.
    pub fn select(&mut self, level_index: usize) {
        if self.state == ControllerState::TornDown {
            Logger::warn("SC: Level selected after teardown, ignoring");
            return;
        }
        self.switch_level(level_index);
    }

    /// Stop playing through the streaming engine and free all its resources.
    ///
    /// Events received afterwards are ignored and subscribers are not notified anymore.
    /// Calling it more than once has no effect.
    pub fn detach(&mut self) {
        if self.state == ControllerState::TornDown {
            return;
        }
        Logger::info("SC: Tearing down");
        self.handlers.clear();
        if let Some(mut engine) = self.engine.take() {
            if self.engine_attached {
                engine.detach_media();
            }
            engine.destroy();
        }
        self.engine_attached = false;
        self.state = ControllerState::TornDown;
        self.current_level_index.clear_subscribers();
        self.quality_levels.clear_subscribers();
    }

    /// Index of the selected level in `quality_levels`, `None` before any selection.
    pub fn current_level_index(&self) -> Option<usize> {
        self.current_level_index.get()
    }

    /// Levels that can currently be selected.
    pub fn quality_levels(&self) -> &[QualityLevel] {
        self.quality_levels.get_ref()
    }

    /// Call `callback` with the new index each time the selection is published.
    pub fn subscribe_current_level_index(
        &mut self,
        callback: impl FnMut(&Option<usize>) + 'static,
    ) -> SubscriptionId {
        self.current_level_index.subscribe(callback)
    }

    /// Call `callback` with the new list each time the levels are published.
    pub fn subscribe_quality_levels(
        &mut self,
        callback: impl FnMut(&Vec<QualityLevel>) + 'static,
    ) -> SubscriptionId {
        self.quality_levels.subscribe(callback)
    }

    pub fn unsubscribe_current_level_index(&mut self, id: SubscriptionId) -> bool {
        self.current_level_index.unsubscribe(id)
    }

    pub fn unsubscribe_quality_levels(&mut self, id: SubscriptionId) -> bool {
        self.quality_levels.unsubscribe(id)
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// `DeliveryPath` currently feeding the media element, `None` if nothing is played.
    pub fn delivery_path(&self) -> Option<DeliveryPath> {
        self.state.delivery_path()
    }

    pub fn descriptor(&self) -> &MediaDescriptor {
        &self.descriptor
    }

    /// The streaming engine, if the environment supports one and teardown did not happen yet.
    #[cfg(any(test, target_arch = "wasm32"))]
    pub(crate) fn engine(&self) -> Option<&S> {
        self.engine.as_ref()
    }
}
