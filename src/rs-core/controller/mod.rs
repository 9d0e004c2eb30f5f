use std::collections::HashMap;

use crate::{
    adaptive::StreamingEngine,
    levels::{LevelKind, QualityLevel},
    media::{MediaDescriptor, MediaSources},
    media_element::PlaybackElement,
    store::Observable,
};

mod api;
mod configuration;
mod core;
mod event_listeners;


pub use configuration::ControllerConfiguration;
pub use event_listeners::EventKind;

/// Handler called when an `EventKind` is dispatched to a `SourceController`.
type EventHandler<E, S> = fn(&mut SourceController<E, S>);

/// Decides which source feeds a media element: the media's direct URL or a streaming engine
/// loading its HLS manifest.
///
/// It publishes the list of qualities the user can choose from alongside the index of the
/// chosen one, and switches by itself to adaptive streaming when the direct source cannot be
/// decoded.
///
/// One `SourceController` exists per playback session. It exclusively owns both the media
/// element and the streaming engine and must be torn down through `detach` (or dropped) once
/// that session ends, to stop the engine's background activity.
pub struct SourceController<E: PlaybackElement, S: StreamingEngine<E>> {
    /// Element on which the media is played.
    element: E,

    /// Media currently played.
    descriptor: MediaDescriptor,

    /// Direct and HLS URLs computed from `descriptor`.
    sources: MediaSources,

    config: ControllerConfiguration,

    /// Streaming engine. `None` when the environment cannot run one or after teardown.
    engine: Option<S>,

    /// `true` while `engine` is attached to `element`.
    engine_attached: bool,

    state: ControllerState,

    /// Handler registered for each event kind this controller listens to.
    handlers: HashMap<EventKind, EventHandler<E, S>>,

    /// Index in `quality_levels` of the selected level, `None` until a first selection.
    current_level_index: Observable<Option<usize>>,

    /// Levels that can currently be selected.
    quality_levels: Observable<Vec<QualityLevel>>,
}

/// How the media element is currently fed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryPath {
    /// The element plays the media's direct URL.
    Native,
    /// The element plays the HLS manifest, through the streaming engine when there is one.
    Adaptive,
}

/// Identify the state a `SourceController` is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing was selected yet.
    Unattached,

    /// The direct source is played.
    Native,

    /// The HLS manifest is played, the engine choosing its level by itself.
    AdaptiveAuto,

    /// The HLS manifest is played, locked to the encoded level at that index.
    AdaptiveManual(usize),

    /// `detach` has been called. No selection and no event will be considered anymore.
    TornDown,
}

impl ControllerState {
    /// Returns the `DeliveryPath` linked to that state, `None` if nothing is played.
    pub fn delivery_path(&self) -> Option<DeliveryPath> {
        match self {
            ControllerState::Native => Some(DeliveryPath::Native),
            ControllerState::AdaptiveAuto | ControllerState::AdaptiveManual(_) => {
                Some(DeliveryPath::Adaptive)
            }
            ControllerState::Unattached | ControllerState::TornDown => None,
        }
    }

    /// Returns the `LevelKind` whose selection lead to that state, if one.
    pub(crate) fn level_kind(&self) -> Option<LevelKind> {
        match self {
            ControllerState::Native => Some(LevelKind::NativeDirect),
            ControllerState::AdaptiveAuto => Some(LevelKind::AdaptiveAuto),
            ControllerState::AdaptiveManual(idx) => Some(LevelKind::AdaptiveManual(*idx)),
            ControllerState::Unattached | ControllerState::TornDown => None,
        }
    }
}

impl From<LevelKind> for ControllerState {
    fn from(kind: LevelKind) -> Self {
        match kind {
            LevelKind::NativeDirect => ControllerState::Native,
            LevelKind::AdaptiveAuto => ControllerState::AdaptiveAuto,
            LevelKind::AdaptiveManual(idx) => ControllerState::AdaptiveManual(idx),
        }
    }
}

impl<E: PlaybackElement, S: StreamingEngine<E>> Drop for SourceController<E, S> {
    fn drop(&mut self) {
        self.detach();
    }
}
