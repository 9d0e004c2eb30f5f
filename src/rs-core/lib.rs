mod adaptive;
#[cfg(target_arch = "wasm32")]
mod bindings;
mod controller;
mod error;
mod levels;
mod media;
mod media_element;
mod store;
#[cfg(test)]
mod testing;
mod utils;

pub use adaptive::{EncodedLevel, EngineProvider, StreamingEngine, AUTO_LEVEL};
#[cfg(target_arch = "wasm32")]
pub use bindings::{
    formatters::{JsLevelKind, JsQualityLevel},
    set_log_level, Hls, HlsProvider, HtmlVideoElement, LevelsObserver, VideoBackend,
};
pub use controller::{
    ControllerConfiguration, ControllerState, DeliveryPath, EventKind, SourceController,
};
pub use error::{ControllerError, SourceUrlError};
pub use levels::{
    abbreviate_number, level_name, LevelKind, QualityLevel, ADAPTIVE_AUTO_LEVEL_INDEX,
    NATIVE_LEVEL_INDEX,
};
pub use media::{MediaDescriptor, MediaSources};
pub use media_element::{MediaErrorCode, PlaybackElement};
pub use store::{Observable, SubscriptionId};
pub use utils::logger::{Logger, LoggerLevel};
pub use utils::url::escape_path;
