/// Value of `current_level` asking the engine to choose its level by itself.
pub const AUTO_LEVEL: i32 = -1;

/// A quality level as encoded in the HLS multivariant playlist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedLevel {
    /// Vertical resolution, in pixels.
    pub height: u32,
    /// Peak bitrate, in bits per second.
    pub bitrate: u64,
}

impl EncodedLevel {
    pub const fn new(height: u32, bitrate: u64) -> Self {
        Self { height, bitrate }
    }
}

/// Adaptive-bitrate streaming client (e.g. hls.js) feeding a `PlaybackElement` of type `E`.
///
/// Manifest and segment loading happen asynchronously inside the engine. Their progress is
/// only observed through the `ManifestParsed` and `LevelSwitched` events given back to the
/// `SourceController`.
pub trait StreamingEngine<E> {
    /// Begin loading the multivariant playlist at `url`.
    fn load_source(&mut self, url: &str);

    /// Bind the engine to `element`, making it the element's only media source.
    fn attach_media(&mut self, element: &E);

    /// Unbind the engine from the element it is attached to, if any.
    fn detach_media(&mut self);

    /// Stop every loader and worker the engine created. The engine is unusable afterwards.
    fn destroy(&mut self);

    /// Index in `levels` of the level currently played, or `AUTO_LEVEL` if unknown.
    fn current_level(&self) -> i32;

    /// Lock the engine to the level at index `level` of `levels`, or let it choose by itself
    /// with `AUTO_LEVEL`.
    fn set_current_level(&mut self, level: i32);

    /// Levels announced by the last parsed manifest, in the engine's own order.
    ///
    /// Empty until the manifest has been parsed.
    fn levels(&self) -> Vec<EncodedLevel>;
}

/// Creates `StreamingEngine` instances when the current environment can run them.
pub trait EngineProvider<E> {
    type Engine: StreamingEngine<E>;

    /// Returns `true` if an engine can be created in the current environment.
    ///
    /// Has no side effect.
    fn is_supported(&self) -> bool;

    /// Create a new, unattached engine.
    fn create(&self) -> Self::Engine;
}
