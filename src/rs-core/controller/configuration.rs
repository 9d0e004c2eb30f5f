const DEFAULT_API_ROOT: &str = "/api/media";
const DEFAULT_MANIFEST_NAME: &str = "manifest.m3u8";

/// Configuration on which a `SourceController` relies.
///
/// It is read once, when the `SourceController` is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfiguration {
    /// Root under which both the `native/` and `hls/` media routes are served.
    ///
    /// Either relative to the page's origin (`/api/media`) or absolute.
    pub api_root: String,

    /// Last path segment of the HLS multivariant playlist's URL.
    pub manifest_name: String,

    /// Index of the level selected right after creation.
    ///
    /// Only `NATIVE_LEVEL_INDEX` and `ADAPTIVE_AUTO_LEVEL_INDEX` exist at that time.
    /// With `None`, nothing is played until `select` is called.
    pub initial_level: Option<usize>,

    /// If `true`, a direct source whose format is reported as not supported by the media
    /// element is replaced by automatic adaptive streaming.
    pub fallback_on_unsupported_source: bool,

    /// If `true`, a direct source which loads without error but decodes to an empty frame,
    /// while the media is known to contain video, is replaced by automatic adaptive streaming.
    pub fallback_on_empty_frame: bool,
}

impl Default for ControllerConfiguration {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_owned(),
            manifest_name: DEFAULT_MANIFEST_NAME.to_owned(),
            initial_level: None,
            fallback_on_unsupported_source: true,
            fallback_on_empty_frame: true,
        }
    }
}
