/// Value of the `code` attribute of a media element's `MediaError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaErrorCode {
    /// `MEDIA_ERR_ABORTED`: fetching was aborted on request.
    Aborted,
    /// `MEDIA_ERR_NETWORK`: a network error stopped fetching.
    Network,
    /// `MEDIA_ERR_DECODE`: an error happened while decoding.
    Decode,
    /// `MEDIA_ERR_SRC_NOT_SUPPORTED`: the source's format or type cannot be played.
    SrcNotSupported,
    /// Any code not defined by the HTML specification.
    Unknown(u16),
}

impl From<u16> for MediaErrorCode {
    fn from(code: u16) -> Self {
        match code {
            1 => MediaErrorCode::Aborted,
            2 => MediaErrorCode::Network,
            3 => MediaErrorCode::Decode,
            4 => MediaErrorCode::SrcNotSupported,
            x => MediaErrorCode::Unknown(x),
        }
    }
}

/// The media element a `SourceController` plays on, e.g. an `HTMLVideoElement`.
///
/// A given element must be driven by one `SourceController` at most.
pub trait PlaybackElement {
    /// Current playback position, in seconds.
    fn current_time(&self) -> f64;

    /// Move the playback position, in seconds.
    fn set_current_time(&mut self, position: f64);

    /// Currently set source URL. Empty if none is set.
    fn src(&self) -> String;

    /// Set the source URL directly, an empty string removing it.
    fn set_src(&mut self, url: &str);

    /// Intrinsic width of the decoded video, `0` when unknown or absent.
    fn video_width(&self) -> u32;

    /// Intrinsic height of the decoded video, `0` when unknown or absent.
    fn video_height(&self) -> u32;

    /// Code of the last error reported by the element, if any.
    fn error_code(&self) -> Option<MediaErrorCode>;
}
