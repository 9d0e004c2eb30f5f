use crate::{error::SourceUrlError, utils::url::join_escaped};

/// Describes the media file a `SourceController` plays.
///
/// It is given once at construction and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Path of the file inside its library, `/`-separated and not escaped.
    addressable_path: String,

    /// `true` if the file is expected to contain a visible video track.
    ///
    /// `false` for audio-only files or when this is unknown.
    known_video_present: bool,
}

impl MediaDescriptor {
    pub fn new(addressable_path: impl Into<String>, known_video_present: bool) -> Self {
        Self {
            addressable_path: addressable_path.into(),
            known_video_present,
        }
    }

    pub fn addressable_path(&self) -> &str {
        &self.addressable_path
    }

    pub fn known_video_present(&self) -> bool {
        self.known_video_present
    }
}

/// The two URLs under which the same media can be played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSources {
    /// Direct, single-quality source.
    native_url: String,

    /// HLS multivariant playlist.
    manifest_url: String,
}

impl MediaSources {
    /// Build both URLs for `descriptor`:
    ///   - `<api_root>/native/<path>`
    ///   - `<api_root>/hls/<path>/<manifest_name>`
    pub fn try_new(
        descriptor: &MediaDescriptor,
        api_root: &str,
        manifest_name: &str,
    ) -> Result<Self, SourceUrlError> {
        let path = descriptor.addressable_path();
        Ok(Self {
            native_url: join_escaped(api_root, &["native", path])?,
            manifest_url: join_escaped(api_root, &["hls", path, manifest_name])?,
        })
    }

    pub fn native_url(&self) -> &str {
        &self.native_url
    }

    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_sources() {
        let descriptor = MediaDescriptor::new("a/b.mp4", true);
        let sources = MediaSources::try_new(&descriptor, "/api/media", "manifest.m3u8").unwrap();
        assert_eq!(sources.native_url(), "/api/media/native/a/b.mp4");
        assert_eq!(sources.manifest_url(), "/api/media/hls/a/b.mp4/manifest.m3u8");
    }

    #[test]
    fn test_media_sources_escaping() {
        let descriptor = MediaDescriptor::new("Shows/S01 E02 #1.mkv", true);
        let sources = MediaSources::try_new(&descriptor, "/api/media", "manifest").unwrap();
        assert_eq!(
            sources.native_url(),
            "/api/media/native/Shows/S01%20E02%20%231.mkv"
        );
        assert_eq!(
            sources.manifest_url(),
            "/api/media/hls/Shows/S01%20E02%20%231.mkv/manifest"
        );
    }
}
