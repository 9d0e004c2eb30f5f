use url::Url;

use crate::error::SourceUrlError;

/// Placeholder origin against which relative API roots are resolved.
///
/// Only the path of the resulting URL is kept for such roots.
const PLACEHOLDER_ORIGIN: &str = "http://localhost/";

/// Build the URL obtained by appending to `root` every segment of each `paths` entry.
///
/// Each entry is split on `/` and every resulting segment is percent-encoded on its own, so
/// the separators of a media's path are never encoded but any other reserved character
/// (`#`, `?`, `%`, spaces...) is.
///
/// `root` may either be absolute (`https://host/api`), in which case the full URL is
/// returned, or relative to the current origin (`/api`), in which case only the path is
/// returned.
pub(crate) fn join_escaped(root: &str, paths: &[&str]) -> Result<String, SourceUrlError> {
    let is_absolute = Url::parse(root).is_ok();
    let mut url = Url::parse(PLACEHOLDER_ORIGIN)
        .and_then(|origin| origin.join(root))
        .map_err(|source| SourceUrlError::InvalidRoot {
            root: root.to_owned(),
            source,
        })?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| SourceUrlError::CannotBeABase(root.to_owned()))?;
        segments.pop_if_empty();
        for path in paths {
            segments.extend(path.split('/'));
        }
    }

    if is_absolute {
        Ok(url.into())
    } else {
        Ok(url.path().to_owned())
    }
}

/// Percent-encode each `/`-separated segment of `path` independently.
pub fn escape_path(path: &str) -> String {
    // The placeholder root is always valid.
    match join_escaped("/", &[path]) {
        Ok(escaped) => escaped[1..].to_owned(),
        Err(_) => path.to_owned(),
    }
}
