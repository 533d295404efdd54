/// Derives the media store identifier of a stored image source.
///
/// Takes the last path segment and strips the extension. This is a heuristic over the
/// store's URL scheme, so `None` means "skip the delete", never a failure.
pub fn media_identifier(source: &str) -> Option<String> {
    let path = source
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    let segment = path.rsplit('/').next()?;
    let stem = segment.split('.').next()?;

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}
