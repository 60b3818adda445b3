//! Path addressing for importer lookups.
//!
//! A path is the `/`-joined sequence of ancestor names, root first, each
//! prefixed by `/`: `with_importer(importer, "")` on a block `root` with a
//! field `a` looks `a` up at `/root/a`. Names are escaped with JSON Pointer
//! rules (RFC 6901), so a path is always a valid pointer: `~` becomes `~0`
//! and `/` becomes `~1`. Array elements are addressed by their index.

use std::borrow::Cow;

/// Escapes a single name for use as a path segment.
pub fn escape(name: &str) -> Cow<'_, str> {
    if name.contains(['~', '/']) {
        Cow::Owned(name.replace('~', "~0").replace('/', "~1"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Reverses [`escape`].
pub fn unescape(segment: &str) -> Cow<'_, str> {
    if segment.contains('~') {
        Cow::Owned(segment.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(segment)
    }
}

/// Appends `"/" + escape(name)` to `base`.
pub fn join(base: &str, name: &str) -> String {
    format!("{base}/{}", escape(name))
}

/// Appends an array index segment to `base`.
pub fn index(base: &str, index: usize) -> String {
    format!("{base}/{index}")
}

/// Splits a path back into unescaped names.
pub fn segments(path: &str) -> impl Iterator<Item = Cow<'_, str>> {
    path.split('/').skip(1).map(unescape)
}
