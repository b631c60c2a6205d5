//! Location of a value inside nested input.
//!
//! A [`Path`] is only ever rendered into error prefixes; checkers never
//! compare or parse it. Rendering follows one rule: the first segment is
//! written bare, later key segments are preceded by `.`, and index segments
//! are written as `[i]` with no separator.
//!
//! ```
//! use tessel_schema::foundation::Path;
//!
//! let path = Path::root().key("servers").index(1).key("port");
//! assert_eq!(path.to_string(), "servers[1].port");
//! ```

use std::fmt;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Map key access, rendered as `.key` (bare when first).
    Key(String),
    /// List index access, rendered as `[index]`.
    Index(usize),
}

/// An ordered sequence of [`PathSegment`]s.
///
/// Extending a path never mutates it: [`key`](Self::key) and
/// [`index`](Self::index) return a new, longer path, so a parent checker can
/// hand each child its own location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path. Errors at the root carry no prefix.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Returns this path extended by a map key.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// Returns this path extended by a list index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    /// Returns true for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(key: &str) -> Self {
        Self::root().key(key)
    }
}

impl From<String> for Path {
    fn from(key: String) -> Self {
        Self::root().key(key)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

/// Renders `"<path>: "`, or nothing for the root path.
///
/// Shared by every error message so a bare root never gets a leading
/// separator.
pub(crate) struct PathPrefix<'a>(pub(crate) &'a Path);

impl fmt::Display for PathPrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_root() {
            Ok(())
        } else {
            write!(f, "{}: ", self.0)
        }
    }
}
