//! Locations of values inside nested input.
//!
//! A [`ValuePath`] is the sequence of object keys and array indices that leads
//! from the root of an input value to the value a constraint is looking at.
//! Every error in a report is bound to one of these paths.

use std::fmt::{self, Display};

/// A single step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g. `owner`, `email`).
    Key(String),
    /// An array index (e.g. `[0]`).
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// An immutable path to a value within a nested input.
///
/// Extending a path never modifies it; [`key`](ValuePath::key) and
/// [`index`](ValuePath::index) return a new path, so one base path can be
/// shared by every child of an object or array.
///
/// # Example
///
/// ```rust
/// use assay::ValuePath;
///
/// let path = ValuePath::root()
///     .key("branches")
///     .index(0)
///     .key("address");
///
/// assert_eq!(path.to_string(), "branches[0].address");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
}

impl ValuePath {
    /// The empty path, locating the input value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from a list of segments.
    ///
    /// ```rust
    /// use assay::{PathSegment, ValuePath};
    ///
    /// let path = ValuePath::from_segments([PathSegment::from("owner"), PathSegment::from(2usize)]);
    /// assert_eq!(path, ValuePath::root().key("owner").index(2));
    /// ```
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Returns a new path with an object key appended.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// Returns a new path with an array index appended.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the path without its last segment, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
