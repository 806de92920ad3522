use serde::{Deserialize, Serialize};

use crate::foundation::error::{ReelError, ReelResult};

/// Number of hero image slots a preset can fill.
pub const IMAGE_SLOTS: usize = 3;

/// Opaque handle to an externally supplied image (path, URL, asset id).
///
/// Never opened or validated here; it is copied into the scene for the compositor to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Wrap a handle.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Handle as passed in.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Positional hero images; an empty slot omits its layer.
///
/// An empty handle string counts as an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSlots(pub [Option<ImageRef>; IMAGE_SLOTS]);

impl ImageSlots {
    /// No images.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All three slots filled.
    pub fn full(a: impl Into<String>, b: impl Into<String>, c: impl Into<String>) -> Self {
        Self([
            Some(ImageRef::new(a)),
            Some(ImageRef::new(b)),
            Some(ImageRef::new(c)),
        ])
    }

    /// Fill slots in order from a list of optional handles; more than three is an error.
    ///
    /// Empty handles leave their slot empty.
    pub fn from_list<I, S>(items: I) -> ReelResult<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut slots = Self::default();
        for (i, item) in items.into_iter().enumerate() {
            if i >= IMAGE_SLOTS {
                return Err(ReelError::validation(format!(
                    "at most {IMAGE_SLOTS} images are supported"
                )));
            }
            slots.0[i] = item.map(Into::into).filter(|h: &String| !h.is_empty()).map(ImageRef);
        }
        Ok(slots)
    }

    /// Image in slot `idx` (0-based), if any.
    pub fn get(&self, idx: usize) -> Option<&ImageRef> {
        self.0
            .get(idx)
            .and_then(Option::as_ref)
            .filter(|r| !r.0.is_empty())
    }

    /// Copy with slot `idx` cleared.
    pub fn without(&self, idx: usize) -> Self {
        let mut out = self.clone();
        if let Some(slot) = out.0.get_mut(idx) {
            *slot = None;
        }
        out
    }

    /// Number of filled slots.
    pub fn count(&self) -> usize {
        (0..IMAGE_SLOTS).filter(|&i| self.get(i).is_some()).count()
    }
}
