use serde::{Deserialize, Serialize};

/// Offset-based page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    pub href: Option<String>,
    pub items: Vec<T>,
    pub limit: u32,
    /// URL of the next page, `None` on the last one.
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total: u32,
}

// Manual impl: `T` needn't be `Default` for an empty page.
impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: Vec::new(),
            limit: 0,
            next: None,
            offset: 0,
            previous: None,
            total: 0,
        }
    }
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The `offset` to request for the following page, if there is one.
    ///
    /// `None` on the last page, or when the next offset doesn't fit a `u32`.
    #[must_use]
    pub fn next_offset(&self) -> Option<u32> {
        self.next.as_ref()?;
        let fetched = u32::try_from(self.items.len()).ok()?;
        self.offset.checked_add(fetched)
    }
}

/// Position markers of a [`CursorPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursor {
    pub after: Option<String>,
    pub before: Option<String>,
}

/// Cursor-based (forward-only) page of results.
///
/// Used where the API pages by opaque cursor instead of numeric offset,
/// such as followed artists and play history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorPage<T> {
    pub href: Option<String>,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub cursors: Option<Cursor>,
    /// Absent on some endpoints, e.g. recently played.
    pub total: Option<u32>,
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self {
            href: None,
            items: Vec::new(),
            limit: 0,
            next: None,
            cursors: None,
            total: None,
        }
    }
}

impl<T> CursorPage<T> {
    /// The `after` cursor to request the following page with.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_ref()?;
        self.cursors.as_ref()?.after.as_deref()
    }
}
