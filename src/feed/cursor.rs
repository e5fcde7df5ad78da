use crate::error::FeedError;

/// The caller-owned "pages requested" counter, as it sits in UI state.
///
/// This is a 1-based counter of how many pages the user has asked for,
/// separate from the 0-based page index the query service reports back;
/// translating between the two is the host's concern. UI state stores
/// deliver the counter as a number, a stringified numeral, or nothing at
/// all, so all three forms are representable and the parse is a single
/// explicit step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageCursor {
    /// No counter stored yet; treated as the first page being on screen.
    #[default]
    Unset,
    Value(i64),
    Text(String),
}

impl PageCursor {
    /// The counter's current value. `Unset` reads as 1.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidPageCursor`] when the stored text is
    /// not a numeral. Callers are required to store only absent, integer,
    /// or numeral-string values; anything else is a defect surfaced here
    /// rather than silently defaulted.
    pub fn current(&self) -> Result<i64, FeedError> {
        match self {
            Self::Unset => Ok(1),
            Self::Value(value) => Ok(*value),
            Self::Text(text) => text.parse().map_err(|_| FeedError::InvalidPageCursor {
                value: text.clone(),
            }),
        }
    }

    /// The counter value requesting one more page than the current state.
    ///
    /// No upper bound is applied; rejecting out-of-range requests belongs
    /// to the query layer.
    ///
    /// # Errors
    ///
    /// Fails for the same reason as [`PageCursor::current`].
    pub fn advance(&self) -> Result<i64, FeedError> {
        Ok(self.current()? + 1)
    }
}

impl From<i64> for PageCursor {
    fn from(value: i64) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for PageCursor {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PageCursor {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
