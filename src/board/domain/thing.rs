//! The board's unit of work.

use super::{Column, ThingId};
use mockable::Clock;
use std::hash::{Hash, Hasher};

/// A task card on the board.
///
/// Equality and hashing consider only [`ThingId`]: two handles to the same
/// thing compare equal even after one of them has been edited.
#[derive(Debug, Clone)]
pub struct Thing {
    id: ThingId,
    title: Option<String>,
    detail: Option<String>,
    column: Column,
    due_date: Option<f64>,
    updated_at: Option<String>,
}

impl Thing {
    /// Creates an empty thing with a fresh identifier in `column`.
    #[must_use]
    pub fn new(column: Column) -> Self {
        Self::with_id(ThingId::new(), column)
    }

    /// Creates an empty thing with a known identifier.
    #[must_use]
    pub const fn with_id(id: ThingId, column: Column) -> Self {
        Self {
            id,
            title: None,
            detail: None,
            column,
            due_date: None,
            updated_at: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the detail text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the due date in seconds since the Unix epoch.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: f64) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the advisory last-updated marker.
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    /// Returns the thing identifier.
    #[must_use]
    pub const fn id(&self) -> ThingId {
        self.id
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the detail text, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the column the thing belongs to.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the due date in seconds since the Unix epoch, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<f64> {
        self.due_date
    }

    /// Returns the advisory last-updated marker, if any.
    #[must_use]
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Replaces the detail text.
    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = Some(detail.into());
    }

    /// Replaces the due date.
    pub const fn set_due_date(&mut self, due_date: f64) {
        self.due_date = Some(due_date);
    }

    /// Re-tags the thing. Only the board moves things between columns.
    pub(crate) const fn set_column(&mut self, column: Column) {
        self.column = column;
    }

    /// Stamps `updated_at` with the current clock time in RFC 3339 form.
    pub fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc().to_rfc3339());
    }
}

impl PartialEq for Thing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Thing {}

impl Hash for Thing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
