//! Sentinel mapping for hosts that must never see an error.
//!
//! Editor features prefer a missing completion over a failed request. The
//! indexer returns [`IndexResult`] everywhere; a host that wants the old
//! "null on any failure" behavior calls [`Degrade::degrade`] or
//! [`Degrade::degrade_or_default`] at the boundary.

use crate::errors::IndexResult;
use log::debug;

/// Collapse an [`IndexResult`] into a sentinel, logging what was discarded.
pub trait Degrade<T> {
    /// `Some(value)` on success, `None` on any failure.
    fn degrade(self) -> Option<T>;

    /// The value on success, `T::default()` (an empty sequence) on any failure.
    fn degrade_or_default(self) -> T
    where
        T: Default;
}

impl<T> Degrade<T> for IndexResult<T> {
    fn degrade(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Discarding indexer error: {e}");
                None
            }
        }
    }

    fn degrade_or_default(self) -> T
    where
        T: Default,
    {
        self.degrade().unwrap_or_default()
    }
}
