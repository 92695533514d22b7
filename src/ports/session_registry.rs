//! SessionRegistry port - Interface for live session state.
//!
//! The registry exclusively owns every session's attribute bag. Callers read
//! and write through this API and only ever receive copies.

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{AttributeValue, SessionError, SessionSnapshot};

/// Concurrent store of session state, scoped to the process lifetime.
///
/// Implementations must let operations on different session ids proceed
/// without blocking each other, and must linearize operations on the same id.
pub trait SessionRegistry: Send + Sync {
    /// Creates a session bound to a callback address and returns its new id.
    ///
    /// # Errors
    ///
    /// `SessionError::InvalidArgument` when the address is absent or blank.
    /// Nothing is stored in that case.
    fn create(&self, callback_url: Option<&str>) -> Result<SessionId, SessionError>;

    /// Removes a session. Unknown ids are a no-op.
    ///
    /// Returns `true` when a live session was removed.
    fn destroy(&self, id: &SessionId) -> bool;

    /// Reads one attribute.
    ///
    /// Returns `None` both for unknown sessions and for unset keys; use
    /// [`SessionRegistry::get`] when the two cases must be told apart.
    fn get_attribute(&self, id: &SessionId, key: &str) -> Option<AttributeValue>;

    /// Writes one attribute on an existing session.
    ///
    /// # Errors
    ///
    /// `SessionError::NotFound` if the session does not exist. Sessions are
    /// never created implicitly.
    fn set_attribute(
        &self,
        id: &SessionId,
        key: &str,
        value: AttributeValue,
    ) -> Result<(), SessionError>;

    /// Copy of one session, or `None` if the id is unknown.
    fn get(&self, id: &SessionId) -> Option<SessionSnapshot>;

    /// Point-in-time copy of every live session.
    fn snapshot(&self) -> Vec<SessionSnapshot>;

    /// Removes sessions created before `cutoff` and returns their ids.
    fn reap_created_before(&self, cutoff: Timestamp) -> Vec<SessionId>;

    /// Drops every session. Returns how many were removed.
    fn clear(&self) -> usize;

    /// Number of live sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
