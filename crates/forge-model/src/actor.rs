//! Actor domain model
//!
//! This module provides the Actor entity: the identity on whose behalf a
//! request is evaluated. An actor may be a signed-in user, the anonymous
//! visitor, or a site manager with platform-wide privileges.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity requesting an operation.
///
/// Actors are immutable snapshots for the duration of a decision: the
/// access-control engine only reads the identity and the two privilege
/// flags, it never mutates an actor.
///
/// # Examples
///
/// ```
/// use forge_model::Actor;
///
/// let actor = Actor::anonymous();
/// assert!(actor.is_anonymous);
/// assert!(!actor.is_site_manager);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    /// Unique identifier for the actor.
    ///
    /// The anonymous actor carries the nil UUID; it never matches a real
    /// user id or a membership record.
    pub id: Uuid,

    /// Whether this is the anonymous (not signed-in) visitor.
    pub is_anonymous: bool,

    /// Whether this actor administers the whole site.
    ///
    /// Site managers pass every access check unconditionally.
    pub is_site_manager: bool,
}

impl Actor {
    /// Creates a signed-in actor with no site-wide privileges.
    ///
    /// # Arguments
    ///
    /// * `id` - The actor's user id
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use forge_model::Actor;
    ///
    /// let actor = Actor::new(Uuid::now_v7());
    /// assert!(!actor.is_anonymous);
    /// ```
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            is_anonymous: false,
            is_site_manager: false,
        }
    }

    /// Creates the anonymous actor.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_model::Actor;
    ///
    /// let visitor = Actor::anonymous();
    /// assert!(visitor.is_anonymous);
    /// ```
    pub fn anonymous() -> Self {
        Self {
            id: Uuid::nil(),
            is_anonymous: true,
            is_site_manager: false,
        }
    }

    /// Creates a site manager.
    ///
    /// # Arguments
    ///
    /// * `id` - The site manager's user id
    pub fn site_manager(id: Uuid) -> Self {
        Self {
            id,
            is_anonymous: false,
            is_site_manager: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_in_actor() {
        let id = Uuid::now_v7();
        let actor = Actor::new(id);

        assert_eq!(actor.id, id);
        assert!(!actor.is_anonymous);
        assert!(!actor.is_site_manager);
    }

    #[test]
    fn test_anonymous_actor() {
        let visitor = Actor::anonymous();

        assert_eq!(visitor.id, Uuid::nil());
        assert!(visitor.is_anonymous);
        assert!(!visitor.is_site_manager);
    }

    #[test]
    fn test_site_manager() {
        let admin = Actor::site_manager(Uuid::now_v7());

        assert!(admin.is_site_manager);
        assert!(!admin.is_anonymous);
    }
}
