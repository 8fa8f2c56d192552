//! Project membership roles
//!
//! This module defines the role an actor holds within a project. The
//! access-control engine never mutates memberships; it only asks which of
//! the three roles relates an actor to a project.

use serde::{Deserialize, Serialize};

/// An actor's role within a project.
///
/// Roles are hierarchical, with each role inheriting the access of lower
/// roles. The hierarchy is: None < Member < Manager
///
/// # Permission Model
///
/// - **None**: No relationship with the project (nonmember or anonymous)
/// - **Member**: Can create and modify project content
/// - **Manager**: Full project control, passes every project-level check
///
/// # Examples
///
/// ```
/// use forge_model::Membership;
///
/// let role = Membership::Member;
/// assert!(role.is_member());
/// assert!(!role.is_manager());
///
/// assert!(Membership::Manager.is_member());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    /// No relationship with the project
    None = 0,

    /// Regular project member
    Member = 1,

    /// Project manager
    Manager = 2,
}

impl Membership {
    /// Check if this role grants member-level access.
    ///
    /// # Returns
    ///
    /// `true` for Member and Manager roles
    pub fn is_member(&self) -> bool {
        *self >= Membership::Member
    }

    /// Check if this role grants manager-level access.
    ///
    /// # Returns
    ///
    /// `true` only for the Manager role
    pub fn is_manager(&self) -> bool {
        *self >= Membership::Manager
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Membership)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_model::Membership;
    ///
    /// assert_eq!(Membership::parse("manager"), Some(Membership::Manager));
    /// assert_eq!(Membership::parse("MEMBER"), Some(Membership::Member));
    /// assert_eq!(Membership::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "nonmember" => Some(Self::None),
            "member" => Some(Self::Member),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_model::Membership;
    ///
    /// assert_eq!(Membership::Manager.as_str(), "manager");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Member => "member",
            Self::Manager => "manager",
        }
    }
}

impl Default for Membership {
    fn default() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_hierarchy() {
        assert!(Membership::Manager > Membership::Member);
        assert!(Membership::Member > Membership::None);
    }

    #[test]
    fn test_membership_checks() {
        assert!(!Membership::None.is_member());
        assert!(Membership::Member.is_member());
        assert!(Membership::Manager.is_member());

        assert!(!Membership::None.is_manager());
        assert!(!Membership::Member.is_manager());
        assert!(Membership::Manager.is_manager());
    }

    #[test]
    fn test_membership_parse() {
        assert_eq!(Membership::parse("manager"), Some(Membership::Manager));
        assert_eq!(Membership::parse("MEMBER"), Some(Membership::Member));
        assert_eq!(Membership::parse("none"), Some(Membership::None));
        assert_eq!(Membership::parse("invalid"), None);
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(Membership::default(), Membership::None);
    }
}
