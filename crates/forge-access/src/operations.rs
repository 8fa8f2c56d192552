//! # Operations
//!
//! Defines the closed set of operations an actor can request on an existing
//! resource. Creation is deliberately not part of this set: it concerns a
//! resource that does not exist yet and is decided by the creation policy
//! with a container and a resource type instead of a resource instance.

use serde::{Deserialize, Serialize};

/// Operations that can be requested on an existing resource.
///
/// The set is closed on purpose: the policy tables match exhaustively over
/// it, and any combination a table does not grant resolves to a denial.
///
/// - **Read**: View resource data
/// - **Update**: Modify resource data
/// - **Delete**: Remove the resource
/// - **Watch**: Subscribe to notifications for the resource
/// - **Leave**: Withdraw membership (projects only)
/// - **Accept**: Accept a pending item such as a pull request
/// - **Close** / **Reopen**: Toggle the open state of issues and the like
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Read/view resource.
    Read,

    /// Update existing resource.
    Update,

    /// Delete resource.
    Delete,

    /// Watch the resource for notifications.
    Watch,

    /// Leave the resource (withdraw project membership).
    Leave,

    /// Accept a pending item.
    Accept,

    /// Close an open item.
    Close,

    /// Reopen a closed item.
    Reopen,
}

impl Operation {
    /// Get the string representation of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Watch => "watch",
            Operation::Leave => "leave",
            Operation::Accept => "accept",
            Operation::Close => "close",
            Operation::Reopen => "reopen",
        }
    }

    /// Parse operation from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(Operation)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use forge_access::operations::Operation;
    ///
    /// assert_eq!(Operation::parse("read"), Some(Operation::Read));
    /// assert_eq!(Operation::parse("edit"), Some(Operation::Update)); // Alias
    /// assert_eq!(Operation::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "read" | "view" | "get" => Some(Operation::Read),
            "update" | "edit" | "modify" | "write" => Some(Operation::Update),
            "delete" | "remove" | "destroy" => Some(Operation::Delete),
            "watch" | "subscribe" => Some(Operation::Watch),
            "leave" | "unsubscribe" => Some(Operation::Leave),
            "accept" => Some(Operation::Accept),
            "close" => Some(Operation::Close),
            "reopen" => Some(Operation::Reopen),
            _ => None,
        }
    }

    /// Get all operations.
    pub fn all() -> Vec<Self> {
        vec![
            Operation::Read,
            Operation::Update,
            Operation::Delete,
            Operation::Watch,
            Operation::Leave,
            Operation::Accept,
            Operation::Close,
            Operation::Reopen,
        ]
    }

    /// Check if this is a destructive operation.
    ///
    /// # Returns
    ///
    /// `true` if the operation permanently removes data
    pub fn is_destructive(&self) -> bool {
        matches!(self, Operation::Delete)
    }

    /// Check if this operation mutates the resource itself.
    ///
    /// Watch and Leave only change the actor's relationship with the
    /// resource, not the resource data.
    ///
    /// # Returns
    ///
    /// `true` if the operation modifies resource data or state
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Operation::Update
                | Operation::Delete
                | Operation::Accept
                | Operation::Close
                | Operation::Reopen
        )
    }
}
