//! Error types for access-control decisions
//!
//! A denial is not an error: any (resource type, operation) pair no rule
//! grants resolves to `Ok(false)`. The errors here are data-integrity
//! faults — they mean the resource graph handed to the engine is broken and
//! the caller must surface an internal error, never a "forbidden".

use thiserror::Error;
use uuid::Uuid;

/// Access-control error types.
///
/// These cover integrity faults in the resource graph. Returning a denial
/// for any of them would mask a bug in the surrounding system as a
/// security decision.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// A project-scoped resource points at a project that cannot be resolved
    #[error("resource {resource_id} lost its project {project_id}")]
    ProjectNotFound {
        /// The orphaned resource
        resource_id: Uuid,
        /// The dangling project reference
        project_id: Uuid,
    },

    /// A delegating resource has no parent to delegate to
    #[error("resource {resource_id} delegates its permission but has no parent")]
    ParentMissing {
        /// The parentless resource
        resource_id: Uuid,
    },

    /// The parent chain is deeper than any valid resource graph
    #[error("delegation exceeded {max_depth} levels at resource {resource_id}")]
    DelegationTooDeep {
        /// The resource at which the bound was hit
        resource_id: Uuid,
        /// The configured bound
        max_depth: usize,
    },
}

/// Result type for access-control decisions.
pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let resource_id = Uuid::nil();
        let project_id = Uuid::nil();

        let err = AccessError::ProjectNotFound {
            resource_id,
            project_id,
        };
        assert!(err.to_string().contains("lost its project"));

        let err = AccessError::ParentMissing { resource_id };
        assert!(err.to_string().contains("no parent"));

        let err = AccessError::DelegationTooDeep {
            resource_id,
            max_depth: 8,
        };
        assert!(err.to_string().contains("8 levels"));
    }
}
