//! Decision dispatcher
//!
//! The single entry point for deciding an operation on an existing
//! resource. Applies the universal site-manager override, classifies the
//! resource as global or project-scoped, and routes to the matching policy.
//! Delegating resources recurse back in here through their parent chain,
//! bounded by [`MAX_DELEGATION_DEPTH`].

use forge_model::Actor;

use crate::directory::Directory;
use crate::error::{AccessError, AccessResult};
use crate::global;
use crate::operations::Operation;
use crate::resources::Resource;
use crate::scoped;

/// Upper bound on delegation hops through parent resources.
///
/// Real resource graphs are one or two levels deep (an attachment hanging
/// off an issue). Hitting the bound means the parent chain is cyclic or
/// corrupt, which is an integrity fault rather than a denial.
pub const MAX_DELEGATION_DEPTH: usize = 8;

/// Decide whether `actor` may perform `operation` on `resource`.
///
/// Site managers pass unconditionally. Otherwise global resources are
/// decided by the global policy and project-scoped resources by the project
/// policy, after resolving their owning project through the directory.
///
/// # Errors
///
/// Returns [`AccessError::ProjectNotFound`] when a project-scoped resource
/// points at a project the directory cannot resolve: that is a
/// data-integrity fault in the surrounding system, not a denial, and
/// callers must surface it as an internal error. [`AccessError::ParentMissing`]
/// and [`AccessError::DelegationTooDeep`] report a broken parent chain the
/// same way.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use forge_model::{Actor, Project};
/// use forge_access::directory::InMemoryDirectory;
/// use forge_access::operations::Operation;
/// use forge_access::resources::{Resource, ResourceType};
///
/// let mut directory = InMemoryDirectory::new();
/// let project_id = directory.insert_project(
///     Project::new("Planner", "planner", Uuid::now_v7()).public(),
/// );
/// let post = Resource::scoped(Uuid::now_v7(), ResourceType::BoardPost, project_id);
///
/// let allowed = forge_access::is_allowed(
///     &directory,
///     &Actor::anonymous(),
///     &post,
///     Operation::Read,
/// ).unwrap();
/// assert!(allowed);
/// ```
pub fn is_allowed<D: Directory>(
    directory: &D,
    actor: &Actor,
    resource: &Resource,
    operation: Operation,
) -> AccessResult<bool> {
    is_allowed_at(directory, actor, resource, operation, 0)
}

/// Depth-tracking dispatcher shared with the delegation recursion.
pub(crate) fn is_allowed_at<D: Directory>(
    directory: &D,
    actor: &Actor,
    resource: &Resource,
    operation: Operation,
    depth: usize,
) -> AccessResult<bool> {
    if depth > MAX_DELEGATION_DEPTH {
        return Err(AccessError::DelegationTooDeep {
            resource_id: resource.id(),
            max_depth: MAX_DELEGATION_DEPTH,
        });
    }

    if actor.is_site_manager {
        return Ok(true);
    }

    match resource {
        Resource::Global(entity) => Ok(global::global_resource_allowed(
            directory, actor, entity, operation,
        )),
        Resource::Scoped(entity) => {
            let project = directory.find_project(entity.project_id).ok_or(
                AccessError::ProjectNotFound {
                    resource_id: entity.id,
                    project_id: entity.project_id,
                },
            )?;
            scoped::scoped_resource_allowed(directory, actor, &project, resource, operation, depth)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryDirectory;
    use crate::resources::ResourceType;
    use forge_model::Project;
    use uuid::Uuid;

    #[test]
    fn test_site_manager_override() {
        let directory = InMemoryDirectory::new();
        let admin = Actor::site_manager(Uuid::now_v7());

        // Even a resource pointing at a nonexistent project: the override is
        // checked before classification.
        let orphan = Resource::scoped(Uuid::now_v7(), ResourceType::Code, Uuid::now_v7());
        for operation in Operation::all() {
            assert_eq!(
                is_allowed(&directory, &admin, &orphan, operation),
                Ok(true)
            );
        }
    }

    #[test]
    fn test_orphaned_resource_faults() {
        let directory = InMemoryDirectory::new();
        let actor = Actor::new(Uuid::now_v7());

        let project_id = Uuid::now_v7();
        let post = Resource::scoped(Uuid::now_v7(), ResourceType::BoardPost, project_id);

        assert_eq!(
            is_allowed(&directory, &actor, &post, Operation::Read),
            Err(AccessError::ProjectNotFound {
                resource_id: post.id(),
                project_id,
            })
        );
    }

    #[test]
    fn test_global_resources_route_to_global_policy() {
        let directory = InMemoryDirectory::new();
        let actor = Actor::new(Uuid::now_v7());
        let user = Resource::global(Uuid::now_v7(), ResourceType::User);

        assert_eq!(
            is_allowed(&directory, &actor, &user, Operation::Read),
            Ok(true)
        );
        assert_eq!(
            is_allowed(&directory, &actor, &user, Operation::Update),
            Ok(false)
        );
    }

    #[test]
    fn test_cyclic_parent_chain_is_bounded() {
        let mut directory = InMemoryDirectory::new();
        let project_id =
            directory.insert_project(Project::new("Team", "team", Uuid::now_v7()).public());
        let actor = Actor::new(Uuid::now_v7());

        // Build a parent chain of delegating attachments deeper than the
        // bound; the engine must fault instead of walking it forever.
        let mut resource = Resource::scoped(Uuid::now_v7(), ResourceType::Attachment, project_id)
            .with_parent(Resource::scoped(
                Uuid::now_v7(),
                ResourceType::IssuePost,
                project_id,
            ));
        for _ in 0..(MAX_DELEGATION_DEPTH + 2) {
            resource = Resource::scoped(Uuid::now_v7(), ResourceType::Attachment, project_id)
                .with_parent(resource);
        }

        let result = is_allowed(&directory, &actor, &resource, Operation::Update);
        assert!(matches!(
            result,
            Err(AccessError::DelegationTooDeep { .. })
        ));
    }

    #[test]
    fn test_decisions_are_idempotent() {
        let mut directory = InMemoryDirectory::new();
        let project_id =
            directory.insert_project(Project::new("Team", "team", Uuid::now_v7()).public());
        let actor = Actor::new(Uuid::now_v7());
        let post = Resource::scoped(Uuid::now_v7(), ResourceType::BoardPost, project_id);

        for operation in Operation::all() {
            let first = is_allowed(&directory, &actor, &post, operation);
            let second = is_allowed(&directory, &actor, &post, operation);
            assert_eq!(first, second);
        }
    }
}
