//! Project resource policy
//!
//! Decision rules for resources that belong to a project. This is where
//! most of the branching lives: the manager/author short-circuit, the
//! delegation of sub-objects to their parent, and the role/visibility
//! matrix for everyone else.

use forge_model::{Actor, Project};

use crate::authorship;
use crate::directory::Directory;
use crate::engine;
use crate::error::{AccessError, AccessResult};
use crate::operations::Operation;
use crate::resources::{Resource, ResourceType};

/// Decide an operation on a resource that belongs to `project`.
///
/// Precedence:
/// 1. Project managers and authors pass immediately.
/// 2. Delegating types defer read to the parent's read, and update/delete
///    to the parent's update. Other operations fall through.
/// 3. The role/visibility matrix decides the rest; unmatched combinations
///    deny.
///
/// `depth` tracks how many delegation hops led here; the dispatcher bounds
/// it.
pub(crate) fn scoped_resource_allowed<D: Directory>(
    directory: &D,
    actor: &Actor,
    project: &Project,
    resource: &Resource,
    operation: Operation,
    depth: usize,
) -> AccessResult<bool> {
    if directory.membership(actor.id, project.id).is_manager()
        || authorship::allowed_if_author(actor, resource)
    {
        return Ok(true);
    }

    // Some resources' permission depends on their parent.
    if resource.resource_type().delegates_to_parent() {
        let delegated = match operation {
            Operation::Read => Some(Operation::Read),
            Operation::Update | Operation::Delete => Some(Operation::Update),
            _ => None,
        };

        if let Some(parent_operation) = delegated {
            let parent = resource.parent().ok_or(AccessError::ParentMissing {
                resource_id: resource.id(),
            })?;
            return engine::is_allowed_at(directory, actor, parent, parent_operation, depth + 1);
        }
    }

    // Role/visibility matrix for members, nonmembers and anonymous:
    // - Anyone can read a public project's resources.
    // - Members can update anything and delete anything except the code
    //   repository.
    let membership = directory.membership(actor.id, project.id);
    Ok(match operation {
        Operation::Read => project.is_public || membership.is_member(),
        Operation::Update => membership.is_member(),
        Operation::Delete => {
            if resource.resource_type() == ResourceType::Code {
                // Code deletion is manager-only, handled upstream.
                false
            } else {
                membership.is_member()
            }
        }
        Operation::Accept | Operation::Close | Operation::Reopen => membership.is_member(),
        Operation::Watch => {
            if project.is_public {
                !actor.is_anonymous
            } else {
                membership.is_member()
            }
        }
        // Undefined for project-scoped resources.
        Operation::Leave => false,
    })
}
