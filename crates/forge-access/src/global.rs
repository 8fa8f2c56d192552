//! Global resource policy
//!
//! Decision rules for resources that belong to no project: user accounts,
//! avatars, user-scoped attachments, and the project entity itself. Called
//! by the dispatcher after the site-manager override has already been
//! applied.

use forge_model::Actor;

use crate::directory::Directory;
use crate::operations::Operation;
use crate::resources::{GlobalResource, ResourceType};

/// Decide an operation on a global resource.
///
/// Rule order matters:
/// 1. A temporary upload attached to a user is exclusively that user's,
///    for every operation including read.
/// 2. Read is open for everything except project entities, which require
///    visibility or membership.
/// 3. Watch and Leave are defined for project entities only.
/// 4. Everything else falls through to the identity/manager table.
pub(crate) fn global_resource_allowed<D: Directory>(
    directory: &D,
    actor: &Actor,
    resource: &GlobalResource,
    operation: Operation,
) -> bool {
    // Temporary attachments are only for the user who uploaded them.
    if resource.resource_type == ResourceType::Attachment {
        if let Some(parent) = resource.parent.as_deref() {
            if parent.resource_type() == ResourceType::User {
                return !actor.is_anonymous && actor.id == parent.id();
            }
        }
    }

    if operation == Operation::Read {
        if resource.resource_type == ResourceType::Project {
            return match directory.find_project(resource.id) {
                Some(project) => {
                    project.is_public || directory.membership(actor.id, project.id).is_member()
                }
                None => false,
            };
        }

        // Anyone can read any global resource which is not a project.
        return true;
    }

    if operation == Operation::Watch && resource.resource_type == ResourceType::Project {
        return match directory.find_project(resource.id) {
            Some(project) if project.is_public => !actor.is_anonymous,
            Some(project) => directory.membership(actor.id, project.id).is_member(),
            None => false,
        };
    }

    if operation == Operation::Leave && resource.resource_type == ResourceType::Project {
        return match directory.find_project(resource.id) {
            Some(project) => {
                !project.is_owned_by(actor)
                    && directory.membership(actor.id, project.id).is_member()
            }
            None => false,
        };
    }

    // Update, delete, and any operation not matched above.
    match resource.resource_type {
        ResourceType::User | ResourceType::UserAvatar => {
            !actor.is_anonymous && actor.id == resource.id
        }
        ResourceType::Project => directory.membership(actor.id, resource.id).is_manager(),
        _ => false,
    }
}
