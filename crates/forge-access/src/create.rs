//! Creation policy
//!
//! Predicates for deciding whether a *new* resource may be created. No
//! resource instance exists yet, so these take a container and a resource
//! type instead of a resource, and they never consult the mutation rules.

use forge_model::{Actor, Project};

use crate::authorship;
use crate::directory::Directory;
use crate::resources::{Resource, ResourceType};

/// Check whether the actor may create a global resource.
///
/// Any signed-in actor may; there is no type distinction at the global
/// level.
pub fn is_global_resource_creatable(actor: &Actor) -> bool {
    !actor.is_anonymous
}

/// Check whether the actor may create a resource of `resource_type` in
/// `project`.
///
/// Site managers and project members may create anything. On a private
/// project nobody else may create at all. On a public project, signed-in
/// visitors may create the public-creatable subset (issues, posts,
/// comments, forks); anonymous visitors may create nothing.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use forge_model::{Actor, Project};
/// use forge_access::directory::InMemoryDirectory;
/// use forge_access::resources::ResourceType;
/// use forge_access::is_project_resource_creatable;
///
/// let directory = InMemoryDirectory::new();
/// let project = Project::new("Open", "open", Uuid::now_v7()).public();
/// let visitor = Actor::new(Uuid::now_v7());
///
/// assert!(is_project_resource_creatable(&directory, &visitor, &project, ResourceType::IssuePost));
/// assert!(!is_project_resource_creatable(&directory, &visitor, &project, ResourceType::Code));
/// ```
pub fn is_project_resource_creatable<D: Directory>(
    directory: &D,
    actor: &Actor,
    project: &Project,
    resource_type: ResourceType,
) -> bool {
    if actor.is_site_manager {
        return true;
    }

    if directory.membership(actor.id, project.id).is_member() {
        // Project members can create anything.
        return true;
    }

    // If the project is private, nonmembers cannot create anything.
    if !project.is_public {
        return false;
    }

    // If the project is public, signed-in visitors can create issues,
    // posts, comments, and forks.
    !actor.is_anonymous && resource_type.creatable_on_public()
}

/// Check whether the actor may create a resource of `resource_type` inside
/// `container`.
///
/// The author of a container may always create resources inside it,
/// mirroring the mutation policy's author bypass. Otherwise the container
/// is resolved to a project — a container of type project by its own id,
/// any other scoped container by its owning project — and the project rule
/// applies. A container with no resolvable project falls back to the
/// global creation rule.
pub fn is_resource_creatable<D: Directory>(
    directory: &D,
    actor: &Actor,
    container: &Resource,
    resource_type: ResourceType,
) -> bool {
    if authorship::allowed_if_author(actor, container) {
        return true;
    }

    let project = if container.resource_type() == ResourceType::Project {
        directory.find_project(container.id())
    } else if let Some(project_id) = container.project_id() {
        directory.find_project(project_id)
    } else {
        None
    };

    match project {
        Some(project) => is_project_resource_creatable(directory, actor, &project, resource_type),
        None => is_global_resource_creatable(actor),
    }
}
