//! Read-only ports into the surrounding system
//!
//! The engine is a pure function of its explicit inputs: every piece of
//! external state it needs — project records and the membership relation —
//! arrives through the [`Directory`] trait, never through ambient globals.
//! Callers hand the engine a per-call snapshot; the engine makes no
//! consistency guarantee across two separate decisions.

use std::collections::HashMap;

use uuid::Uuid;

use forge_model::{Membership, Project};

/// Read-only view of projects and memberships.
///
/// Implementations must be safe for concurrent read access or present a
/// per-call immutable snapshot. The engine never writes through this trait.
pub trait Directory {
    /// Look up a project by id.
    ///
    /// # Arguments
    ///
    /// * `project_id` - The project to resolve
    ///
    /// # Returns
    ///
    /// The project, or `None` if no project exists with that id
    fn find_project(&self, project_id: Uuid) -> Option<Project>;

    /// The role relating a user to a project.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user
    /// * `project_id` - The project
    ///
    /// # Returns
    ///
    /// The membership role; `Membership::None` when no relationship exists
    fn membership(&self, user_id: Uuid, project_id: Uuid) -> Membership;
}

/// A map-backed [`Directory`] for tests and embedders without a database.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use forge_model::{Membership, Project};
/// use forge_access::directory::{Directory, InMemoryDirectory};
///
/// let project = Project::new("Planner", "planner", Uuid::now_v7());
/// let project_id = project.id;
/// let user_id = Uuid::now_v7();
///
/// let mut directory = InMemoryDirectory::new();
/// directory.insert_project(project);
/// directory.set_membership(user_id, project_id, Membership::Member);
///
/// assert!(directory.find_project(project_id).is_some());
/// assert!(directory.membership(user_id, project_id).is_member());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    projects: HashMap<Uuid, Project>,
    memberships: HashMap<(Uuid, Uuid), Membership>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a project.
    ///
    /// # Arguments
    ///
    /// * `project` - The project record
    ///
    /// # Returns
    ///
    /// The project id, for convenience when wiring up fixtures
    pub fn insert_project(&mut self, project: Project) -> Uuid {
        let id = project.id;
        self.projects.insert(id, project);
        id
    }

    /// Record a user's role within a project.
    ///
    /// Setting `Membership::None` removes any existing record.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user
    /// * `project_id` - The project
    /// * `role` - The role to record
    pub fn set_membership(&mut self, user_id: Uuid, project_id: Uuid, role: Membership) {
        if role == Membership::None {
            self.memberships.remove(&(user_id, project_id));
        } else {
            self.memberships.insert((user_id, project_id), role);
        }
    }
}

impl Directory for InMemoryDirectory {
    fn find_project(&self, project_id: Uuid) -> Option<Project> {
        self.projects.get(&project_id).cloned()
    }

    fn membership(&self, user_id: Uuid, project_id: Uuid) -> Membership {
        self.memberships
            .get(&(user_id, project_id))
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory() {
        let directory = InMemoryDirectory::new();

        assert!(directory.find_project(Uuid::now_v7()).is_none());
        assert_eq!(
            directory.membership(Uuid::now_v7(), Uuid::now_v7()),
            Membership::None
        );
    }

    #[test]
    fn test_project_lookup() {
        let mut directory = InMemoryDirectory::new();
        let project_id = directory.insert_project(Project::new("P", "p", Uuid::now_v7()));

        let found = directory.find_project(project_id).unwrap();
        assert_eq!(found.id, project_id);
    }

    #[test]
    fn test_membership_lifecycle() {
        let mut directory = InMemoryDirectory::new();
        let user_id = Uuid::now_v7();
        let project_id = Uuid::now_v7();

        directory.set_membership(user_id, project_id, Membership::Manager);
        assert!(directory.membership(user_id, project_id).is_manager());

        directory.set_membership(user_id, project_id, Membership::None);
        assert_eq!(directory.membership(user_id, project_id), Membership::None);
    }
}
