//! Project domain models
//!
//! This module provides the Project entity: the container that owns issues,
//! boards, code, and the other project-scoped resources. Projects carry the
//! visibility and ownership facts the access-control engine reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::actor::Actor;

/// A hosted project.
///
/// Projects are the unit of scoping for access control:
/// - Public projects are readable by everyone, including anonymous visitors
/// - Private projects are only visible to their members
/// - Each project has exactly one owner, tracked by user id
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use forge_model::Project;
///
/// let owner_id = Uuid::now_v7();
/// let project = Project::new("Weekly Planner", "weekly-planner", owner_id);
/// assert_eq!(project.name, "Weekly Planner");
/// assert!(!project.is_public);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project
    pub id: Uuid,

    /// Human-readable name
    pub name: String,

    /// URL-friendly slug (unique across the site)
    pub slug: String,

    /// Project description
    pub description: Option<String>,

    /// Whether the project is visible to everyone
    pub is_public: bool,

    /// User who owns the project
    pub owner_id: Uuid,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,

    /// Custom metadata for extensibility
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Tags for categorization and filtering
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Creates a new private project.
    ///
    /// The project is created with:
    /// - A newly generated UUID v7 ID
    /// - Private visibility
    /// - Current timestamp for created_at and updated_at
    ///
    /// # Arguments
    ///
    /// * `name` - Project name
    /// * `slug` - URL-friendly slug (must be unique across the site)
    /// * `owner_id` - User who owns the project
    ///
    /// # Examples
    ///
    /// ```
    /// use uuid::Uuid;
    /// use forge_model::Project;
    ///
    /// let project = Project::new("My Project", "my-project", Uuid::now_v7());
    /// ```
    pub fn new(name: impl Into<String>, slug: impl Into<String>, owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            is_public: false,
            owner_id,
            created_at: now,
            updated_at: now,
            metadata: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// Make the project publicly visible.
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Set the project description.
    ///
    /// # Arguments
    ///
    /// * `description` - The description text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether the given actor owns this project.
    ///
    /// The anonymous actor never owns a project.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor to check
    ///
    /// # Returns
    ///
    /// `true` if the actor is the project owner
    pub fn is_owned_by(&self, actor: &Actor) -> bool {
        !actor.is_anonymous && self.owner_id == actor.id
    }
}
