//! # Resources
//!
//! Defines the closed set of resource types subject to access control and
//! the `Resource` reference the decision engine evaluates.
//!
//! Resources come in two shapes: global resources (users, avatars, the
//! project entity itself, user-scoped attachments) and project-scoped
//! resources (everything that lives inside a project). The two shapes are
//! separate variants with their own required fields, so a project-scoped
//! resource cannot exist without a project reference.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forge_model::Actor;

/// Resource types that can have access rules applied.
///
/// The set is closed: the policy tables match exhaustively over it and new
/// types surface as compile-time gaps in those tables, not as silent allows.
///
/// Several overlapping subsets drive the rules:
/// - **Authored types** grant their author full access
///   ([`grants_author_access`](Self::grants_author_access))
/// - **Delegating types** derive their permission from their parent resource
///   ([`delegates_to_parent`](Self::delegates_to_parent))
/// - **Public-creatable types** may be created by signed-in nonmembers on
///   public projects ([`creatable_on_public`](Self::creatable_on_public))
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    // Content resources
    /// An issue.
    IssuePost,
    /// A comment on an issue.
    IssueComment,
    /// A comment outside the issue tracker.
    NonIssueComment,
    /// A board (forum) post.
    BoardPost,
    /// A comment on a commit.
    CommitComment,
    /// A review discussion thread.
    CommentThread,
    /// A comment inside a review thread.
    ReviewComment,

    // Issue sub-objects
    /// The open/closed state of an issue.
    IssueState,
    /// The assignee of an issue.
    IssueAssignee,
    /// The milestone of an issue.
    IssueMilestone,

    // Other project resources
    /// An uploaded attachment (parent decides its fate).
    Attachment,
    /// The code repository.
    Code,
    /// A fork of the code repository.
    Fork,

    // Global resources
    /// A user account.
    User,
    /// A user's avatar image.
    UserAvatar,
    /// The project entity itself.
    Project,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::IssuePost => "issue_post",
            ResourceType::IssueComment => "issue_comment",
            ResourceType::NonIssueComment => "nonissue_comment",
            ResourceType::BoardPost => "board_post",
            ResourceType::CommitComment => "commit_comment",
            ResourceType::CommentThread => "comment_thread",
            ResourceType::ReviewComment => "review_comment",
            ResourceType::IssueState => "issue_state",
            ResourceType::IssueAssignee => "issue_assignee",
            ResourceType::IssueMilestone => "issue_milestone",
            ResourceType::Attachment => "attachment",
            ResourceType::Code => "code",
            ResourceType::Fork => "fork",
            ResourceType::User => "user",
            ResourceType::UserAvatar => "user_avatar",
            ResourceType::Project => "project",
        }
    }

    /// Parse resource type from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(ResourceType)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use forge_access::resources::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("issue_post"), Some(ResourceType::IssuePost));
    /// assert_eq!(ResourceType::parse("code"), Some(ResourceType::Code));
    /// assert_eq!(ResourceType::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "issue_post" | "issue" => Some(ResourceType::IssuePost),
            "issue_comment" => Some(ResourceType::IssueComment),
            "nonissue_comment" | "non_issue_comment" => Some(ResourceType::NonIssueComment),
            "board_post" | "post" => Some(ResourceType::BoardPost),
            "commit_comment" => Some(ResourceType::CommitComment),
            "comment_thread" => Some(ResourceType::CommentThread),
            "review_comment" => Some(ResourceType::ReviewComment),
            "issue_state" => Some(ResourceType::IssueState),
            "issue_assignee" => Some(ResourceType::IssueAssignee),
            "issue_milestone" => Some(ResourceType::IssueMilestone),
            "attachment" | "attachments" => Some(ResourceType::Attachment),
            "code" | "repository" | "repo" => Some(ResourceType::Code),
            "fork" => Some(ResourceType::Fork),
            "user" | "users" => Some(ResourceType::User),
            "user_avatar" | "avatar" => Some(ResourceType::UserAvatar),
            "project" | "projects" => Some(ResourceType::Project),
            _ => None,
        }
    }

    /// Get all resource types.
    pub fn all() -> Vec<Self> {
        vec![
            ResourceType::IssuePost,
            ResourceType::IssueComment,
            ResourceType::NonIssueComment,
            ResourceType::BoardPost,
            ResourceType::CommitComment,
            ResourceType::CommentThread,
            ResourceType::ReviewComment,
            ResourceType::IssueState,
            ResourceType::IssueAssignee,
            ResourceType::IssueMilestone,
            ResourceType::Attachment,
            ResourceType::Code,
            ResourceType::Fork,
            ResourceType::User,
            ResourceType::UserAvatar,
            ResourceType::Project,
        ]
    }

    /// Check if resources of this type grant their author full access.
    ///
    /// Authorship is only defined for this subset; for every other type the
    /// authorship rule answers no rather than erroring.
    ///
    /// # Example
    ///
    /// ```
    /// use forge_access::resources::ResourceType;
    ///
    /// assert!(ResourceType::IssuePost.grants_author_access());
    /// assert!(!ResourceType::Code.grants_author_access());
    /// ```
    pub fn grants_author_access(&self) -> bool {
        matches!(
            self,
            ResourceType::IssuePost
                | ResourceType::IssueComment
                | ResourceType::NonIssueComment
                | ResourceType::BoardPost
                | ResourceType::CommitComment
                | ResourceType::CommentThread
                | ResourceType::ReviewComment
        )
    }

    /// Check if resources of this type derive their permission from their
    /// parent resource.
    ///
    /// Touching the shell of a sub-object (an issue's state, assignee, or
    /// milestone, or an attachment) requires the corresponding access to its
    /// parent.
    pub fn delegates_to_parent(&self) -> bool {
        matches!(
            self,
            ResourceType::IssueState
                | ResourceType::IssueAssignee
                | ResourceType::IssueMilestone
                | ResourceType::Attachment
        )
    }

    /// Check if signed-in nonmembers may create resources of this type on a
    /// public project.
    pub fn creatable_on_public(&self) -> bool {
        matches!(
            self,
            ResourceType::IssuePost
                | ResourceType::BoardPost
                | ResourceType::IssueComment
                | ResourceType::NonIssueComment
                | ResourceType::Fork
                | ResourceType::CommitComment
                | ResourceType::ReviewComment
        )
    }
}

/// A global resource: one that does not belong to any project.
///
/// Users, avatars, user-scoped attachments, and the project entity itself
/// are global. The `id` is the identity of the underlying entity — for a
/// resource of type [`ResourceType::Project`] it is the project id, for
/// [`ResourceType::User`] the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalResource {
    /// Identity of the underlying entity
    pub id: Uuid,

    /// Type tag
    pub resource_type: ResourceType,

    /// Parent resource, if any (e.g. the user a temporary upload belongs to)
    pub parent: Option<Box<Resource>>,
}

/// A project-scoped resource.
///
/// Every scoped resource carries its owning project id by construction;
/// there is no way to build one without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopedResource {
    /// Identity of the underlying entity
    pub id: Uuid,

    /// Type tag
    pub resource_type: ResourceType,

    /// The project this resource belongs to
    pub project_id: Uuid,

    /// Parent resource, if any (e.g. the issue an attachment hangs off)
    pub parent: Option<Box<Resource>>,

    /// The author, for types that carry authorship semantics
    pub author_id: Option<Uuid>,
}

/// A reference to an access-controlled entity.
///
/// The two variants carry their own required fields: a global resource has
/// no project reference, a scoped resource has a mandatory one.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use forge_access::resources::{Resource, ResourceType};
///
/// let project_id = Uuid::now_v7();
/// let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, project_id);
/// assert_eq!(issue.project_id(), Some(project_id));
///
/// let user = Resource::global(Uuid::now_v7(), ResourceType::User);
/// assert_eq!(user.project_id(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Resource {
    /// A resource that belongs to no project.
    Global(GlobalResource),

    /// A resource owned by a project.
    Scoped(ScopedResource),
}

impl Resource {
    /// Creates a global resource with no parent.
    ///
    /// # Arguments
    ///
    /// * `id` - Identity of the underlying entity
    /// * `resource_type` - Type tag
    pub fn global(id: Uuid, resource_type: ResourceType) -> Self {
        Resource::Global(GlobalResource {
            id,
            resource_type,
            parent: None,
        })
    }

    /// Creates a project-scoped resource with no parent and no author.
    ///
    /// # Arguments
    ///
    /// * `id` - Identity of the underlying entity
    /// * `resource_type` - Type tag
    /// * `project_id` - The owning project
    pub fn scoped(id: Uuid, resource_type: ResourceType, project_id: Uuid) -> Self {
        Resource::Scoped(ScopedResource {
            id,
            resource_type,
            project_id,
            parent: None,
            author_id: None,
        })
    }

    /// Attach a parent resource.
    ///
    /// # Arguments
    ///
    /// * `parent` - The resource this one hangs off
    pub fn with_parent(mut self, parent: Resource) -> Self {
        let slot = match &mut self {
            Resource::Global(g) => &mut g.parent,
            Resource::Scoped(s) => &mut s.parent,
        };
        *slot = Some(Box::new(parent));
        self
    }

    /// Record the author of a scoped resource.
    ///
    /// Has no effect on global resources, which carry no authorship.
    ///
    /// # Arguments
    ///
    /// * `author_id` - The authoring user's id
    pub fn with_author(mut self, author_id: Uuid) -> Self {
        if let Resource::Scoped(s) = &mut self {
            s.author_id = Some(author_id);
        }
        self
    }

    /// Identity of the underlying entity.
    pub fn id(&self) -> Uuid {
        match self {
            Resource::Global(g) => g.id,
            Resource::Scoped(s) => s.id,
        }
    }

    /// Type tag of this resource.
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Resource::Global(g) => g.resource_type,
            Resource::Scoped(s) => s.resource_type,
        }
    }

    /// The owning project id, if this resource is project-scoped.
    pub fn project_id(&self) -> Option<Uuid> {
        match self {
            Resource::Global(_) => None,
            Resource::Scoped(s) => Some(s.project_id),
        }
    }

    /// Parent resource, if any.
    pub fn parent(&self) -> Option<&Resource> {
        match self {
            Resource::Global(g) => g.parent.as_deref(),
            Resource::Scoped(s) => s.parent.as_deref(),
        }
    }

    /// Check whether the given actor authored this resource.
    ///
    /// Global resources and resources without a recorded author are never
    /// authored by anyone; the anonymous actor authors nothing.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor to check
    pub fn is_authored_by(&self, actor: &Actor) -> bool {
        match self {
            Resource::Global(_) => false,
            Resource::Scoped(s) => {
                !actor.is_anonymous && s.author_id.is_some_and(|author| author == actor.id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_roundtrip() {
        for resource_type in ResourceType::all() {
            assert_eq!(
                ResourceType::parse(resource_type.as_str()),
                Some(resource_type)
            );
        }
    }

    #[test]
    fn test_all_resource_types_count() {
        assert_eq!(ResourceType::all().len(), 16);
    }

    #[test]
    fn test_authored_subset() {
        assert!(ResourceType::IssuePost.grants_author_access());
        assert!(ResourceType::IssueComment.grants_author_access());
        assert!(ResourceType::NonIssueComment.grants_author_access());
        assert!(ResourceType::BoardPost.grants_author_access());
        assert!(ResourceType::CommitComment.grants_author_access());
        assert!(ResourceType::CommentThread.grants_author_access());
        assert!(ResourceType::ReviewComment.grants_author_access());

        assert!(!ResourceType::Code.grants_author_access());
        assert!(!ResourceType::Attachment.grants_author_access());
        assert!(!ResourceType::Project.grants_author_access());
    }

    #[test]
    fn test_delegating_subset() {
        assert!(ResourceType::IssueState.delegates_to_parent());
        assert!(ResourceType::IssueAssignee.delegates_to_parent());
        assert!(ResourceType::IssueMilestone.delegates_to_parent());
        assert!(ResourceType::Attachment.delegates_to_parent());

        assert!(!ResourceType::IssuePost.delegates_to_parent());
        assert!(!ResourceType::Code.delegates_to_parent());
    }

    #[test]
    fn test_public_creatable_subset() {
        assert!(ResourceType::IssuePost.creatable_on_public());
        assert!(ResourceType::BoardPost.creatable_on_public());
        assert!(ResourceType::Fork.creatable_on_public());

        assert!(!ResourceType::Code.creatable_on_public());
        assert!(!ResourceType::IssueMilestone.creatable_on_public());
        assert!(!ResourceType::Project.creatable_on_public());
    }

    #[test]
    fn test_scoped_resource_fields() {
        let project_id = Uuid::now_v7();
        let author_id = Uuid::now_v7();
        let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, project_id)
            .with_author(author_id);

        assert_eq!(issue.project_id(), Some(project_id));
        assert_eq!(issue.resource_type(), ResourceType::IssuePost);
        assert!(issue.is_authored_by(&Actor::new(author_id)));
        assert!(!issue.is_authored_by(&Actor::new(Uuid::now_v7())));
    }

    #[test]
    fn test_global_resource_has_no_project() {
        let user = Resource::global(Uuid::now_v7(), ResourceType::User);
        assert_eq!(user.project_id(), None);
        assert!(!user.is_authored_by(&Actor::new(Uuid::now_v7())));
    }

    #[test]
    fn test_parent_chain() {
        let project_id = Uuid::now_v7();
        let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, project_id);
        let attachment = Resource::scoped(Uuid::now_v7(), ResourceType::Attachment, project_id)
            .with_parent(issue.clone());

        let parent = attachment.parent().unwrap();
        assert_eq!(parent.id(), issue.id());
        assert_eq!(parent.resource_type(), ResourceType::IssuePost);
    }

    #[test]
    fn test_anonymous_authors_nothing() {
        let project_id = Uuid::now_v7();
        // An issue whose author column is the nil id must not match the
        // anonymous actor, whose id is also nil.
        let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, project_id)
            .with_author(Uuid::nil());

        assert!(!issue.is_authored_by(&Actor::anonymous()));
    }
}
