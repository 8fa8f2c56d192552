//! # Forge Access Control
//!
//! This crate provides the access-control decision engine for the Forge
//! project-hosting platform: given an actor, a resource, and an operation,
//! it answers the single question — is the action permitted?
//!
//! ## Overview
//!
//! The forge-access crate handles:
//! - **Operations**: The closed set of things an actor can request
//! - **Resources**: Global vs. project-scoped resource references
//! - **Decisions**: The policy combining roles, authorship, visibility,
//!   and per-type exceptions
//! - **Creation**: The separate predicate family for not-yet-existing
//!   resources
//!
//! ## Architecture
//!
//! ```text
//! is_allowed(directory, actor, resource, operation)
//!   ├─ site-manager override
//!   ├─ Resource::Global ─→ global policy
//!   │                        ├─ personal-attachment exclusivity
//!   │                        ├─ open-read default
//!   │                        └─ identity / manager table
//!   └─ Resource::Scoped ─→ project policy
//!                            ├─ manager / author short-circuit
//!                            ├─ delegation to the parent resource ──┐
//!                            └─ role / visibility matrix            │
//!                                       (recursion, bounded) ←──────┘
//! ```
//!
//! The engine is purely functional and stateless: all external state —
//! project records and the membership relation — is read through the
//! [`Directory`] port handed into every call. It is safe to invoke from
//! arbitrarily many threads at once.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uuid::Uuid;
//! use forge_model::{Actor, Membership, Project};
//! use forge_access::directory::InMemoryDirectory;
//! use forge_access::{is_allowed, Operation, Resource, ResourceType};
//!
//! let mut directory = InMemoryDirectory::new();
//! let project_id = directory.insert_project(
//!     Project::new("Weekly Planner", "weekly-planner", Uuid::now_v7()).public(),
//! );
//!
//! let member = Actor::new(Uuid::now_v7());
//! directory.set_membership(member.id, project_id, Membership::Member);
//!
//! let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, project_id);
//! assert!(is_allowed(&directory, &member, &issue, Operation::Close).unwrap());
//! ```
//!
//! ## Denials vs. faults
//!
//! Any (resource type, operation) combination no rule grants resolves to
//! `Ok(false)`: the policy is closed-world and fails safe. An
//! [`AccessError`], by contrast, reports a broken resource graph (a scoped
//! resource whose project is gone, a delegating resource without a parent)
//! and must be surfaced as an internal error, never as "forbidden".
//!
//! ## Cross-Crate Integration
//!
//! This crate works with `forge-model`, which supplies the [`Actor`],
//! [`Project`], and [`Membership`](forge_model::Membership) entities.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod create;
pub mod directory;
pub mod engine;
pub mod error;
pub mod operations;
pub mod resources;

mod authorship;
mod global;
mod scoped;

// Re-export main types for convenience
pub use create::{is_global_resource_creatable, is_project_resource_creatable, is_resource_creatable};
pub use directory::{Directory, InMemoryDirectory};
pub use engine::{is_allowed, MAX_DELEGATION_DEPTH};
pub use error::{AccessError, AccessResult};
pub use operations::Operation;
pub use resources::{GlobalResource, Resource, ResourceType, ScopedResource};

// Convenience re-exports from the model crate
pub use forge_model::{Actor, Membership, Project};
