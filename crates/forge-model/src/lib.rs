//! # Forge Domain Model
//!
//! This crate provides the core domain entities for the Forge
//! project-hosting platform, shared by the web frontend, the API, and the
//! access-control engine.
//!
//! ## Overview
//!
//! The forge-model crate handles:
//! - **Actors**: Request identities (signed-in users, anonymous visitors, site managers)
//! - **Projects**: Containers that own project-scoped resources
//! - **Memberships**: The role an actor holds within a project
//!
//! ## Architecture
//!
//! ```text
//! Actor
//!   ├─ Membership (none / member / manager) ─→ Project
//!   │                                            ├─ visibility (public / private)
//!   │                                            └─ owner
//!   └─ privilege flags (anonymous, site manager)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use forge_model::{Actor, Membership, Project};
//! use uuid::Uuid;
//!
//! // Create a project owner and their project
//! let owner = Actor::new(Uuid::now_v7());
//! let project = Project::new("Weekly Planner", "weekly-planner", owner.id).public();
//!
//! assert!(project.is_owned_by(&owner));
//! assert!(Membership::Manager.is_member());
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `forge-access`: The access-control decision engine
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod actor;
pub mod membership;
pub mod project;

// Re-export main types for convenience
pub use actor::Actor;
pub use membership::Membership;
pub use project::Project;
