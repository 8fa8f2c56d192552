//! Authorship rule
//!
//! Authorship is the only path by which a nonmember or anonymous-adjacent
//! actor without other privileges can touch content: whoever wrote a post
//! or comment keeps full access to it. The rule only applies to the closed
//! set of authored types; for everything else it answers no.

use forge_model::Actor;

use crate::resources::Resource;

/// Check whether the actor's authorship of the resource alone grants access.
///
/// Returns `true` iff the resource's type carries authorship semantics and
/// the actor authored it. Evaluated first inside both category policies and
/// against the container in the creation policy.
pub(crate) fn allowed_if_author(actor: &Actor, resource: &Resource) -> bool {
    resource.resource_type().grants_author_access() && resource.is_authored_by(actor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceType;
    use uuid::Uuid;

    #[test]
    fn test_author_of_authored_type() {
        let author = Actor::new(Uuid::now_v7());
        let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, Uuid::now_v7())
            .with_author(author.id);

        assert!(allowed_if_author(&author, &issue));
    }

    #[test]
    fn test_non_author_denied() {
        let author_id = Uuid::now_v7();
        let issue = Resource::scoped(Uuid::now_v7(), ResourceType::IssuePost, Uuid::now_v7())
            .with_author(author_id);

        let stranger = Actor::new(Uuid::now_v7());
        assert!(!allowed_if_author(&stranger, &issue));
    }

    #[test]
    fn test_authorship_undefined_for_other_types() {
        let actor = Actor::new(Uuid::now_v7());
        // Even with a matching author record, a non-authored type answers no.
        let code = Resource::scoped(Uuid::now_v7(), ResourceType::Code, Uuid::now_v7())
            .with_author(actor.id);

        assert!(!allowed_if_author(&actor, &code));
    }

    #[test]
    fn test_every_authored_type_qualifies() {
        let author = Actor::new(Uuid::now_v7());
        for resource_type in ResourceType::all() {
            let resource = Resource::scoped(Uuid::now_v7(), resource_type, Uuid::now_v7())
                .with_author(author.id);
            assert_eq!(
                allowed_if_author(&author, &resource),
                resource_type.grants_author_access(),
                "authorship mismatch for {}",
                resource_type.as_str()
            );
        }
    }
}
