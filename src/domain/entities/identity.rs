//! Surrogate identity shared by the clinic entities.
//!
//! An entity is either still transient (no store-assigned identifier) or
//! durable. Transient entities only compare equal to themselves, which is
//! tracked with a process-unique [`InstanceToken`] minted at construction.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Process-unique marker for one constructed entity instance.
///
/// Cloning an entity copies its token, so a clone of a transient entity is
/// the same entity, not a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceToken(u64);

impl InstanceToken {
    fn mint() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identity of an entity that may or may not have been persisted yet.
///
/// Equality and hashing of entities delegate to this tag:
///
/// - `Unassigned` compares by instance token (same instance only)
/// - `Assigned` compares by the persisted identifier
/// - the two variants never compare equal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identity {
    Unassigned(InstanceToken),
    Assigned(i32),
}

impl Identity {
    /// Fresh identity for a newly constructed, not yet persisted entity.
    pub fn transient() -> Self {
        Self::Unassigned(InstanceToken::mint())
    }

    pub fn assigned(id: i32) -> Self {
        Self::Assigned(id)
    }

    /// The persisted identifier, if the store has assigned one.
    pub fn id(&self) -> Option<i32> {
        match self {
            Self::Assigned(id) => Some(*id),
            Self::Unassigned(_) => None,
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unassigned(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_identities_are_distinct() {
        let a = Identity::transient();
        let b = Identity::transient();

        assert_ne!(a, b);
        assert_eq!(a, a);
        assert!(a.is_transient());
        assert!(a.id().is_none());
    }

    #[test]
    fn test_assigned_identities_compare_by_id() {
        assert_eq!(Identity::assigned(7), Identity::assigned(7));
        assert_ne!(Identity::assigned(7), Identity::assigned(8));
        assert_eq!(Identity::assigned(7).id(), Some(7));
    }

    #[test]
    fn test_transient_never_equals_assigned() {
        let transient = Identity::transient();
        assert_ne!(transient, Identity::assigned(1));
        assert_ne!(Identity::assigned(1), transient);
    }
}
