//! Owner aggregate root and its pet collection.

use std::collections::HashSet;
use std::ops::Deref;

use super::identity::Identity;
use super::pet::Pet;

/// A pet owner, root of the owner/pet aggregate.
///
/// The pet collection is private: pets join the aggregate only through
/// [`Owner::add_pet`], and readers get a name-ordered snapshot from
/// [`Owner::pets`].
///
/// The collection is built together with the owner, so it is always
/// initialized. Transient owners must still not be shared across threads
/// while being mutated; durable owners are loaded fresh per request.
#[derive(Debug, Clone)]
pub struct Owner {
    identity: Identity,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pets: HashSet<Pet>,
}

impl Owner {
    /// Creates a transient owner with empty fields and no pets.
    pub fn new() -> Self {
        Self {
            identity: Identity::transient(),
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            telephone: String::new(),
            pets: HashSet::new(),
        }
    }

    /// Creates an owner that already carries a persisted identifier.
    pub fn with_id(id: i32) -> Self {
        Self {
            identity: Identity::assigned(id),
            ..Self::new()
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.identity.id()
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Records the identifier assigned by the store.
    pub fn assign_id(&mut self, id: i32) {
        self.identity = Identity::assigned(id);
    }

    /// Non-owning reference to this owner, as stored on its pets.
    pub fn reference(&self) -> OwnerRef {
        OwnerRef {
            identity: self.identity,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }

    /// Associates `pet` with this owner.
    ///
    /// Points the pet's back-reference at this owner, then registers a
    /// snapshot of it in the owner's pet set. Later changes to `pet` are not
    /// seen by the owner, so fill the pet in before adding it. Adding the
    /// same pet again leaves the set unchanged.
    pub fn add_pet(&mut self, pet: &mut Pet) {
        pet.set_owner(self.reference());
        self.pets.insert(pet.clone());
    }

    /// Pets ordered by name, as a read-only snapshot.
    ///
    /// Names compare case-sensitively by scalar value; pets with the same
    /// name fall back to identity order so the result is deterministic.
    ///
    /// The returned list cannot be used to change the owner's pets:
    ///
    /// ```compile_fail
    /// use petclinic::domain::entities::{Owner, Pet};
    ///
    /// let owner = Owner::new();
    /// let stray = Pet::new();
    /// let mut pets = owner.pets();
    /// pets.push(&stray);
    /// ```
    pub fn pets(&self) -> PetList<'_> {
        let mut pets: Vec<&Pet> = self.pets.iter().collect();
        pets.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.identity().cmp(&b.identity()))
        });
        PetList(pets)
    }

    /// The underlying pet set, in no particular order.
    pub fn pets_internal(&self) -> &HashSet<Pet> {
        &self.pets
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Owner {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Owner {}

/// Back-reference from a pet to its owner.
///
/// Carries the owner's identity and a snapshot of the owner's name taken
/// when the association was made; stores rebuild it on every load.
#[derive(Debug, Clone)]
pub struct OwnerRef {
    identity: Identity,
    first_name: String,
    last_name: String,
}

impl OwnerRef {
    /// Reference to an owner known only by its persisted row.
    pub fn persisted(id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            identity: Identity::assigned(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.identity.id()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"{first} {last}"`, with a single space and no trimming.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this reference points at `owner`.
    pub fn refers_to(&self, owner: &Owner) -> bool {
        self.identity == owner.identity
    }
}

/// Name-ordered, read-only view over an owner's pets.
#[derive(Debug)]
pub struct PetList<'a>(Vec<&'a Pet>);

impl<'a> Deref for PetList<'a> {
    type Target = [&'a Pet];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for PetList<'a> {
    type Item = &'a Pet;
    type IntoIter = std::vec::IntoIter<&'a Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PetType;

    fn test_owner() -> Owner {
        let mut owner = Owner::new();
        owner.first_name = "Test".to_string();
        owner.last_name = "Owner".to_string();
        owner
    }

    fn named_pet(name: &str, type_name: &str) -> Pet {
        let mut pet = Pet::new();
        pet.name = name.to_string();
        pet.pet_type = Some(PetType::new(1, type_name));
        pet
    }

    fn names(owner: &Owner) -> Vec<String> {
        owner.pets().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_add_pet_sets_owner_and_registers_pet() {
        let mut owner = test_owner();
        let mut whiskers = named_pet("Whiskers", "cat");
        assert!(owner.pets().is_empty());

        owner.add_pet(&mut whiskers);

        let pets = owner.pets();
        assert_eq!(pets.len(), 1);
        assert_eq!(*pets[0], whiskers);
        assert!(pets[0].owner().is_some_and(|o| o.refers_to(&owner)));
        assert!(whiskers.owner().is_some_and(|o| o.refers_to(&owner)));
    }

    #[test]
    fn test_pets_are_sorted_by_name() {
        let mut owner = test_owner();
        let mut whiskers = named_pet("Whiskers", "cat");
        let mut buddy = named_pet("Buddy", "dog");

        owner.add_pet(&mut whiskers);
        owner.add_pet(&mut buddy);

        assert_eq!(names(&owner), vec!["Buddy", "Whiskers"]);
        let pets = owner.pets();
        assert_eq!(*pets[0], buddy);
        assert_eq!(*pets[1], whiskers);
    }

    #[test]
    fn test_pet_sorting_is_case_sensitive() {
        let mut owner = test_owner();
        for name in ["bella", "Zeus", "Apollo"] {
            let mut pet = named_pet(name, "dog");
            owner.add_pet(&mut pet);
        }

        assert_eq!(names(&owner), vec!["Apollo", "Zeus", "bella"]);
    }

    #[test]
    fn test_add_pet_registers_snapshot() {
        let mut owner = test_owner();
        let mut pet = Pet::new();

        owner.add_pet(&mut pet);
        pet.name = "Fluffy".to_string();

        assert_eq!(names(&owner), vec![""]);
        assert!(owner.pets_internal().contains(&pet));
    }

    #[test]
    fn test_pets_empty_when_no_pets() {
        let owner = test_owner();

        assert!(owner.pets().is_empty());
        assert!(owner.pets_internal().is_empty());
    }

    #[test]
    fn test_add_same_pet_twice_is_idempotent() {
        let mut owner = test_owner();
        let mut pet = named_pet("Leo", "cat");

        owner.add_pet(&mut pet);
        owner.add_pet(&mut pet);

        assert_eq!(owner.pets().len(), 1);
        assert_eq!(owner.pets_internal().len(), 1);
    }

    #[test]
    fn test_transient_pets_with_same_name_are_both_kept() {
        let mut owner = test_owner();
        let mut first = named_pet("Leo", "cat");
        let mut second = named_pet("Leo", "cat");

        owner.add_pet(&mut first);
        owner.add_pet(&mut second);

        assert_eq!(owner.pets().len(), 2);
    }

    #[test]
    fn test_pets_snapshot_is_detached_from_owner() {
        let mut owner = test_owner();
        let mut pet = named_pet("Leo", "cat");
        owner.add_pet(&mut pet);

        let mut copied: Vec<Pet> = owner.pets().into_iter().cloned().collect();
        copied.clear();
        copied.push(named_pet("Intruder", "snake"));

        assert_eq!(names(&owner), vec!["Leo"]);
        assert_eq!(owner.pets_internal().len(), 1);
    }

    #[test]
    fn test_owner_reference_full_name() {
        let owner = test_owner();
        let reference = owner.reference();

        assert_eq!(reference.full_name(), "Test Owner");
        assert!(reference.id().is_none());
        assert!(reference.refers_to(&owner));
        assert!(!reference.refers_to(&test_owner()));
    }

    #[test]
    fn test_persisted_reference_matches_persisted_owner() {
        let owner = Owner::with_id(3);
        let reference = OwnerRef::persisted(3, "Jean", "Coleman");

        assert!(reference.refers_to(&owner));
        assert_eq!(reference.id(), Some(3));
        assert_eq!(reference.first_name(), "Jean");
        assert_eq!(reference.last_name(), "Coleman");
    }

    #[test]
    fn test_owner_equality_follows_identity() {
        let owner = test_owner();
        assert_eq!(owner, owner.clone());
        assert_ne!(owner, test_owner());
        assert_eq!(Owner::with_id(1), Owner::with_id(1));
    }
}
