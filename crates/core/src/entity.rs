//! Entity trait: records with a stable identity.

/// Minimal interface shared by identified domain records (clients, sales,
/// operators).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
