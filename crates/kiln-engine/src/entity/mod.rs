//! Entities and type-keyed component storage.
//!
//! An entity is identified by an [`EntityId`] and owns at most one
//! component per concrete type through a [`ComponentRegistry`]. The
//! registry drives the initialize/run/draw/finalize lifecycle of its
//! components; concrete entities live outside this crate and implement
//! the [`Entity`] contract for the application loop.

mod component;
mod registry;

use std::sync::atomic::{AtomicU64, Ordering};

pub use component::Component;
pub use registry::ComponentRegistry;

static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Opaque entity identity.
///
/// Ids are process-unique and never reused; a component's owner
/// back-reference is stored as the id of the entity holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Allocates a fresh id.
    pub fn next() -> Self {
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Lifecycle contract implemented by concrete entities.
///
/// The owning application loop calls these hooks; an entity typically
/// forwards them to its registry's `run_components`/`draw_components`/
/// `finalize_components`. `finalize` must run before the entity is
/// dropped so components get their teardown hook.
pub trait Entity {
    fn initialize(&mut self) -> bool;
    fn run(&mut self);
    fn draw(&mut self);
    fn finalize(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_are_unique() {
        let a = EntityId::next();
        let b = EntityId::next();
        assert_ne!(a, b);
        assert_ne!(a.raw(), b.raw());
    }
}
