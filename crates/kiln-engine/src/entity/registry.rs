use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::{Component, EntityId};

/// Type-keyed component storage for one entity.
///
/// Holds zero or one component per concrete type. Lookup is explicit:
/// a missing component is `None`, never a silently fabricated default.
/// Iteration order across component types is unspecified and not part
/// of the contract.
pub struct ComponentRegistry {
    owner: EntityId,
    components: HashMap<TypeId, Box<dyn Component>>,
}

impl ComponentRegistry {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            components: HashMap::new(),
        }
    }

    /// The entity every stored component belongs to.
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    /// Stores a component keyed by its type, replacing any prior
    /// instance of the same type.
    ///
    /// A replaced instance is finalized before the new one starts. The
    /// new component gets the owner id stamped and its `initialize`
    /// hook invoked synchronously, exactly once; the hook's result is
    /// returned.
    pub fn add_component<T: Component>(&mut self, mut component: T) -> bool {
        if let Some(mut previous) = self.components.remove(&TypeId::of::<T>()) {
            previous.finalize();
        }

        component.set_owner(self.owner);
        let initialized = component.initialize();
        self.components
            .insert(TypeId::of::<T>(), Box::new(component));
        initialized
    }

    /// Returns the stored component of type `T`, if one was added.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&TypeId::of::<T>())
            .and_then(|c| (c.as_ref() as &dyn Any).downcast_ref::<T>())
    }

    /// Mutable counterpart of [`get_component`](Self::get_component).
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| (c.as_mut() as &mut dyn Any).downcast_mut::<T>())
    }

    pub fn has_component<T: Component>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Finalizes and drops the component of type `T`. Returns whether
    /// one was stored.
    pub fn remove_component<T: Component>(&mut self) -> bool {
        match self.components.remove(&TypeId::of::<T>()) {
            Some(mut component) => {
                component.finalize();
                true
            }
            None => false,
        }
    }

    /// Invokes `run` on every stored component exactly once.
    pub fn run_components(&mut self) {
        for component in self.components.values_mut() {
            component.run();
        }
    }

    /// Invokes `draw` on every stored component exactly once.
    pub fn draw_components(&mut self) {
        for component in self.components.values_mut() {
            component.draw();
        }
    }

    /// Invokes `finalize` on every stored component exactly once.
    ///
    /// The owning entity must call this before it is destroyed.
    pub fn finalize_components(&mut self) {
        for component in self.components.values_mut() {
            component.finalize();
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
