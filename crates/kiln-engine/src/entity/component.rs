use std::any::Any;

use super::EntityId;

/// A unit of behavior/data attached to exactly one entity.
///
/// The registry is the sole owner of a component; it stamps the owning
/// entity's id via `set_owner` before `initialize` runs. Construction
/// may perform I/O (GPU resource creation, file loads) and can fail —
/// `initialize` reports that through its return value, and the failure
/// policy is the component's own.
///
/// `Any` as a supertrait lets the registry hand back concrete types
/// from its type-erased storage.
pub trait Component: Any {
    /// Called exactly once, synchronously, when the component is added.
    fn initialize(&mut self) -> bool {
        true
    }

    /// Per-tick update hook.
    fn run(&mut self) {}

    /// Per-frame draw hook.
    fn draw(&mut self) {}

    /// Teardown hook; runs before the component is dropped or replaced.
    fn finalize(&mut self) {}

    /// Records the owning entity. Default implementations may ignore it.
    fn set_owner(&mut self, owner: EntityId) {
        let _ = owner;
    }
}
