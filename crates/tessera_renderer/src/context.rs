/// Re-exports the shared GPU context supplied by `tessera_core` and adds a
/// small helper so the rest of the renderer can reference device/queue without
/// repeating `context.device` / `context.queue` everywhere.
///
/// The adapter/surface setup lives in `tessera_app`; the renderer only
/// receives an already-initialised `EngineContext`.
pub use tessera_core::context::EngineContext;

use wgpu::{Device, Queue};

/// Borrows the wgpu `Device` from an `EngineContext`.
#[inline]
pub fn device(ctx: &EngineContext) -> &Device {
    &ctx.device
}

/// Borrows the wgpu `Queue` from an `EngineContext`.
#[inline]
pub fn queue(ctx: &EngineContext) -> &Queue {
    &ctx.queue
}
