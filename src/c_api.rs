use crate::{
    body::{Body, Flags, Size},
    velocity::Velocity,
    world::World,
};
use ultraviolet::DVec2;

#[unsafe(no_mangle)]
pub extern "C" fn World_Create() -> *mut World {
    Box::into_raw(Box::new(World::new()))
}

/// # Safety
/// `handle` must come from `World_Create` and not be used afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_Destroy(handle: *mut World) {
    if !handle.is_null() {
        unsafe { drop(Box::from_raw(handle)) };
    }
}

/// # Safety
/// `handle` must be null or a live pointer from `World_Create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_Tick(handle: *mut World, dt_ms: f64) {
    if let Some(world) = unsafe { handle.as_mut() } {
        world.tick(dt_ms);
    }
}

/// # Safety
/// `handle` must be null or a live pointer from `World_Create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_SetGravity(handle: *mut World, gravity: f64) {
    if let Some(world) = unsafe { handle.as_mut() } {
        world.constants.gravity = gravity;
    }
}

/// Appends a body and returns its index, or `usize::MAX` for a null handle.
/// Unknown flag bits are ignored.
///
/// # Safety
/// `handle` must be null or a live pointer from `World_Create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_AddBody(
    handle: *mut World,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    speed: f64,
    angle: f64,
    elasticity: f64,
    flags: u8,
) -> usize {
    match unsafe { handle.as_mut() } {
        Some(world) => world.add_body(Body::new(
            DVec2::new(x, y),
            Size::new(width, height),
            Velocity::new(speed, angle),
            elasticity,
            Flags::from_bits_truncate(flags),
        )),
        None => usize::MAX,
    }
}

/// # Safety
/// `handle` must be null or a live pointer from `World_Create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_GetBodyCount(handle: *const World) -> usize {
    unsafe { handle.as_ref() }.map_or(0, |world| world.bodies().len())
}

/// Bodies in insertion order; valid until the next call that adds a body.
///
/// # Safety
/// `handle` must be null or a live pointer from `World_Create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_GetBodies(handle: *const World) -> *const Body {
    unsafe { handle.as_ref() }.map_or(std::ptr::null(), |world| world.bodies().as_ptr())
}

/// # Safety
/// `handle` must be null or a live pointer from `World_Create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn World_GetHue(handle: *const World) -> f64 {
    unsafe { handle.as_ref() }.map_or(0.0, |world| world.hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_world_through_handle() {
        let handle = World_Create();
        unsafe {
            World_SetGravity(handle, 0.0);
            let index = World_AddBody(handle, 1.0, 2.0, 3.0, 4.0, 0.0, 0.0, 1.0, 0b1111_1101);
            assert_eq!(index, 0);
            World_Tick(handle, 20.0);

            assert_eq!(World_GetBodyCount(handle), 1);
            let body = &*World_GetBodies(handle);
            assert_eq!(body.position, DVec2::new(1.0, 2.0));
            assert_eq!(body.size, Size::new(3.0, 4.0));
            assert_eq!(body.flags, Flags::HAS_COLLIDER | Flags::GRAVITY);
            assert!((World_GetHue(handle) - 0.1).abs() < 1e-12);

            World_Destroy(handle);
        }
    }

    #[test]
    fn null_handles_are_ignored() {
        unsafe {
            World_Tick(std::ptr::null_mut(), 16.0);
            World_Destroy(std::ptr::null_mut());
            assert_eq!(World_GetBodyCount(std::ptr::null()), 0);
            assert!(World_GetBodies(std::ptr::null()).is_null());
            assert_eq!(
                World_AddBody(std::ptr::null_mut(), 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0),
                usize::MAX
            );
        }
    }
}
