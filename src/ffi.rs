//! C ABI entry points
//!
//! The host loads the `cdylib`, calls [`on_load`] with a table of callbacks
//! and then drives [`update`] and [`draw`] once per frame from a single
//! thread. Every entry point returns `0` on success; only loading reports
//! failures. Frame calls without a loaded session are logged and skipped.

use std::ffi::c_void;
use std::sync::{Mutex, MutexGuard};

use glam::Vec2;

use crate::config::GameConfig;
use crate::error::{GameError, STATUS_OK};
use crate::platform::{ButtonState, Platform};
use crate::renderer::{Renderer, SpriteInstance, TextureHandle};
use crate::session::Session;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowDims {
    pub width: f32,
    pub height: f32,
}

pub type WindowDimsFn = unsafe extern "C" fn(ctx: *mut c_void) -> WindowDims;
/// Non-zero while the primary pointer button is held
pub type PointerButtonFn = unsafe extern "C" fn(ctx: *mut c_void) -> i32;
/// Returns 0 for unknown textures
pub type LookupTextureFn = unsafe extern "C" fn(ctx: *mut c_void, name: *const u8, len: usize) -> u32;
/// `bytes` holds `len / size_of::<SpriteInstance>()` packed instances
pub type SubmitSpritesFn = unsafe extern "C" fn(ctx: *mut c_void, bytes: *const u8, len: usize);
pub type ReleaseTextureFn = unsafe extern "C" fn(ctx: *mut c_void, handle: u32);

/// Callback table provided by the host at load
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HostApi {
    /// Passed back to every callback; must stay valid until `on_unload`
    pub ctx: *mut c_void,
    pub window_dims: Option<WindowDimsFn>,
    pub pointer_button: Option<PointerButtonFn>,
    pub lookup_texture: Option<LookupTextureFn>,
    pub submit_sprites: Option<SubmitSpritesFn>,
    pub release_texture: Option<ReleaseTextureFn>,
    /// Optional UTF-8 JSON config; null means defaults
    pub config_json: *const u8,
    pub config_len: usize,
}

/// [`HostApi`] with every callback checked present
#[derive(Debug, Clone, Copy)]
struct HostBridge {
    ctx: *mut c_void,
    window_dims: WindowDimsFn,
    pointer_button: PointerButtonFn,
    lookup_texture: LookupTextureFn,
    submit_sprites: SubmitSpritesFn,
    release_texture: ReleaseTextureFn,
}

// SAFETY: the host calls every entry point from the same thread; the mutex
// only exists to give the session a home.
unsafe impl Send for HostBridge {}

impl HostBridge {
    fn new(api: &HostApi) -> Result<Self, GameError> {
        Ok(Self {
            ctx: api.ctx,
            window_dims: api.window_dims.ok_or(GameError::NullHost)?,
            pointer_button: api.pointer_button.ok_or(GameError::NullHost)?,
            lookup_texture: api.lookup_texture.ok_or(GameError::NullHost)?,
            submit_sprites: api.submit_sprites.ok_or(GameError::NullHost)?,
            release_texture: api.release_texture.ok_or(GameError::NullHost)?,
        })
    }
}

impl Platform for HostBridge {
    fn window_dims(&self) -> Vec2 {
        // SAFETY: callback and ctx come from the host table handed to `on_load`
        let dims = unsafe { (self.window_dims)(self.ctx) };
        Vec2::new(dims.width, dims.height)
    }

    fn pointer_button(&self) -> ButtonState {
        // SAFETY: as above
        if unsafe { (self.pointer_button)(self.ctx) } != 0 {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

impl Renderer for HostBridge {
    fn lookup(&mut self, name: &str) -> Option<TextureHandle> {
        // SAFETY: `name` outlives the call; the host copies what it keeps
        let raw = unsafe { (self.lookup_texture)(self.ctx, name.as_ptr(), name.len()) };
        let handle = TextureHandle::from_raw(raw);
        (!handle.is_none()).then_some(handle)
    }

    fn submit(&mut self, sprite: &SpriteInstance) {
        self.submit_all(std::slice::from_ref(sprite));
    }

    fn submit_all(&mut self, sprites: &[SpriteInstance]) {
        let bytes: &[u8] = bytemuck::cast_slice(sprites);
        // SAFETY: `bytes` is valid for the duration of the call
        unsafe { (self.submit_sprites)(self.ctx, bytes.as_ptr(), bytes.len()) };
    }

    fn release(&mut self, handle: TextureHandle) {
        // SAFETY: as above
        unsafe { (self.release_texture)(self.ctx, handle.raw()) };
    }
}

struct Loaded {
    host: HostBridge,
    session: Session,
}

static MODULE: Mutex<Option<Loaded>> = Mutex::new(None);

fn module() -> MutexGuard<'static, Option<Loaded>> {
    // A panic mid-frame leaves plain data behind; keep going with it
    MODULE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn status(result: Result<(), GameError>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => {
            log::error!("{}", e);
            e.status()
        }
    }
}

/// Frame-time status: a missing session is a host sequencing slip, not a
/// failure worth stopping the frame loop for
fn frame_status(result: Result<(), GameError>) -> i32 {
    match result {
        Err(GameError::NotLoaded) => {
            log::warn!("{}, call ignored", GameError::NotLoaded);
            STATUS_OK
        }
        other => status(other),
    }
}

/// # Safety
/// `api.config_json` must be null or point to `api.config_len` readable bytes.
unsafe fn read_config(api: &HostApi) -> Result<GameConfig, GameError> {
    if api.config_json.is_null() {
        return Ok(GameConfig::default());
    }
    // SAFETY: guaranteed by the caller
    let bytes = unsafe { std::slice::from_raw_parts(api.config_json, api.config_len) };
    let json = std::str::from_utf8(bytes)
        .map_err(|e| GameError::InvalidConfig(format!("config is not UTF-8: {}", e)))?;
    GameConfig::from_json(json)
}

/// Load a session. Reloading replaces (and releases) the previous one.
///
/// # Safety
/// `api` must be null or point to a valid [`HostApi`] whose callbacks and
/// `ctx` stay valid until [`on_unload`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn on_load(api: *const HostApi) -> i32 {
    // SAFETY: guaranteed by the caller
    let Some(api) = (unsafe { api.as_ref() }) else {
        return status(Err(GameError::NullHost));
    };

    // SAFETY: guaranteed by the caller
    status(unsafe { load(api) })
}

/// # Safety
/// Same contract as [`on_load`].
unsafe fn load(api: &HostApi) -> Result<(), GameError> {
    let mut host = HostBridge::new(api)?;
    // SAFETY: guaranteed by the caller
    let config = unsafe { read_config(api) }?;

    let mut module = module();
    if let Some(mut previous) = module.take() {
        previous.session.unload(&mut previous.host);
    }
    let platform = host;
    let session = Session::load(config, &platform, &mut host)?;
    *module = Some(Loaded { host, session });
    Ok(())
}

#[unsafe(no_mangle)]
pub extern "C" fn on_unload() -> i32 {
    frame_status(match module().take() {
        Some(mut loaded) => {
            loaded.session.unload(&mut loaded.host);
            Ok(())
        }
        None => Err(GameError::NotLoaded),
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn draw() -> i32 {
    frame_status(match module().as_mut() {
        Some(loaded) => {
            loaded.session.draw(&mut loaded.host);
            Ok(())
        }
        None => Err(GameError::NotLoaded),
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn update(dt: f64) -> i32 {
    frame_status(match module().as_mut() {
        Some(loaded) => {
            loaded.session.update(&loaded.host, dt);
            Ok(())
        }
        None => Err(GameError::NotLoaded),
    })
}

// Input is polled in `update`

#[unsafe(no_mangle)]
pub extern "C" fn keyboard_event(key: i32, scancode: i32, action: i32, mods: i32) {
    log::trace!("keyboard_event {} {} {} {}", key, scancode, action, mods);
}

#[unsafe(no_mangle)]
pub extern "C" fn mouse_button_event(button: i32, action: i32, mods: i32) {
    log::trace!("mouse_button_event {} {} {}", button, action, mods);
}

#[unsafe(no_mangle)]
pub extern "C" fn mouse_scroll_event(x_offset: f64, y_offset: f64) {
    log::trace!("mouse_scroll_event {} {}", x_offset, y_offset);
}
