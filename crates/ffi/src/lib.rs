// ABOUTME: C FFI bindings for the docsnav version menu resolver.
// ABOUTME: Exposes an arena-allocated VersionMenu view to non-Rust site generators and hosts.

use std::panic;
use std::ptr;

use bumpalo::Bump;
use docsnav_channels::{
    resolve, ChannelCatalog, CurrentContext, GroupOrder, MenuOptions, TogglerKind, VersionMenu,
};

/// FFI version constant for ABI compatibility checking.
pub const DOCSNAV_FFI_VERSION: u32 = 1;

/// Returns the FFI ABI version number.
/// Consumers should check this matches their expected version.
#[no_mangle]
pub extern "C" fn docsnav_ffi_version() -> u32 {
    DOCSNAV_FFI_VERSION
}

// ----------------------------------------------------------------------------
// Error handling
// ----------------------------------------------------------------------------

/// Error codes matching the C ABI DErrorCode enum.
#[repr(u32)]
pub enum DErrorCode {
    Ok = 0,
    Parse = 1,
    Invalid = 4,
    Internal = 255,
}

/// UTF-8 string slice for FFI. Not null-terminated.
/// Consumer must not mutate or free; memory owned by arena (or static for error messages).
#[derive(Copy, Clone)]
#[repr(C)]
pub struct DString {
    pub data: *const u8,
    pub len: usize,
}

impl DString {
    /// Creates an empty DString with null pointer and zero length.
    pub const fn empty() -> Self {
        DString {
            data: ptr::null(),
            len: 0,
        }
    }

    const fn from_static(s: &'static str) -> Self {
        DString {
            data: s.as_ptr(),
            len: s.len(),
        }
    }
}

impl Default for DString {
    fn default() -> Self {
        Self::empty()
    }
}

/// FFI error struct matching C ABI DError.
#[repr(C)]
pub struct DError {
    pub code: u32,
    pub message: DString,
}

impl DError {
    /// Creates a success (D_OK) error with empty message.
    pub const fn ok() -> Self {
        DError {
            code: DErrorCode::Ok as u32,
            message: DString::empty(),
        }
    }
}

// ----------------------------------------------------------------------------
// DVersionMenu / DMenuEntry - match C ABI structs
// ----------------------------------------------------------------------------

#[derive(Copy, Clone)]
#[repr(C)]
pub struct DMenuEntry {
    pub label: DString,
    pub url: DString,
    pub channel: DString,
    /// Empty when `has_release` is false (review links carry no text).
    pub release: DString,
    pub has_release: bool,
}

#[repr(C)]
pub struct DVersionMenu {
    /// True when no catalog was available; every other field is empty.
    pub local_mode: bool,
    pub current_channel: DString,
    pub current_release: DString,
    pub toggler_text: DString,
    pub toggler_release: DString,
    /// Empty for a static toggler.
    pub toggler_href: DString,
    pub has_alternates: bool,
    pub entries: *const DMenuEntry,
    pub entries_len: usize,
}

/// Arena holding a resolved menu.
/// All allocations for the menu view live in the bump allocator.
pub struct DMenuArena {
    #[allow(dead_code)]
    bump: Bump,
    menu: *const DVersionMenu,
}

// ----------------------------------------------------------------------------
// Helper functions
// ----------------------------------------------------------------------------

/// Copies a string into the arena and returns a DString pointing to it.
fn copy_str_to_arena(bump: &Bump, s: &str) -> DString {
    if s.is_empty() {
        return DString::empty();
    }
    let bytes = bump.alloc_slice_copy(s.as_bytes());
    DString {
        data: bytes.as_ptr(),
        len: bytes.len(),
    }
}

fn make_menu_view(bump: &Bump, menu: Option<&VersionMenu>) -> *const DVersionMenu {
    let Some(menu) = menu else {
        let view = bump.alloc(DVersionMenu {
            local_mode: true,
            current_channel: DString::empty(),
            current_release: DString::empty(),
            toggler_text: DString::empty(),
            toggler_release: DString::empty(),
            toggler_href: DString::empty(),
            has_alternates: false,
            entries: ptr::null(),
            entries_len: 0,
        });
        return view as *const DVersionMenu;
    };

    let entries = bump.alloc_slice_fill_iter(menu.entries.iter().map(|e| DMenuEntry {
        label: copy_str_to_arena(bump, &e.label),
        url: copy_str_to_arena(bump, &e.url),
        channel: copy_str_to_arena(bump, &e.channel),
        release: copy_str_to_arena(bump, e.release.as_deref().unwrap_or("")),
        has_release: e.release.is_some(),
    }));
    let href = match &menu.toggler.kind {
        TogglerKind::Link { href } => href.as_str(),
        TogglerKind::Static => "",
    };

    let view = bump.alloc(DVersionMenu {
        local_mode: false,
        current_channel: copy_str_to_arena(bump, &menu.current_channel),
        current_release: copy_str_to_arena(bump, &menu.current_release),
        toggler_text: copy_str_to_arena(bump, &menu.toggler.text),
        toggler_release: copy_str_to_arena(bump, menu.toggler.release.as_deref().unwrap_or("")),
        toggler_href: copy_str_to_arena(bump, href),
        has_alternates: menu.has_alternates(),
        entries: if entries.is_empty() {
            ptr::null()
        } else {
            entries.as_ptr()
        },
        entries_len: entries.len(),
    });
    view as *const DVersionMenu
}

/// Reads an optional UTF-8 argument. Null or zero length is `Ok(None)`.
unsafe fn optional_str<'a>(data: *const u8, len: usize) -> Result<Option<&'a str>, ()> {
    if data.is_null() || len == 0 {
        return Ok(None);
    }
    let bytes = std::slice::from_raw_parts(data, len);
    std::str::from_utf8(bytes).map(Some).map_err(|_| ())
}

/// Sets the out_err with the given code and static message.
/// If out_err is null, this is a no-op.
unsafe fn set_error(out_err: *mut DError, code: DErrorCode, message: &'static str) {
    if !out_err.is_null() {
        (*out_err).code = code as u32;
        (*out_err).message = DString::from_static(message);
    }
}

/// Sets out_err to success (D_OK with empty message).
/// If out_err is null, this is a no-op.
unsafe fn set_success(out_err: *mut DError) {
    if !out_err.is_null() {
        (*out_err).code = DErrorCode::Ok as u32;
        (*out_err).message = DString::empty();
    }
}

// ----------------------------------------------------------------------------
// Menu FFI functions
// ----------------------------------------------------------------------------

/// Resolves the version menu for a page.
///
/// # Arguments
/// * `catalog` / `catalog_len` - channels.js or JSON catalog bytes; null or empty means local mode
/// * `release` / `release_len` - current release; null or empty means "local"
/// * `channel` / `channel_len` - current channel; null or empty means "local"
/// * `path` / `path_len` - page path; null or empty means "/"
/// * `sorted` - list newest groups first
/// * `out_err` - Output error struct (may be null)
///
/// # Returns
/// Pointer to DMenuArena on success (including local mode), null on failure.
///
/// # Safety
/// Pointers must be valid for the given lengths. Caller must free the returned arena via
/// docsnav_free_menu.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn docsnav_version_menu(
    catalog: *const u8,
    catalog_len: usize,
    release: *const u8,
    release_len: usize,
    channel: *const u8,
    channel_len: usize,
    path: *const u8,
    path_len: usize,
    sorted: bool,
    out_err: *mut DError,
) -> *mut DMenuArena {
    let (Ok(catalog), Ok(release), Ok(channel), Ok(path)) = (
        optional_str(catalog, catalog_len),
        optional_str(release, release_len),
        optional_str(channel, channel_len),
        optional_str(path, path_len),
    ) else {
        set_error(out_err, DErrorCode::Invalid, "argument is not utf-8");
        return ptr::null_mut();
    };

    let parsed = match catalog.map(ChannelCatalog::from_script).transpose() {
        Ok(parsed) => parsed,
        Err(_) => {
            set_error(out_err, DErrorCode::Parse, "failed to parse channel catalog");
            return ptr::null_mut();
        }
    };

    let context = CurrentContext::from_optional(
        release.map(str::to_string),
        channel.map(str::to_string),
    );
    let order = if sorted {
        GroupOrder::NumericDescending
    } else {
        GroupOrder::Catalog
    };
    let opts = MenuOptions::builder().group_order(order).build();
    let path = path.unwrap_or("/");

    let menu = match panic::catch_unwind(|| resolve(parsed.as_ref(), &context, path, &opts)) {
        Ok(menu) => menu,
        Err(_) => {
            set_error(out_err, DErrorCode::Internal, "panic during menu resolution");
            return ptr::null_mut();
        }
    };

    let bump = Bump::new();
    let view = make_menu_view(&bump, menu.as_ref());
    set_success(out_err);
    Box::into_raw(Box::new(DMenuArena { bump, menu: view }))
}

/// Returns the menu view for a given arena.
///
/// # Safety
/// `arena` must be null or a pointer returned by docsnav_version_menu that was not freed.
#[no_mangle]
pub unsafe extern "C" fn docsnav_menu_result(arena: *const DMenuArena) -> *const DVersionMenu {
    if arena.is_null() {
        return ptr::null();
    }
    (*arena).menu
}

/// Frees a menu arena.
/// After this call, the arena pointer and every view into it are invalid.
///
/// # Safety
/// `arena` must be null or a pointer returned by docsnav_version_menu that was not freed.
#[no_mangle]
pub unsafe extern "C" fn docsnav_free_menu(arena: *mut DMenuArena) {
    if !arena.is_null() {
        drop(Box::from_raw(arena));
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
