// ABOUTME: Integration tests for the docsnav menu FFI.
// ABOUTME: Tests the C ABI functions for resolving, reading, and freeing version menus.

use std::ptr;
use std::slice;
use std::str;

use docsnav_ffi::{
    docsnav_free_menu, docsnav_menu_result, docsnav_version_menu, DError, DErrorCode, DString,
};

const CATALOG: &str = r#"{
  "menuChannels": [
    {"group": "1.2", "channels": [
      {"name": "alpha", "version": "v1.2.0"},
      {"name": "beta", "version": "v1.2.0-beta.2"}
    ]}
  ],
  "orderedChannels": ["alpha", "beta", "review"]
}"#;

/// Helper to convert a DString to a &str for assertions.
unsafe fn dstring_to_str(ds: &DString) -> &str {
    if ds.data.is_null() || ds.len == 0 {
        return "";
    }
    let slice = slice::from_raw_parts(ds.data, ds.len);
    str::from_utf8(slice).unwrap_or("")
}

#[test]
fn test_menu_success() {
    let release = "v1.2.0";
    let channel = "root";
    let path = "/documentation/index.html";
    let mut err = DError::ok();

    unsafe {
        let arena = docsnav_version_menu(
            CATALOG.as_ptr(),
            CATALOG.len(),
            release.as_ptr(),
            release.len(),
            channel.as_ptr(),
            channel.len(),
            path.as_ptr(),
            path.len(),
            false,
            &mut err,
        );
        assert!(!arena.is_null());
        assert_eq!(err.code, DErrorCode::Ok as u32);

        let menu = &*docsnav_menu_result(arena);
        assert!(!menu.local_mode);
        assert!(menu.has_alternates);
        assert_eq!(dstring_to_str(&menu.current_channel), "1.2-alpha");
        assert_eq!(dstring_to_str(&menu.toggler_href), "#");
        assert_eq!(dstring_to_str(&menu.toggler_release), "v1.2.0");

        let entries = slice::from_raw_parts(menu.entries, menu.entries_len);
        assert_eq!(entries.len(), 2);
        assert_eq!(dstring_to_str(&entries[0].label), "1.2-beta");
        assert_eq!(
            dstring_to_str(&entries[0].url),
            "/v1.2-beta/documentation/index.html"
        );
        assert!(entries[0].has_release);
        assert_eq!(dstring_to_str(&entries[1].channel), "review");
        assert!(!entries[1].has_release);

        docsnav_free_menu(arena);
    }
}

#[test]
fn test_menu_local_mode() {
    let mut err = DError::ok();
    unsafe {
        let arena = docsnav_version_menu(
            ptr::null(),
            0,
            ptr::null(),
            0,
            ptr::null(),
            0,
            ptr::null(),
            0,
            false,
            &mut err,
        );
        assert!(!arena.is_null());
        let menu = &*docsnav_menu_result(arena);
        assert!(menu.local_mode);
        assert_eq!(menu.entries_len, 0);
        docsnav_free_menu(arena);
    }
}

#[test]
fn test_menu_bad_catalog() {
    let catalog = "window.releasesInfo = {not json";
    let mut err = DError::ok();
    unsafe {
        let arena = docsnav_version_menu(
            catalog.as_ptr(),
            catalog.len(),
            ptr::null(),
            0,
            ptr::null(),
            0,
            ptr::null(),
            0,
            false,
            &mut err,
        );
        assert!(arena.is_null());
        assert_eq!(err.code, DErrorCode::Parse as u32);
        assert_eq!(dstring_to_str(&err.message), "failed to parse channel catalog");
    }
}

#[test]
fn test_null_arena_is_tolerated() {
    unsafe {
        assert!(docsnav_menu_result(ptr::null()).is_null());
        docsnav_free_menu(ptr::null_mut());
    }
}
