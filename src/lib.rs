// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod trace_init;

#[cfg(test)]
mod tests;

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use tracing::debug;

use dakuten_core::report::reply_to_message;
use dakuten_core::settings;
use dakuten_core::Converter;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand a Rust string to the caller. Free with `dakuten_string_free`.
fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn dakuten_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Run one converter (`"dc"`, `"external-dakuon"`, ...) over `text`.
///
/// Returns null when either argument is null or not UTF-8, or when the
/// converter is unknown.
#[no_mangle]
pub extern "C" fn dakuten_convert(converter: *const c_char, text: *const c_char) -> *mut c_char {
    let Some(name) = (unsafe { cptr_to_str(converter) }) else {
        return ptr::null_mut();
    };
    let Some(text) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    match name.parse::<Converter>() {
        Ok(c) => into_c_string(c.apply(text)),
        Err(e) => {
            debug!(error = %e, "dakuten_convert rejected converter");
            ptr::null_mut()
        }
    }
}

/// Multi-conversion chat reply for `text`, or null when the message should
/// be ignored (empty, bot command, invalid input).
#[no_mangle]
pub extern "C" fn dakuten_message(text: *const c_char) -> *mut c_char {
    let Some(text) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    match reply_to_message(text) {
        Some(reply) => into_c_string(reply),
        None => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn dakuten_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

/// Install custom settings TOML. Must be called before the first conversion.
/// Returns false when the TOML is invalid or settings were already set.
#[no_mangle]
pub extern "C" fn dakuten_settings_init(toml: *const c_char) -> bool {
    let Some(toml) = (unsafe { cptr_to_str(toml) }) else {
        return false;
    };
    match settings::init_custom(toml.to_string()) {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "dakuten_settings_init failed");
            false
        }
    }
}

#[no_mangle]
pub extern "C" fn dakuten_trace_init(log_dir: *const c_char) {
    if let Some(dir) = unsafe { cptr_to_str(log_dir) } {
        trace_init::init_tracing(Path::new(dir));
    }
}
