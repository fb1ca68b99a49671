use super::*;
use std::ffi::{CStr, CString};
use std::ptr;

/// Take ownership of an FFI result string, returning its contents.
fn take(s: *mut c_char) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let out = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
    dakuten_string_free(s);
    Some(out)
}

#[test]
fn test_ffi_version() {
    let v = unsafe { CStr::from_ptr(dakuten_engine_version()) };
    assert_eq!(v.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_ffi_convert_by_id_and_name() {
    let text = CString::new("たねだ").unwrap();
    let id = CString::new("de").unwrap();
    assert_eq!(
        take(dakuten_convert(id.as_ptr(), text.as_ptr())).as_deref(),
        Some("た゛ね゛た゛")
    );

    let name = CString::new("combining-dakuon").unwrap();
    assert_eq!(
        take(dakuten_convert(name.as_ptr(), text.as_ptr())).as_deref(),
        Some("だね\u{3099}だ")
    );
}

#[test]
fn test_ffi_convert_rejects_bad_input() {
    let text = CString::new("か").unwrap();
    let bogus = CString::new("zz").unwrap();
    let id = CString::new("dc").unwrap();
    assert!(dakuten_convert(bogus.as_ptr(), text.as_ptr()).is_null());
    assert!(dakuten_convert(ptr::null(), text.as_ptr()).is_null());
    assert!(dakuten_convert(id.as_ptr(), ptr::null()).is_null());
}

#[test]
fn test_ffi_convert_empty() {
    let text = CString::new("").unwrap();
    let id = CString::new("he").unwrap();
    assert_eq!(
        take(dakuten_convert(id.as_ptr(), text.as_ptr())).as_deref(),
        Some("")
    );
}

#[test]
fn test_ffi_message() {
    let text = CString::new("は").unwrap();
    let reply = take(dakuten_message(text.as_ptr())).unwrap();
    assert!(reply.starts_with("\n濁点（結合文字）\nば\n"));
    assert!(reply.ends_with("\n半濁点\nは゜\n"));

    let command = CString::new("/start").unwrap();
    assert!(dakuten_message(command.as_ptr()).is_null());
    assert!(dakuten_message(ptr::null()).is_null());
}

#[test]
fn test_ffi_settings_init_rejects_invalid() {
    let bad = CString::new("not valid toml {{{").unwrap();
    assert!(!dakuten_settings_init(bad.as_ptr()));
    assert!(!dakuten_settings_init(ptr::null()));
}

#[test]
fn test_ffi_free_null_is_noop() {
    dakuten_string_free(ptr::null_mut());
}
