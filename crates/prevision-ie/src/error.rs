use std::ffi::{CStr, NulError};

use crate::sys;

#[derive(Debug, thiserror::Error)]
pub enum IeError {
    #[error("string contains interior NUL: {0}")]
    Nul(#[from] NulError),
    #[error("inference engine error: {0}")]
    Ie(String),
    #[error("engine returned unknown {what} value {value}")]
    UnknownEnumValue { what: &'static str, value: i32 },
    #[error(transparent)]
    Name(#[from] prevision_core::PreProcessError),
}

pub(crate) fn last_error_message() -> String {
    // SAFETY: FFI returns either null or a valid NUL-terminated string.
    unsafe {
        let ptr = sys::ie_get_last_error();
        if ptr.is_null() {
            return "unknown inference engine error".to_string();
        }
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

pub(crate) fn ffi_error() -> IeError {
    IeError::Ie(last_error_message())
}
