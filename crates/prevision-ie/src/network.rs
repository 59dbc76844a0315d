use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{IeError, ffi_error};
use crate::preprocess::PreProcessInfo;
use crate::sys;

/// A loaded model, owning the engine-side network object and its per-input
/// configuration records.
pub struct CnnNetwork {
    ptr: NonNull<sys::IeNetwork>,
}

impl CnnNetwork {
    pub(crate) fn from_raw(raw: *mut sys::IeNetwork) -> Result<Self, IeError> {
        NonNull::new(raw)
            .map(|ptr| Self { ptr })
            .ok_or_else(ffi_error)
    }

    /// Model name recorded in the IR file.
    pub fn name(&self) -> String {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let ptr = unsafe { sys::ie_network_get_name(self.ptr.as_ptr()) };
        cstr_to_string(ptr).unwrap_or_default()
    }

    /// Names of the network's inputs, in the engine's iteration order.
    pub fn input_names(&self) -> Vec<String> {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let count = unsafe { sys::ie_network_get_num_inputs(self.ptr.as_ptr()) };
        if count <= 0 {
            return Vec::new();
        }

        (0..count)
            .filter_map(|i| {
                // SAFETY: index in range and `self` alive.
                let ptr = unsafe { sys::ie_network_get_input_name(self.ptr.as_ptr(), i) };
                cstr_to_string(ptr)
            })
            .collect()
    }

    /// Look up one network input by name.
    pub fn input(&self, name: &str) -> Result<InputInfo<'_>, IeError> {
        let name_c = CString::new(name)?;
        // SAFETY: pointers are valid while called.
        let ptr = unsafe { sys::ie_network_get_input(self.ptr.as_ptr(), name_c.as_ptr()) };
        InputInfo::from_raw(ptr)
    }
}

impl Drop for CnnNetwork {
    fn drop(&mut self) {
        // SAFETY: pointer came from FFI constructor and is owned by this wrapper.
        unsafe { sys::ie_network_destroy(self.ptr.as_ptr()) };
    }
}

/// Handle to one network input's configuration. Holds a shared reference to
/// engine-side data that stays valid while the owning [`CnnNetwork`] lives.
pub struct InputInfo<'net> {
    ptr: NonNull<sys::IeInputInfo>,
    _net: PhantomData<&'net CnnNetwork>,
}

impl InputInfo<'_> {
    pub(crate) fn from_raw(raw: *mut sys::IeInputInfo) -> Result<Self, IeError> {
        NonNull::new(raw)
            .map(|ptr| Self {
                ptr,
                _net: PhantomData,
            })
            .ok_or_else(ffi_error)
    }

    /// Borrow the input's pre-processing record.
    ///
    /// This is the only way to obtain a [`PreProcessInfo`]: the facade is
    /// always associated with an engine-owned record and cannot outlive this
    /// input.
    pub fn preprocess(&mut self) -> Result<PreProcessInfo<'_>, IeError> {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let ptr = unsafe { sys::ie_input_info_get_preprocess(self.ptr.as_ptr()) };
        PreProcessInfo::from_raw(ptr)
    }
}

impl Drop for InputInfo<'_> {
    fn drop(&mut self) {
        // SAFETY: pointer came from FFI constructor and is owned by this wrapper.
        unsafe { sys::ie_input_info_destroy(self.ptr.as_ptr()) };
    }
}

fn cstr_to_string(ptr: *const std::ffi::c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: FFI contract returns valid NUL-terminated strings.
    let s = unsafe { CStr::from_ptr(ptr) }.to_string_lossy();
    if s.is_empty() {
        None
    } else {
        Some(s.into_owned())
    }
}
