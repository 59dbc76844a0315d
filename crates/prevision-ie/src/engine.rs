use std::ffi::CString;
use std::path::Path;
use std::ptr::NonNull;

use crate::error::{IeError, ffi_error};
use crate::network::CnnNetwork;
use crate::sys;

/// Entry point to the inference engine runtime.
pub struct IeCore {
    ptr: NonNull<sys::IeCore>,
}

impl IeCore {
    pub fn new() -> Result<Self, IeError> {
        // SAFETY: FFI constructor returns owned opaque pointer or null on error.
        let ptr = unsafe { sys::ie_core_create() };
        NonNull::new(ptr)
            .map(|ptr| Self { ptr })
            .ok_or_else(ffi_error)
    }

    /// Read an IR model (`.xml` graph plus `.bin` weights) into a
    /// [`CnnNetwork`].
    pub fn read_network(&self, model: &Path, weights: &Path) -> Result<CnnNetwork, IeError> {
        let model_c = CString::new(model.to_string_lossy().as_bytes())?;
        let weights_c = CString::new(weights.to_string_lossy().as_bytes())?;

        tracing::debug!(model = %model.display(), "reading network");

        // SAFETY: pointers are valid while called.
        let ptr = unsafe {
            sys::ie_core_read_network(self.ptr.as_ptr(), model_c.as_ptr(), weights_c.as_ptr())
        };
        CnnNetwork::from_raw(ptr)
    }
}

impl Drop for IeCore {
    fn drop(&mut self) {
        // SAFETY: pointer came from FFI constructor and is owned by this wrapper.
        unsafe { sys::ie_core_destroy(self.ptr.as_ptr()) };
    }
}
