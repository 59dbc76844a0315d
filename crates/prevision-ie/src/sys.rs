use std::ffi::{c_char, c_int};

#[repr(C)]
pub struct IeCore {
    _private: [u8; 0],
}

#[repr(C)]
pub struct IeNetwork {
    _private: [u8; 0],
}

#[repr(C)]
pub struct IeInputInfo {
    _private: [u8; 0],
}

#[repr(C)]
pub struct IePreProcessInfo {
    _private: [u8; 0],
}

unsafe extern "C" {
    pub fn ie_get_last_error() -> *const c_char;

    pub fn ie_core_create() -> *mut IeCore;
    pub fn ie_core_destroy(core: *mut IeCore);
    pub fn ie_core_read_network(
        core: *mut IeCore,
        model_path: *const c_char,
        weights_path: *const c_char,
    ) -> *mut IeNetwork;
    pub fn ie_network_destroy(network: *mut IeNetwork);

    pub fn ie_network_get_name(network: *const IeNetwork) -> *const c_char;
    pub fn ie_network_get_num_inputs(network: *const IeNetwork) -> c_int;
    pub fn ie_network_get_input_name(network: *const IeNetwork, index: c_int) -> *const c_char;
    pub fn ie_network_get_input(
        network: *mut IeNetwork,
        name: *const c_char,
    ) -> *mut IeInputInfo;
    pub fn ie_input_info_destroy(input: *mut IeInputInfo);

    pub fn ie_input_info_get_preprocess(input: *mut IeInputInfo) -> *mut IePreProcessInfo;

    pub fn ie_preprocess_get_color_format(info: *const IePreProcessInfo) -> c_int;
    pub fn ie_preprocess_set_color_format(info: *mut IePreProcessInfo, format: c_int);
    pub fn ie_preprocess_get_resize_algorithm(info: *const IePreProcessInfo) -> c_int;
    pub fn ie_preprocess_set_resize_algorithm(info: *mut IePreProcessInfo, algorithm: c_int);
    pub fn ie_preprocess_get_mean_variant(info: *const IePreProcessInfo) -> c_int;
    pub fn ie_preprocess_set_mean_variant(info: *mut IePreProcessInfo, variant: c_int);
    pub fn ie_preprocess_get_number_of_channels(info: *const IePreProcessInfo) -> c_int;
}
