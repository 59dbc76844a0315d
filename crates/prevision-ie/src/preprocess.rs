use std::marker::PhantomData;
use std::ptr::NonNull;

use prevision_core::{
    ColorFormat, MeanVariant, PreProcessError, PreProcessSettings, ResizeAlgorithm,
};

use crate::error::{IeError, ffi_error};
use crate::sys;

/// Enum values crossing the C ABI (mirrors `csrc/ie_capi.h`).
mod raw {
    pub const COLOR_RAW: i32 = 0;
    pub const COLOR_RGB: i32 = 1;
    pub const COLOR_BGR: i32 = 2;
    pub const COLOR_RGBX: i32 = 3;
    pub const COLOR_BGRX: i32 = 4;
    pub const COLOR_NV12: i32 = 5;
    pub const COLOR_I420: i32 = 6;

    pub const RESIZE_NONE: i32 = 0;
    pub const RESIZE_BILINEAR: i32 = 1;
    pub const RESIZE_AREA: i32 = 2;

    pub const MEAN_IMAGE: i32 = 0;
    pub const MEAN_VALUE: i32 = 1;
    pub const MEAN_NONE: i32 = 2;
}

/// View of one network input's pre-processing record.
///
/// Produced by [`InputInfo::preprocess`](crate::InputInfo::preprocess). The
/// engine owns the record and keeps it alive for the life of the input; this
/// view holds a borrowed pointer only and never deallocates it. Typed setters
/// are infallible; the `*_named` setters validate against the name tables
/// before touching the record.
pub struct PreProcessInfo<'a> {
    ptr: NonNull<sys::IePreProcessInfo>,
    _input: PhantomData<&'a mut sys::IeInputInfo>,
}

impl PreProcessInfo<'_> {
    pub(crate) fn from_raw(raw: *mut sys::IePreProcessInfo) -> Result<Self, IeError> {
        NonNull::new(raw)
            .map(|ptr| Self {
                ptr,
                _input: PhantomData,
            })
            .ok_or_else(ffi_error)
    }

    /// Current color format of the input image.
    pub fn color_format(&self) -> Result<ColorFormat, IeError> {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let value = unsafe { sys::ie_preprocess_get_color_format(self.ptr.as_ptr()) };
        color_format_from_raw(value)
    }

    pub fn set_color_format(&mut self, format: ColorFormat) {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        unsafe {
            sys::ie_preprocess_set_color_format(self.ptr.as_ptr(), color_format_to_raw(format));
        }
    }

    /// Set the color format by its canonical name (e.g. `"BGR"`). The record
    /// is untouched when the name is not recognized.
    pub fn set_color_format_named(&mut self, name: &str) -> Result<(), PreProcessError> {
        self.set_color_format(ColorFormat::from_name(name)?);
        Ok(())
    }

    /// Current resize algorithm.
    pub fn resize_algorithm(&self) -> Result<ResizeAlgorithm, IeError> {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let value = unsafe { sys::ie_preprocess_get_resize_algorithm(self.ptr.as_ptr()) };
        resize_algorithm_from_raw(value)
    }

    pub fn set_resize_algorithm(&mut self, algorithm: ResizeAlgorithm) {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        unsafe {
            sys::ie_preprocess_set_resize_algorithm(
                self.ptr.as_ptr(),
                resize_algorithm_to_raw(algorithm),
            );
        }
    }

    /// Set the resize algorithm by its canonical name (e.g.
    /// `"RESIZE_BILINEAR"`). The record is untouched when the name is not
    /// recognized.
    pub fn set_resize_algorithm_named(&mut self, name: &str) -> Result<(), PreProcessError> {
        self.set_resize_algorithm(ResizeAlgorithm::from_name(name)?);
        Ok(())
    }

    /// Current mean/variance normalization variant.
    pub fn mean_variant(&self) -> Result<MeanVariant, IeError> {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let value = unsafe { sys::ie_preprocess_get_mean_variant(self.ptr.as_ptr()) };
        mean_variant_from_raw(value)
    }

    pub fn set_mean_variant(&mut self, variant: MeanVariant) {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        unsafe {
            sys::ie_preprocess_set_mean_variant(self.ptr.as_ptr(), mean_variant_to_raw(variant));
        }
    }

    /// Set the mean variant by its canonical name (e.g. `"MEAN_VALUE"`). The
    /// record is untouched when the name is not recognized.
    pub fn set_mean_variant_named(&mut self, name: &str) -> Result<(), PreProcessError> {
        self.set_mean_variant(MeanVariant::from_name(name)?);
        Ok(())
    }

    /// Number of channels the configured pipeline expects. Derived by the
    /// engine; unaffected by the setters above.
    pub fn number_of_channels(&self) -> usize {
        // SAFETY: `self.ptr` is valid for the life of `self`.
        let value = unsafe { sys::ie_preprocess_get_number_of_channels(self.ptr.as_ptr()) };
        value.max(0) as usize
    }

    /// Copy the record into an owned [`PreProcessSettings`].
    pub fn snapshot(&self) -> Result<PreProcessSettings, IeError> {
        Ok(PreProcessSettings {
            color_format: self.color_format()?,
            resize_algorithm: self.resize_algorithm()?,
            mean_variant: self.mean_variant()?,
        })
    }

    /// Write every field of `settings` onto the record.
    pub fn apply(&mut self, settings: &PreProcessSettings) {
        tracing::debug!(?settings, "applying pre-process settings");
        self.set_color_format(settings.color_format);
        self.set_resize_algorithm(settings.resize_algorithm);
        self.set_mean_variant(settings.mean_variant);
    }
}

const fn color_format_to_raw(format: ColorFormat) -> i32 {
    match format {
        ColorFormat::Raw => raw::COLOR_RAW,
        ColorFormat::Rgb => raw::COLOR_RGB,
        ColorFormat::Bgr => raw::COLOR_BGR,
        ColorFormat::Rgbx => raw::COLOR_RGBX,
        ColorFormat::Bgrx => raw::COLOR_BGRX,
        ColorFormat::Nv12 => raw::COLOR_NV12,
        ColorFormat::I420 => raw::COLOR_I420,
    }
}

fn color_format_from_raw(value: i32) -> Result<ColorFormat, IeError> {
    match value {
        raw::COLOR_RAW => Ok(ColorFormat::Raw),
        raw::COLOR_RGB => Ok(ColorFormat::Rgb),
        raw::COLOR_BGR => Ok(ColorFormat::Bgr),
        raw::COLOR_RGBX => Ok(ColorFormat::Rgbx),
        raw::COLOR_BGRX => Ok(ColorFormat::Bgrx),
        raw::COLOR_NV12 => Ok(ColorFormat::Nv12),
        raw::COLOR_I420 => Ok(ColorFormat::I420),
        _ => Err(IeError::UnknownEnumValue {
            what: "color format",
            value,
        }),
    }
}

const fn resize_algorithm_to_raw(algorithm: ResizeAlgorithm) -> i32 {
    match algorithm {
        ResizeAlgorithm::NoResize => raw::RESIZE_NONE,
        ResizeAlgorithm::Bilinear => raw::RESIZE_BILINEAR,
        ResizeAlgorithm::Area => raw::RESIZE_AREA,
    }
}

fn resize_algorithm_from_raw(value: i32) -> Result<ResizeAlgorithm, IeError> {
    match value {
        raw::RESIZE_NONE => Ok(ResizeAlgorithm::NoResize),
        raw::RESIZE_BILINEAR => Ok(ResizeAlgorithm::Bilinear),
        raw::RESIZE_AREA => Ok(ResizeAlgorithm::Area),
        _ => Err(IeError::UnknownEnumValue {
            what: "resize algorithm",
            value,
        }),
    }
}

const fn mean_variant_to_raw(variant: MeanVariant) -> i32 {
    match variant {
        MeanVariant::MeanImage => raw::MEAN_IMAGE,
        MeanVariant::MeanValue => raw::MEAN_VALUE,
        MeanVariant::None => raw::MEAN_NONE,
    }
}

fn mean_variant_from_raw(value: i32) -> Result<MeanVariant, IeError> {
    match value {
        raw::MEAN_IMAGE => Ok(MeanVariant::MeanImage),
        raw::MEAN_VALUE => Ok(MeanVariant::MeanValue),
        raw::MEAN_NONE => Ok(MeanVariant::None),
        _ => Err(IeError::UnknownEnumValue {
            what: "mean variant",
            value,
        }),
    }
}
