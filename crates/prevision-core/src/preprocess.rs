//! Pre-processing enumerations and the serializable settings record.
//!
//! The engine identifies color formats, resize algorithms, and mean variants
//! by canonical upper-case names (`"BGR"`, `"RESIZE_BILINEAR"`, …). Each
//! enumeration here carries the bidirectional name table as `name()` /
//! `from_name()` plus the usual `Display` / `FromStr` impls, so string-keyed
//! callers (config files, CLIs) and typed callers share one mapping.

use serde::{Deserialize, Serialize};

use crate::error::PreProcessError;

/// Pixel channel layout/order of the input image handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorFormat {
    /// Pass the data through unchanged; no conversion is applied.
    Raw,
    /// Interleaved RGB.
    Rgb,
    /// Interleaved BGR (OpenCV's default ordering).
    Bgr,
    /// RGB with a padding byte per pixel.
    Rgbx,
    /// BGR with a padding byte per pixel.
    Bgrx,
    /// Semi-planar Y plane followed by interleaved UV.
    Nv12,
    /// Planar Y, U, V.
    I420,
}

impl ColorFormat {
    /// Canonical engine name for this format.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Rgb => "RGB",
            Self::Bgr => "BGR",
            Self::Rgbx => "RGBX",
            Self::Bgrx => "BGRX",
            Self::Nv12 => "NV12",
            Self::I420 => "I420",
        }
    }

    /// Look a format up by its canonical name. Case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, PreProcessError> {
        match name {
            "RAW" => Ok(Self::Raw),
            "RGB" => Ok(Self::Rgb),
            "BGR" => Ok(Self::Bgr),
            "RGBX" => Ok(Self::Rgbx),
            "BGRX" => Ok(Self::Bgrx),
            "NV12" => Ok(Self::Nv12),
            "I420" => Ok(Self::I420),
            _ => Err(PreProcessError::UnknownColorFormat(name.to_string())),
        }
    }

    /// Every color format the engine defines.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorFormat; 7] = [
            ColorFormat::Raw,
            ColorFormat::Rgb,
            ColorFormat::Bgr,
            ColorFormat::Rgbx,
            ColorFormat::Bgrx,
            ColorFormat::Nv12,
            ColorFormat::I420,
        ];
        &ALL
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = PreProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Interpolation used when the engine rescales the input to the model's
/// expected dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeAlgorithm {
    /// No rescaling; input dimensions must already match the model.
    #[serde(rename = "NO_RESIZE")]
    NoResize,
    /// Bilinear interpolation.
    #[serde(rename = "RESIZE_BILINEAR")]
    Bilinear,
    /// Area (pixel-averaging) interpolation, preferred when downscaling.
    #[serde(rename = "RESIZE_AREA")]
    Area,
}

impl ResizeAlgorithm {
    /// Canonical engine name for this algorithm.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoResize => "NO_RESIZE",
            Self::Bilinear => "RESIZE_BILINEAR",
            Self::Area => "RESIZE_AREA",
        }
    }

    /// Look an algorithm up by its canonical name. Case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, PreProcessError> {
        match name {
            "NO_RESIZE" => Ok(Self::NoResize),
            "RESIZE_BILINEAR" => Ok(Self::Bilinear),
            "RESIZE_AREA" => Ok(Self::Area),
            _ => Err(PreProcessError::UnknownResizeAlgorithm(name.to_string())),
        }
    }

    /// Every resize algorithm the engine defines.
    pub fn all() -> &'static [Self] {
        const ALL: [ResizeAlgorithm; 3] = [
            ResizeAlgorithm::NoResize,
            ResizeAlgorithm::Bilinear,
            ResizeAlgorithm::Area,
        ];
        &ALL
    }
}

impl std::fmt::Display for ResizeAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ResizeAlgorithm {
    type Err = PreProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// How per-channel mean subtraction and variance scaling are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeanVariant {
    /// Subtract a full mean image, channel by channel.
    MeanImage,
    /// Subtract a scalar mean value per channel.
    MeanValue,
    /// No normalization.
    None,
}

impl MeanVariant {
    /// Canonical engine name for this variant.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MeanImage => "MEAN_IMAGE",
            Self::MeanValue => "MEAN_VALUE",
            Self::None => "NONE",
        }
    }

    /// Look a variant up by its canonical name. Case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, PreProcessError> {
        match name {
            "MEAN_IMAGE" => Ok(Self::MeanImage),
            "MEAN_VALUE" => Ok(Self::MeanValue),
            "NONE" => Ok(Self::None),
            _ => Err(PreProcessError::UnknownMeanVariant(name.to_string())),
        }
    }

    /// Every mean variant the engine defines.
    pub fn all() -> &'static [Self] {
        const ALL: [MeanVariant; 3] = [
            MeanVariant::MeanImage,
            MeanVariant::MeanValue,
            MeanVariant::None,
        ];
        &ALL
    }
}

impl std::fmt::Display for MeanVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MeanVariant {
    type Err = PreProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Complete pre-processing configuration for one network input.
///
/// Serialized names match the engine's canonical names, so a settings file
/// reads the same as the engine's own documentation. Channel count is
/// deliberately absent: it is derived by the engine from the input and is
/// read-only through the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreProcessSettings {
    /// Color format of the source image.
    pub color_format: ColorFormat,
    /// Resize algorithm applied before inference.
    pub resize_algorithm: ResizeAlgorithm,
    /// Mean/variance normalization variant.
    pub mean_variant: MeanVariant,
}

impl Default for PreProcessSettings {
    /// A fresh engine record: no conversion, no resize, no normalization.
    fn default() -> Self {
        Self {
            color_format: ColorFormat::Raw,
            resize_algorithm: ResizeAlgorithm::NoResize,
            mean_variant: MeanVariant::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_format_name_round_trip() {
        for &format in ColorFormat::all() {
            assert_eq!(ColorFormat::from_name(format.name()), Ok(format));
            assert_eq!(format.name().parse(), Ok(format));
        }
    }

    #[test]
    fn test_resize_algorithm_name_round_trip() {
        for &algorithm in ResizeAlgorithm::all() {
            assert_eq!(ResizeAlgorithm::from_name(algorithm.name()), Ok(algorithm));
            assert_eq!(algorithm.name().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn test_mean_variant_name_round_trip() {
        for &variant in MeanVariant::all() {
            assert_eq!(MeanVariant::from_name(variant.name()), Ok(variant));
            assert_eq!(variant.name().parse(), Ok(variant));
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        assert_eq!(
            ColorFormat::from_name("NOT_A_FORMAT"),
            Err(PreProcessError::UnknownColorFormat("NOT_A_FORMAT".into()))
        );
        assert_eq!(
            ResizeAlgorithm::from_name("RESIZE_CUBIC"),
            Err(PreProcessError::UnknownResizeAlgorithm("RESIZE_CUBIC".into()))
        );
        assert_eq!(
            MeanVariant::from_name("MEAN_MEDIAN"),
            Err(PreProcessError::UnknownMeanVariant("MEAN_MEDIAN".into()))
        );
    }

    #[test]
    fn test_lookups_are_case_sensitive() {
        assert!(ColorFormat::from_name("rgb").is_err());
        assert!(ResizeAlgorithm::from_name("resize_bilinear").is_err());
        assert!(MeanVariant::from_name("none").is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(ColorFormat::Bgr.to_string(), "BGR");
        assert_eq!(ResizeAlgorithm::Bilinear.to_string(), "RESIZE_BILINEAR");
        assert_eq!(MeanVariant::MeanValue.to_string(), "MEAN_VALUE");
    }

    #[test]
    fn test_serde_names_match_name_tables() {
        for &format in ColorFormat::all() {
            let json = serde_json::to_value(format).unwrap();
            assert_eq!(json, serde_json::Value::String(format.name().to_string()));
        }
        for &algorithm in ResizeAlgorithm::all() {
            let json = serde_json::to_value(algorithm).unwrap();
            assert_eq!(json, serde_json::Value::String(algorithm.name().to_string()));
        }
        for &variant in MeanVariant::all() {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, serde_json::Value::String(variant.name().to_string()));
        }
    }

    #[test]
    fn test_settings_default_matches_fresh_engine_record() {
        let settings = PreProcessSettings::default();
        assert_eq!(settings.color_format, ColorFormat::Raw);
        assert_eq!(settings.resize_algorithm, ResizeAlgorithm::NoResize);
        assert_eq!(settings.mean_variant, MeanVariant::None);
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = PreProcessSettings {
            color_format: ColorFormat::Nv12,
            resize_algorithm: ResizeAlgorithm::Area,
            mean_variant: MeanVariant::MeanImage,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"NV12\""));
        assert!(json.contains("\"RESIZE_AREA\""));
        assert!(json.contains("\"MEAN_IMAGE\""));
        let back: PreProcessSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_settings_rejects_unknown_serde_name() {
        let json = r#"{
            "color_format": "NOT_A_FORMAT",
            "resize_algorithm": "NO_RESIZE",
            "mean_variant": "NONE"
        }"#;
        assert!(serde_json::from_str::<PreProcessSettings>(json).is_err());
    }
}
