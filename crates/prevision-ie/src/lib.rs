//! Inference Engine integration crate for Prevision.
//!
//! This crate provides a minimal safe wrapper over a thin C ABI layer built on
//! top of the OpenVINO Inference Engine's C++ API. It covers engine and model
//! loading plus the per-input pre-processing configuration facade; tensor and
//! execution APIs are out of scope.
#![allow(unsafe_code)]
// FFI wrappers necessarily use unsafe externs and raw pointers.

mod engine;
mod error;
mod network;
mod preprocess;
mod sys;

pub use engine::IeCore;
pub use error::IeError;
pub use network::{CnnNetwork, InputInfo};
pub use preprocess::PreProcessInfo;
pub use prevision_core::{
    ColorFormat, MeanVariant, PreProcessError, PreProcessSettings, ResizeAlgorithm,
};
