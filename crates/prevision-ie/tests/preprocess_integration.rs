use std::env;
use std::path::PathBuf;

use prevision_ie::{
    CnnNetwork, ColorFormat, IeCore, MeanVariant, PreProcessSettings, ResizeAlgorithm,
};

/// Try to load the test model. Returns `None` when none is configured:
/// `PREVISION_IE_TEST_MODEL` must point at an IR `.xml` with the `.bin`
/// weights next to it.
fn load_test_network() -> Option<CnnNetwork> {
    let model = PathBuf::from(env::var("PREVISION_IE_TEST_MODEL").ok()?);
    let weights = model.with_extension("bin");
    let core = IeCore::new().ok()?;
    core.read_network(&model, &weights).ok()
}

fn first_input_name(network: &CnnNetwork) -> String {
    network
        .input_names()
        .into_iter()
        .next()
        .expect("model should have at least one input")
}

#[test]
fn fresh_input_has_engine_defaults() {
    let Some(network) = load_test_network() else {
        eprintln!("skipping: set PREVISION_IE_TEST_MODEL to an IR model to run engine tests");
        return;
    };
    let name = first_input_name(&network);
    let mut input = network.input(&name).expect("input lookup");
    let pre = input.preprocess().expect("pre-process record");

    assert_eq!(pre.color_format().unwrap(), ColorFormat::Raw);
    assert_eq!(pre.resize_algorithm().unwrap(), ResizeAlgorithm::NoResize);
    assert_eq!(pre.mean_variant().unwrap(), MeanVariant::None);
}

#[test]
fn setters_round_trip_through_the_live_record() {
    let Some(network) = load_test_network() else {
        eprintln!("skipping: set PREVISION_IE_TEST_MODEL to an IR model to run engine tests");
        return;
    };
    let name = first_input_name(&network);
    let mut input = network.input(&name).expect("input lookup");
    let mut pre = input.preprocess().expect("pre-process record");

    pre.set_color_format(ColorFormat::Rgb);
    assert_eq!(pre.color_format().unwrap(), ColorFormat::Rgb);
    pre.set_resize_algorithm(ResizeAlgorithm::Area);
    assert_eq!(pre.resize_algorithm().unwrap(), ResizeAlgorithm::Area);
    pre.set_mean_variant(MeanVariant::MeanValue);
    assert_eq!(pre.mean_variant().unwrap(), MeanVariant::MeanValue);

    for &format in ColorFormat::all() {
        pre.set_color_format(format);
        assert_eq!(pre.color_format().unwrap(), format);
    }
    for &algorithm in ResizeAlgorithm::all() {
        pre.set_resize_algorithm(algorithm);
        assert_eq!(pre.resize_algorithm().unwrap(), algorithm);
    }
    for &variant in MeanVariant::all() {
        pre.set_mean_variant(variant);
        assert_eq!(pre.mean_variant().unwrap(), variant);
    }
}

#[test]
fn named_setters_validate_before_mutating() {
    let Some(network) = load_test_network() else {
        eprintln!("skipping: set PREVISION_IE_TEST_MODEL to an IR model to run engine tests");
        return;
    };
    let name = first_input_name(&network);
    let mut input = network.input(&name).expect("input lookup");
    let mut pre = input.preprocess().expect("pre-process record");

    pre.set_color_format_named("BGR").unwrap();
    assert_eq!(pre.color_format().unwrap(), ColorFormat::Bgr);

    assert!(pre.set_color_format_named("NOT_A_FORMAT").is_err());
    assert_eq!(
        pre.color_format().unwrap(),
        ColorFormat::Bgr,
        "failed set must leave the record untouched"
    );

    pre.set_resize_algorithm_named("RESIZE_BILINEAR").unwrap();
    assert_eq!(pre.resize_algorithm().unwrap(), ResizeAlgorithm::Bilinear);
    assert!(pre.set_resize_algorithm_named("bilinear").is_err());

    pre.set_mean_variant_named("MEAN_IMAGE").unwrap();
    assert_eq!(pre.mean_variant().unwrap(), MeanVariant::MeanImage);
    assert!(pre.set_mean_variant_named("").is_err());
}

#[test]
fn channel_count_is_unaffected_by_unrelated_setters() {
    let Some(network) = load_test_network() else {
        eprintln!("skipping: set PREVISION_IE_TEST_MODEL to an IR model to run engine tests");
        return;
    };
    let name = first_input_name(&network);
    let mut input = network.input(&name).expect("input lookup");
    let mut pre = input.preprocess().expect("pre-process record");

    let channels = pre.number_of_channels();
    pre.set_color_format(ColorFormat::Nv12);
    pre.set_resize_algorithm(ResizeAlgorithm::Bilinear);
    assert_eq!(pre.number_of_channels(), channels);
}

#[test]
fn snapshot_and_apply_round_trip() {
    let Some(network) = load_test_network() else {
        eprintln!("skipping: set PREVISION_IE_TEST_MODEL to an IR model to run engine tests");
        return;
    };
    let name = first_input_name(&network);
    let mut input = network.input(&name).expect("input lookup");
    let mut pre = input.preprocess().expect("pre-process record");

    let settings = PreProcessSettings {
        color_format: ColorFormat::Bgrx,
        resize_algorithm: ResizeAlgorithm::Area,
        mean_variant: MeanVariant::MeanValue,
    };
    pre.apply(&settings);
    assert_eq!(pre.snapshot().unwrap(), settings);

    pre.apply(&PreProcessSettings::default());
    assert_eq!(pre.snapshot().unwrap(), PreProcessSettings::default());
}
