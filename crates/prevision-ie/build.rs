use std::env;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=csrc/ie_capi.h");
    println!("cargo:rerun-if-changed=csrc/ie_capi.cpp");
    println!("cargo:rerun-if-env-changed=PREVISION_IE_PREBUILT_DIR");
    println!("cargo:rerun-if-env-changed=PREVISION_IE_SOURCE_DIR");
    println!("cargo:rerun-if-env-changed=PREVISION_IE_SKIP_NATIVE_BUILD");
    println!("cargo:rerun-if-env-changed=PREVISION_IE_CMAKE_PREFIX_PATH");

    if env_truthy("PREVISION_IE_SKIP_NATIVE_BUILD") {
        println!(
            "cargo:warning=PREVISION_IE_SKIP_NATIVE_BUILD=1: \
             skipping Inference Engine native build (check-only mode)"
        );
        return;
    }

    if let Some(prebuilt_dir) = env_path("PREVISION_IE_PREBUILT_DIR") {
        let include_dir = prebuilt_dir.join("include");
        let lib_dir = pick_lib_dir(&prebuilt_dir);
        if !include_dir.exists() || !lib_dir.exists() {
            panic!(
                "PREVISION_IE_PREBUILT_DIR is missing include/lib paths: {}",
                prebuilt_dir.display()
            );
        }
        compile_wrapper(&include_dir);
        link_ie(&lib_dir);
        return;
    }

    if let Some(ie_src) = env_path("PREVISION_IE_SOURCE_DIR") {
        build_from_source(&ie_src);
        return;
    }

    // Fall back to a system install announced via pkg-config; the probe
    // emits the link flags itself.
    if let Ok(lib) = pkg_config::Config::new().probe("inference_engine") {
        let mut build = wrapper_build();
        for include_dir in &lib.include_paths {
            build.include(include_dir);
        }
        build.compile("ie_capi");
        return;
    }

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let ie_src = manifest_dir.join("../../extern/openvino");
    if !ie_src.exists() {
        panic!(
            "Inference Engine not found. Set PREVISION_IE_PREBUILT_DIR to an \
             OpenVINO install, PREVISION_IE_SOURCE_DIR to a source checkout, \
             or initialize the extern/openvino submodule.",
        );
    }
    build_from_source(&ie_src);
}

fn build_from_source(ie_src: &Path) {
    let mut cmake_cfg = cmake::Config::new(ie_src);
    cmake_cfg
        .define("ENABLE_SAMPLES", "OFF")
        .define("ENABLE_TESTS", "OFF")
        .define("ENABLE_PYTHON", "OFF")
        .define("ENABLE_WHEEL", "OFF")
        .define("ENABLE_DOCS", "OFF")
        .define("CMAKE_POSITION_INDEPENDENT_CODE", "ON");

    if let Some(prefix_path) = env_string("PREVISION_IE_CMAKE_PREFIX_PATH") {
        cmake_cfg.define("CMAKE_PREFIX_PATH", prefix_path);
    }

    let ie_dst = cmake_cfg.build();

    compile_wrapper(&ie_dst.join("include"));
    link_ie(&pick_lib_dir(&ie_dst));
}

fn wrapper_build() -> cc::Build {
    let mut build = cc::Build::new();
    build
        .cpp(true)
        .file("csrc/ie_capi.cpp")
        .include("csrc")
        .flag_if_supported("-std=c++17");
    build
}

fn compile_wrapper(ie_include: &Path) {
    wrapper_build()
        .include(ie_include)
        // Headers live under include/ie in install layouts.
        .include(ie_include.join("ie"))
        .compile("ie_capi");
}

fn link_ie(lib_dir: &Path) {
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib=inference_engine");

    if cfg!(target_os = "linux") {
        println!("cargo:rustc-link-lib=dylib=stdc++");
    } else if cfg!(target_os = "macos") {
        println!("cargo:rustc-link-lib=dylib=c++");
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn env_string(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}

fn env_truthy(var: &str) -> bool {
    matches!(
        env::var(var).ok().as_deref(),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") | Some("YES")
    )
}

fn pick_lib_dir(root: &Path) -> PathBuf {
    let lib = root.join("lib");
    if lib.exists() {
        return lib;
    }
    let lib64 = root.join("lib64");
    if lib64.exists() {
        return lib64;
    }
    lib
}
