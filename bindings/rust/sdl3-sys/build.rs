//! Build script for sdl3-sys
//!
//! The SDL3 shared library is resolved at runtime, so nothing is linked here.
//! This script only:
//! 1. Probes pkg-config for `sdl3` (works after `make install` / distro packages)
//! 2. Records the discovered library directory as a runtime search hint

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=SDL3_LIB_DIR");
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");

    // An explicit directory wins over pkg-config
    if let Ok(dir) = env::var("SDL3_LIB_DIR") {
        println!("cargo:rustc-env=SDL3_PKG_LIBDIR={}", dir);
        return;
    }

    let probe = pkg_config::Config::new()
        .cargo_metadata(false)
        .env_metadata(false)
        .probe("sdl3");

    // Not finding it is fine: the library may still be on the default
    // loader path or be named through SDL3_LIBRARY at runtime.
    if let Ok(lib) = probe {
        if let Some(path) = lib.link_paths.first() {
            println!("cargo:rustc-env=SDL3_PKG_LIBDIR={}", path.display());
        }
    }
}
