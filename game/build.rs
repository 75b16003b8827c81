use std::env;

fn main() {
    // Link flags for the emscripten build of the binary only, never for dependencies
    let target = env::var("TARGET").unwrap_or_default();
    let package_name = env::var("CARGO_PKG_NAME").unwrap_or_default();

    if target == "wasm32-unknown-emscripten" && package_name == "vlk3d" {
        println!("cargo:rustc-link-arg=-sEXPORTED_FUNCTIONS=['_main']");
        println!("cargo:rustc-link-arg=--preload-file=assets");
        println!("cargo:rustc-link-arg=--preload-file=levels");
    }
}
