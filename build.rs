use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Put memory.x where cortex-m-rt's link.x INCLUDE can find it.
    fs::copy("memory.x", out_dir.join("memory.x")).expect("copy memory.x -> OUT_DIR");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");

    // Host builds (unit tests) must not see the target linker scripts.
    if env::var("CARGO_FEATURE_FIRMWARE").is_ok() {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}
