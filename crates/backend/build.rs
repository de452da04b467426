use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// target/<profile>, where the backend binary lands
fn profile_dir() -> PathBuf {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let profile = env::var("PROFILE").expect("PROFILE not set");
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
        .expect("Could not find target profile directory")
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("Could not find workspace root");
    let source = workspace_root.join("config.toml");

    // load_config() looks for config.toml next to the executable
    if !source.exists() {
        println!("cargo:warning=config.toml not found at {:?}, backend will use defaults", source);
        return;
    }
    let dest = profile_dir().join("config.toml");
    fs::copy(&source, &dest).unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}
