use std::fs;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let manifest = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo: toml::Value = manifest.parse().expect("Failed to parse Cargo.toml");
    let package = cargo.get("package");

    for key in ["name", "version", "description"] {
        if let Some(value) = package.and_then(|pkg| pkg.get(key)).and_then(|v| v.as_str()) {
            println!("cargo:rustc-env=CARGO_PKG_{}={}", key.to_uppercase(), value);
        }
    }
}
