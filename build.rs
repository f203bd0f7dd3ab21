fn main() {
    #[cfg(feature = "cffi")]
    generate_header();
}

/// Writes `dictrie.h` for the C interface into `OUT_DIR`.
#[cfg(feature = "cffi")]
fn generate_header() {
    use std::env;
    use std::path::PathBuf;

    println!("cargo:rerun-if-changed=src/trie_c.rs");
    println!("cargo:rerun-if-changed=src/types.rs");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("DICTRIE_H")
        .with_sys_include("stdbool.h")
        .with_sys_include("stdint.h")
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(out_dir.join("dictrie.h"));
}
