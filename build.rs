fn main() {
    // UniFFI scaffolding is generated via proc-macros in uniffi_bindings.rs
    // using uniffi::setup_scaffolding!() macro - no UDL file needed

    // Rebuild when the embedded agent instruction changes
    println!("cargo:rerun-if-changed=src/prompt.txt");
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
