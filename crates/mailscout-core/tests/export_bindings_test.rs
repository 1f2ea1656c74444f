//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p mailscout-core export_bindings
//! Generated files appear in mailscout-core/bindings/*.ts

#[test]
fn export_bindings() {
    // ts-rs writes the .ts files from the #[ts(export)] attribute when
    // `cargo test` runs. This test keeps every exported type importable.
    use mailscout_core::models::{
        Confidence, EmailGuess, FinderEnvelope, FinderInput, FinderResponse, PatternLabel,
    };

    let _ = std::any::type_name::<FinderInput>();
    let _ = std::any::type_name::<FinderResponse>();
    let _ = std::any::type_name::<FinderEnvelope>();
    let _ = std::any::type_name::<EmailGuess>();
    let _ = std::any::type_name::<Confidence>();
    let _ = std::any::type_name::<PatternLabel>();
}
