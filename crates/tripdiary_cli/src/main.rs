//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tripdiary_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("tripdiary_core ping={}", tripdiary_core::ping());
    println!("tripdiary_core version={}", tripdiary_core::core_version());
}
