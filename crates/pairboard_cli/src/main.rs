//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pairboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("pairboard_core version={}", pairboard_core::core_version());
    println!(
        "pairboard_core default_log_level={}",
        pairboard_core::default_log_level()
    );
}
