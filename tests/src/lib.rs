//! # Relief-Ledger Test Suite
//!
//! Unified test crate for cross-subsystem choreography. Per-crate unit
//! tests live next to their code; everything here wires two or more
//! subsystems together the way a distribution site would.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs        # Scan → ledger → inventory → report chains
//!     ├── concurrency.rs  # Shared-terminal races on one pair
//!     └── durability.rs   # File-backed stores across process restarts
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rl-tests
//!
//! # By category
//! cargo test -p rl-tests integration::flows::
//! cargo test -p rl-tests integration::concurrency::
//! cargo test -p rl-tests integration::durability::
//! ```

#![allow(dead_code)]


/// Installs a fmt subscriber honoring `RUST_LOG`, once per process.
/// Call from a test when its log output is worth seeing on failure.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
