//! # Federated-Chain Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks
//! └── src/integration/  # Cross-crate flows
//!     ├── sync_flow.rs        # codec → chain → ancestry
//!     └── federation_flow.rs  # election across a restart
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p fc-tests
//! cargo test -p fc-tests integration::sync_flow
//!
//! # Benchmarks
//! cargo bench -p fc-tests
//! ```

pub mod fixtures;
pub mod integration;
