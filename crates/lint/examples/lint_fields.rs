//! Lints each command-line argument as a seconds field.
//!
//! ```text
//! RUST_LOG=gs1_lint=debug cargo run -p gs1-lint --example lint_fields -- 00 60 x0
//! ```

use gs1_lint::registry::{LinterRegistry, RegistryError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = LinterRegistry::builtin();

    for data in std::env::args().skip(1) {
        match registry.lint("ss", &data) {
            Ok(()) => println!("ok    {data}"),
            Err(RegistryError::Lint(err)) => {
                println!("fail  {}  {}", err.markup(&data), err.kind);
            }
            Err(other) => println!("error {other}"),
        }
    }
}
