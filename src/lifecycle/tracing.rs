//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that
//! writes to **stderr**, so the amended template can be piped from stdout.
//!
//! ```bash
//! # Endpoint summaries and diagnostics (default)
//! multiple-responses --service service.json --template template.json
//!
//! # Per-status-code detail
//! RUST_LOG=debug multiple-responses --service service.json --template template.json
//! ```
//!
//! With `RUST_LOG=debug` the reconciler logs one line per status code:
//!
//! ```text
//! DEBUG lifecycle:amend_event: Remove identifier="ApiGatewayMethodPingGet" status=200 from_integration=true from_method=true
//! DEBUG lifecycle:amend_event: Configure identifier="ApiGatewayMethodPingGet" status=302 headers=2 templates=2 properties=0
//! INFO lifecycle:amend_event: Reconciled identifier=ApiGatewayMethodPingGet created=[302] updated=[] removed=[200]
//! ```

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // The span hierarchy already says where we are
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
