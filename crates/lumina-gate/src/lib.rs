//! # Lumina Gate - Page Access Control
//!
//! Client-side password gate for the LUMINA DEX preview pages. A correct
//! password opens an ephemeral session recorded in a key/value session
//! store; the session expires after a fixed duration (24 hours by default)
//! and is cleared on the next check.
//!
//! This is presentation-level gating for unreleased marketing pages, not an
//! authentication system: the password is a single shared string checked
//! locally, and nothing is verified server-side.
//!
//! ```
//! use lumina_gate::{GateConfig, MemoryStore, SessionGate};
//!
//! let config = GateConfig::new("lumina2025");
//! let mut gate = SessionGate::new(config, MemoryStore::new());
//!
//! assert!(gate.authenticate("lumina2025", 1_000).is_ok());
//! assert!(gate.is_authenticated(1_000 + 3_600));
//! gate.logout();
//! assert!(!gate.is_authenticated(1_000 + 3_601));
//! ```

pub mod session;
pub mod store;

// Re-exports
pub use session::{GateConfig, GateError, SessionGate};
pub use store::{MemoryStore, SessionStore};
