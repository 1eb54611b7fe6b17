//! Stencil - reversible secret redaction for deployment templates.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── strip         # Redact secrets (stdin/file to stdout)
//! │   ├── inject        # Restore secrets (stdout or atomic file write)
//! │   ├── check         # Commit-time guard for live secrets
//! │   ├── completions   # Shell completions
//! │   └── output        # stderr status helpers
//! └── core/             # Core library components
//!     ├── markers       # Marker grammar and canonical forms
//!     ├── classify      # Line-classifier state machine
//!     ├── redact        # Strip transform
//!     ├── restore       # Inject transform
//!     ├── secrets       # KEY=VALUE secret store loader
//!     ├── keymat        # Private-key blob loader
//!     ├── writer        # Atomic, permission-hardened output
//!     └── config        # Optional .stencil.toml defaults
//! ```
//!
//! # The transform pair
//!
//! `strip` and `inject` are formal inverses over one shared grammar: for a
//! canonical redacted template `T`, a secret store `S` covering its
//! variables, and key material `K` matching its placeholder dialect,
//! `strip(inject(T, S, K)) == T` byte-for-byte, and `strip` is idempotent
//! on its own output. Secret-bearing lines are canonicalized on redaction;
//! everything else is preserved verbatim.

pub mod cli;
pub mod core;
pub mod error;
