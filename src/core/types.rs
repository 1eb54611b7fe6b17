//! Result and warning types shared by the two transforms.

use std::fmt;

use crate::core::classify::BlockKind;

/// A recoverable, per-line condition encountered during a transform.
///
/// Warnings never abort processing; the affected line stays in its input
/// form. They are printed to stderr by the CLI so stdout stays clean
/// template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A template variable has no entry in the secret store.
    MissingSecret { name: String },
    /// The key placeholder cannot be filled because the key material is
    /// empty.
    MissingKeyMaterial,
    /// An inline-tagged line carries no assignment; it was redacted to the
    /// opaque sentinel and cannot be restored.
    UnrestorableTaggedLine { line: usize },
    /// A block was still open at end of input; the region passed through
    /// untouched.
    UnterminatedBlock { kind: BlockKind, line: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingSecret { name } => {
                write!(f, "no value for {name} in secret store; leaving placeholder")
            }
            Warning::MissingKeyMaterial => {
                write!(f, "key material is empty; leaving key placeholder")
            }
            Warning::UnrestorableTaggedLine { line } => {
                write!(
                    f,
                    "line {line}: tagged secret line has no assignment; redacted opaquely"
                )
            }
            Warning::UnterminatedBlock { kind, line } => {
                write!(f, "line {line}: {kind} block is never closed; left untouched")
            }
        }
    }
}

/// Output of the strip transform.
#[derive(Debug, Clone)]
pub struct RedactionResult {
    /// The redacted template.
    pub text: String,
    /// Number of lines whose content changed (one per collapsed key
    /// block). Zero means the input was already redacted.
    pub substitutions: usize,
    pub warnings: Vec<Warning>,
}

/// Output of the inject transform.
#[derive(Debug, Clone)]
pub struct InjectionResult {
    /// The populated template.
    pub text: String,
    /// Number of placeholders filled with real values.
    pub substitutions: usize,
    pub warnings: Vec<Warning>,
}
