//! Errors produced while loading, laying out or generating a multi-mode graph.

use std::io;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Everything that can stop a layout run.
///
/// None of these are recovered from: either a complete placement is produced,
/// or nothing is written.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The input text did not match the line format.
    #[error("malformed input at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A class label was numeric but does not fit a class index.
    #[error("malformed input at line {line}: class `{token}` is out of range")]
    InvalidClass { line: usize, token: String },

    /// A node field was blank once surrounding whitespace was removed.
    #[error("malformed input at line {line}: empty node identifier")]
    EmptyNodeId { line: usize },

    /// The same node was given two different classes.
    #[error("malformed input at line {line}: node `{node}` has class {found}, but was already class {existing}")]
    ClassConflict {
        node: String,
        line: usize,
        existing: u32,
        found: u32,
    },

    /// An edge references a node that has no class.
    #[error("edge references unknown node `{node}`")]
    UnknownNode { node: String },

    /// A full sweep over every class placed nothing while nodes remain.
    #[error("placement stalled with {remaining} nodes unplaced (e.g. {sample:?}); the graph has a cycle")]
    StalledPlacement { remaining: usize, sample: Vec<String> },

    /// The random graph generator was asked for something impossible.
    #[error("invalid generator settings: {0}")]
    InvalidGenerator(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
