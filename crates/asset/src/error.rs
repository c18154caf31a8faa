//! Error types for model parsing and triangle assembly.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading and parsing a geometry file.
///
/// Material-file problems never surface here: an unreadable `.mtl` or a
/// missing `map_Kd` downgrades to "no texture" for that model.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error on line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A `v`/`vt`/`vn` directive with a missing or non-numeric field.
    /// `token` is the offending field, or the directive tag itself when
    /// the field is missing entirely.
    #[error("malformed '{token}' on line {line}")]
    MalformedLine { line: usize, token: String },

    /// An `f` directive that does not describe exactly three corners with
    /// 1-based positive indices.
    #[error("malformed face on line {line}")]
    MalformedFace { line: usize },
}

/// Which attribute pool a bad face reference pointed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    TextureCoordinate,
    Normal,
}

/// A face corner referenced a pool entry that does not exist, either via an
/// out-of-range index or a slot the face never declared. Fatal to assembling
/// the whole model; line numbers are gone by this point, so the face and
/// corner indices locate the culprit instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("face {face}, corner {corner}: unresolvable {kind:?} reference")]
pub struct AddressingError {
    pub kind: AttributeKind,
    pub face: usize,
    pub corner: usize,
}
