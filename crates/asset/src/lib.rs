//! Model loading for the runner scene: OBJ geometry ingestion plus
//! triangle assembly with fully resolved per-vertex attributes.

pub mod error;
pub mod mesh;
pub mod mtl;
pub mod obj;

pub use error::{AddressingError, AttributeKind, ParseError};
pub use mesh::{Classification, Model, ResolvedVertex, Triangle};
pub use obj::{load_model_from_path, load_model_from_reader, load_model_from_str};
