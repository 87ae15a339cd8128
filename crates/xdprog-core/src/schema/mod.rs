//! Declarative binary layout decoding.
//!
//! Record layouts are declared once, as static field descriptor catalogs
//! (`descriptor`), and decoded generically by one routine (`decode`) built on
//! safe byte/bit extraction primitives (`reader`). The result is an ordered,
//! validated value tree (`value`). Errors are field-scoped and abort the
//! enclosing record (`error`).
//!
//! The engine knows nothing about the patch format itself; the catalogs in
//! `records` supply the offsets, semantic types and constraints.

pub mod decode;
pub mod descriptor;
pub mod error;
pub mod reader;
pub mod value;

pub use decode::decode;
pub use descriptor::{Constraint, EnumSpec, FieldDescriptor, FieldKind, Schema};
pub use error::DecodeError;
pub use reader::RecordReader;
pub use value::{Record, Value};
