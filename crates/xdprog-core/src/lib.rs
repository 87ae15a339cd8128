//! xdprog core library: minilogue xd program dump decoding.
//!
//! This crate turns a raw patch buffer into a strongly-typed, validated
//! value tree and renders raw hardware codes into human units. Record
//! layouts are declared once as static field descriptor catalogs and
//! decoded by one generic, schema-driven routine; the sequencer region is
//! resolved across its two historical on-disk shapes into one canonical
//! representation. Parsing is byte-oriented and side-effect free; all I/O
//! stays with the caller.
//!
//! Invariants:
//! - Decoding is all-or-nothing per record and fails with the offending
//!   field name; no partial record is ever produced.
//! - Decoding the same buffer twice yields structurally equal results.
//! - Legacy sequencer data is normalized to the canonical shape by a total
//!   conversion; the legacy decode is never mutated in place.
//! - Physical-value codecs are total over their declared domains and reject
//!   anything outside them.
//!
//! # Examples
//! ```no_run
//! use xdprog_core::{Program, resolve_sequencer};
//!
//! let buf = std::fs::read("Prog_000.prog_bin")?;
//! let program = Program::parse(&buf)?;
//! let sequencer = resolve_sequencer(&buf)?;
//! println!("{} ({:?})", program.name(), sequencer.map(|s| s.format()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod records;
pub mod report;
pub mod schema;
pub mod units;

pub use records::program::Program;
pub use records::sequencer::{Sequencer, SequencerFormat, detect_format};
pub use report::{PatchReport, REPORT_VERSION, UserUnitMappings, build_report};
pub use schema::{DecodeError, Record, Value};
pub use units::CodecError;

/// Decode the sequencer region of a patch buffer, resolving whichever
/// on-disk shape is present into the canonical representation. `Ok(None)`
/// means the buffer carries no sequencer marker.
pub fn resolve_sequencer(buf: &[u8]) -> Result<Option<Sequencer>, DecodeError> {
    records::sequencer::resolve(buf)
}
