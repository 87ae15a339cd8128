//! Sequencer region decoding and format-version resolution.
//!
//! Two incompatible on-disk shapes exist for the trailing sequencer region:
//! the firmware 1.x "SEQD" shape and the firmware 2.x "SQ" shape, which
//! added per-step active flags and arpeggiator settings. `layout` declares
//! catalogs for both wrappers and the shared step/motion payload; `version`
//! classifies a buffer by its marker bytes and normalizes either shape into
//! the canonical `Sequencer`; `parser` holds the typed views over the
//! decoded records.

pub mod layout;
pub mod parser;
pub mod version;

pub use parser::{Motion, MotionSlot, Sequencer, StepEvent};
pub use version::{SequencerFormat, detect_format, resolve};
