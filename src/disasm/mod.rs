//! Decoding engines.
//!
//! - `cursor`/`decoder`: the bounded byte cursor and the four-stage decode
//!   contract every architecture implements
//! - `x86`, `mips`: table-driven decoders
//! - `registry`, `engine`, `config`: decoder selection and the public batch
//!   surface

pub mod config;
pub mod cursor;
pub mod decoder;
pub mod engine;
pub mod mips;
pub mod registry;
pub mod x86;

pub use config::{DecodeOptions, DisassemblerConfig, ErrorPolicy};
pub use cursor::Cursor;
pub use engine::{Disassembly, Engine, Item, Iter};
