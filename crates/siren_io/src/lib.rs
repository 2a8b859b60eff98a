//! # Siren I/O
//!
//! Infrastructure adapters for the Siren audio recovery tool.
//!
//! This crate provides the concrete implementations behind the ports defined
//! in `siren_core`:
//!
//! - **ContainerReader**: read-only `BlockSource` over a container file
//! - **At3Tool**: `AudioDecoder` that shells out to the external
//!   `psp_at3tool` binary

mod reader;
mod transcoder;

pub use reader::ContainerReader;
pub use transcoder::At3Tool;
