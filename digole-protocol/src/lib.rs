//! Digole Display Command Protocol
//!
//! This crate builds the byte frames understood by Digole serial graphics
//! display modules. It performs no I/O: every command is turned into a
//! stack-allocated [`Frame`] that a transport writes out verbatim.
//!
//! # Protocol Overview
//!
//! A command is an ASCII mnemonic followed by its parameters:
//! ```text
//! ┌────────────┬──────────────────────────────────────┐
//! │ MNEMONIC   │ PARAMETERS                           │
//! │ 2–5 ASCII  │ varint / literal byte / 24-bit BE    │
//! └────────────┴──────────────────────────────────────┘
//! ```
//!
//! Coordinates and sizes use a one-or-two byte [`varint`]. Colour channels,
//! flags and pin values are literal bytes. Flash addresses are 3 bytes,
//! big-endian. There is no framing byte, length or checksum: the module
//! knows each command's layout from its mnemonic.
//!
//! Text is the exception. The module has no multi-line write, so
//! [`text::LineSplitter`] splits a byte stream on line terminators into
//! `TT…\r` and `TRT` frames.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod chunk;
pub mod commands;
pub mod frame;
pub mod text;
pub mod types;
pub mod varint;

pub use chunk::{FlashChunks, FontSections, FLASH_CHUNK_SIZE, FONT_SECTIONS, FONT_SECTION_SIZE};
pub use commands::Command;
pub use frame::{Frame, FrameError, MAX_FRAME_SIZE};
pub use text::{split_lines, LineSplitter, TextSegment, TEXT_TERMINATOR};
pub use types::{BitmapDepth, Color, DrawMode, LcdChip, Orientation, TextUnit, TouchMode};
pub use varint::VARINT_MAX;
