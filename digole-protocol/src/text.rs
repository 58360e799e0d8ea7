//! Text stream splitting
//!
//! The module prints text with `TT <chars> CR` and moves to the next line
//! with `TRT`. It has no multi-line write and does not treat `\n` or `\r` as
//! printable, so a byte stream has to be cut at its line terminators:
//!
//! ```text
//! "Hello\r\nWorld"  →  TT "Hello" CR │ TRT │ TT "World" CR
//! ```
//!
//! `\n` and `\r` are treated alike. A `\r\n` or `\n\r` pair is one line
//! advance; two identical terminators are two.

use crate::frame::{Frame, FrameError};

/// Mnemonic of the print command
pub const TEXT_MNEMONIC: &[u8] = b"TT";

/// Frame that advances the text cursor to the next line
pub const NEW_LINE: &[u8] = b"TRT";

/// Byte ending the characters of a print command
pub const TEXT_TERMINATOR: u8 = 0x0D;

/// Longest run of characters carried by one print frame
///
/// Longer lines are sent as consecutive print frames, which the module
/// renders back to back.
pub const MAX_TEXT_RUN: usize = 64;

/// Capacity of a print frame
pub const TEXT_FRAME_SIZE: usize = 2 + MAX_TEXT_RUN + 1;

/// Frame produced for a text segment
pub type TextFrame = Frame<TEXT_FRAME_SIZE>;

/// Whether `byte` ends a line
pub fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// One piece of a split text stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSegment<'a> {
    /// Printable characters, never empty and never containing a terminator
    Text(&'a [u8]),
    /// Line advance
    NewLine,
}

impl TextSegment<'_> {
    /// Encode this segment into a frame
    pub fn to_frame(&self) -> Result<TextFrame, FrameError> {
        match self {
            TextSegment::Text(chars) => {
                let mut frame = TextFrame::new(TEXT_MNEMONIC)?;
                frame.push_bytes(chars)?;
                frame.push_byte(TEXT_TERMINATOR)?;
                Ok(frame)
            }
            TextSegment::NewLine => TextFrame::new(NEW_LINE),
        }
    }
}

/// Split `text` into print and line-advance segments
pub fn split_lines(text: &[u8]) -> LineSplitter<'_> {
    LineSplitter::new(text)
}

/// Iterator that splits a byte stream into [`TextSegment`]s
#[derive(Debug, Clone)]
pub struct LineSplitter<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> LineSplitter<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = TextSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.input.get(self.pos..).filter(|rest| !rest.is_empty())?;

        let line_len = rest
            .iter()
            .position(|&b| is_line_terminator(b))
            .unwrap_or(rest.len());

        if line_len > 0 {
            let run = line_len.min(MAX_TEXT_RUN);
            self.pos += run;
            return Some(TextSegment::Text(&rest[..run]));
        }

        // Sitting on a terminator: consume it and its opposite partner
        let terminator = rest[0];
        self.pos += 1;
        if let Some(&next) = rest.get(1) {
            if is_line_terminator(next) && next != terminator {
                self.pos += 1;
            }
        }
        Some(TextSegment::NewLine)
    }
}
