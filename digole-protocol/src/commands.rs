//! Command table for Digole display modules
//!
//! Each [`Command`] maps to exactly one frame. Commands that carry a bulk
//! payload (bitmaps, uploads, flash writes) produce only their header here;
//! the payload follows on the wire unchanged.

use crate::frame::{Frame, FrameError};
use crate::text::{NEW_LINE, TEXT_MNEMONIC, TEXT_TERMINATOR};
use crate::types::{BitmapDepth, DrawMode, LcdChip, Orientation, TextUnit, TouchMode};

/// Row start addresses sent with `STCR` for 4-line HD44780-style panels
const LCD_ROW_ADDRESSES: [u8; 4] = [0x80, 0xC0, 0x94, 0xD4];

/// Commands understood by the display module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    // Settings
    /// Show or hide the text cursor
    SetCursor(bool),
    /// Show or hide the configuration screen at power-up
    SetDisplayConfig(bool),
    SetRotation(Orientation),
    SetContrast(u8),
    SetBacklight(u8),
    /// Foreground colour as raw 6-bit channels
    SetColorChannels { r: u8, g: u8, b: u8 },
    /// Foreground colour as a packed 3-3-2 byte
    SetColorIndex(u8),
    /// Use the current foreground colour as background
    SetBackgroundColor,
    SetDrawMode(DrawMode),

    // Drawing
    Clear,
    DrawPixel { x: u16, y: u16, color: u8 },
    DrawLine { x0: u16, y0: u16, x1: u16, y1: u16 },
    /// Line from the graphics cursor
    DrawLineTo { x: u16, y: u16 },
    DrawRect { x: u16, y: u16, w: u16, h: u16, filled: bool },
    DrawCircle { x: u16, y: u16, r: u16, filled: bool },
    /// Header of a bitmap; image data follows
    BitmapHeader { depth: BitmapDepth, x: u16, y: u16, w: u16, h: u16 },
    /// Shift a screen area by a signed offset
    MoveArea { x0: u16, y0: u16, x1: u16, y1: u16, dx: i8, dy: i8 },
    SetLinePattern(u8),
    SetGraphicsPosition { x: u16, y: u16 },
    /// Clip drawing to a window
    SetDrawWindow { x: u16, y: u16, w: u16, h: u16 },
    ResetDrawWindow,
    ClearDrawWindow,

    // Text
    SetFont(u8),
    SetTextPosition { x: u16, y: u16, unit: TextUnit },
    Backspace,
    SetTextPositionOffset { dx: i8, dy: i8 },
    /// Move the text cursor to the start of the next line
    NewLine,
    /// Print one character at the text cursor
    TextChar(u8),

    // Touchscreen and telemetry
    CalibrateTouchscreen,
    /// Request a touch position; two 16-bit values follow
    ReadTouchscreen(TouchMode),
    ReadBattery,
    ReadAux,
    ReadTemperature,

    // Uploads
    /// Header of a start screen upload; `len` data bytes follow
    StartScreenHeader { len: u16 },
    /// Header of one 4 KiB user font section; `len` data bytes follow
    UserFontHeader { section: u8, len: u16 },

    // Flash
    FlashErase { address: u32, len: u32 },
    /// Request `len` bytes of flash; they follow from the module
    FlashRead { address: u32, len: u32 },
    /// Header of one flash write chunk; `len` data bytes follow
    FlashWriteHeader { address: u32, len: u32 },
    /// Use a font stored in flash
    SetFlashFont(u32),
    /// Run a command set stored in flash
    RunFlashCommandSet(u32),

    // Low-level pass-through
    SetLcdChip(LcdChip),
    SetLcdSize { cols: u8, rows: u8 },
    RawCommand(u8),
    RawData(u8),
    DigitalWrite(u8),

    // Link
    /// Change the module's I2C address
    SetI2cAddress(u8),
    /// Change the module's UART baud rate
    SetBaudRate(u32),
}

impl Command {
    /// Encode this command into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match *self {
            Command::SetCursor(enabled) => Frame::new(if enabled { b"CS1" } else { b"CS0" }),
            Command::SetDisplayConfig(enabled) => with_byte(b"DC", enabled as u8),
            Command::SetRotation(orientation) => with_byte(b"SD", orientation.token()),
            Command::SetContrast(value) => with_byte(b"CT", value),
            Command::SetBacklight(value) => with_byte(b"BL", value),
            Command::SetColorChannels { r, g, b } => {
                let mut frame = Frame::new(b"ESC")?;
                frame.push_bytes(&[r, g, b])?;
                Ok(frame)
            }
            Command::SetColorIndex(color) => with_byte(b"SC", color),
            Command::SetBackgroundColor => Frame::new(b"BGC"),
            Command::SetDrawMode(mode) => with_byte(b"DM", mode.token()),

            Command::Clear => Frame::new(b"CL"),
            Command::DrawPixel { x, y, color } => {
                let mut frame = with_varints(b"DP", &[x, y])?;
                frame.push_byte(color)?;
                Ok(frame)
            }
            Command::DrawLine { x0, y0, x1, y1 } => with_varints(b"LN", &[x0, y0, x1, y1]),
            Command::DrawLineTo { x, y } => with_varints(b"LT", &[x, y]),
            Command::DrawRect { x, y, w, h, filled } => {
                let x1 = x.checked_add(w).ok_or(FrameError::ParameterOutOfRange)?;
                let y1 = y.checked_add(h).ok_or(FrameError::ParameterOutOfRange)?;
                let mnemonic = if filled { b"FR" } else { b"DR" };
                with_varints(mnemonic, &[x, y, x1, y1])
            }
            Command::DrawCircle { x, y, r, filled } => {
                let mut frame = with_varints(b"CC", &[x, y, r])?;
                frame.push_byte(filled as u8)?;
                Ok(frame)
            }
            Command::BitmapHeader { depth, x, y, w, h } => {
                let mnemonic: &[u8] = match depth {
                    BitmapDepth::Mono => b"DIM",
                    BitmapDepth::Color256 => b"EDIM1",
                    BitmapDepth::Color262K => b"EDIM3",
                };
                with_varints(mnemonic, &[x, y, w, h])
            }
            Command::MoveArea { x0, y0, x1, y1, dx, dy } => {
                let mut frame = with_varints(b"MA", &[x0, y0, x1, y1])?;
                frame.push_bytes(&[dx as u8, dy as u8])?;
                Ok(frame)
            }
            Command::SetLinePattern(pattern) => with_byte(b"SLP", pattern),
            Command::SetGraphicsPosition { x, y } => with_varints(b"GP", &[x, y]),
            Command::SetDrawWindow { x, y, w, h } => with_varints(b"DWWIN", &[x, y, w, h]),
            Command::ResetDrawWindow => Frame::new(b"RSTDW"),
            Command::ClearDrawWindow => Frame::new(b"WINCL"),

            Command::SetFont(font) => with_byte(b"SF", font),
            Command::SetTextPosition { x, y, unit } => {
                let mnemonic = match unit {
                    TextUnit::Character => b"TP" as &[u8],
                    TextUnit::Pixel => b"ETP",
                };
                with_varints(mnemonic, &[x, y])
            }
            Command::Backspace => Frame::new(b"ETB"),
            Command::SetTextPositionOffset { dx, dy } => {
                let mut frame = Frame::new(b"ETO")?;
                frame.push_bytes(&[dx as u8, dy as u8])?;
                Ok(frame)
            }
            Command::NewLine => Frame::new(NEW_LINE),
            Command::TextChar(c) => {
                let mut frame = Frame::new(TEXT_MNEMONIC)?;
                frame.push_bytes(&[c, TEXT_TERMINATOR])?;
                Ok(frame)
            }

            Command::CalibrateTouchscreen => Frame::new(b"TUCHC"),
            Command::ReadTouchscreen(mode) => with_byte(b"RPNXY", mode.token()),
            Command::ReadBattery => Frame::new(b"RDBAT"),
            Command::ReadAux => Frame::new(b"RDAUX"),
            Command::ReadTemperature => Frame::new(b"RDTMP"),

            Command::StartScreenHeader { len } => {
                let mut frame = Frame::new(b"SSS")?;
                frame.push_u16_le(len)?;
                Ok(frame)
            }
            Command::UserFontHeader { section, len } => {
                let mut frame = with_byte(b"SUF", section)?;
                frame.push_u16_le(len)?;
                Ok(frame)
            }

            Command::FlashErase { address, len } => with_u24s(b"FLMER", &[address, len]),
            Command::FlashRead { address, len } => with_u24s(b"FLMRD", &[address, len]),
            Command::FlashWriteHeader { address, len } => with_u24s(b"FLMWR", &[address, len]),
            Command::SetFlashFont(address) => with_u24s(b"SFF", &[address]),
            Command::RunFlashCommandSet(address) => with_u24s(b"FLMCS", &[address]),

            Command::SetLcdChip(chip) => with_byte(b"SLCD", chip.token()),
            Command::SetLcdSize { cols, rows } => {
                let mut frame = Frame::new(b"STCR")?;
                frame.push_bytes(&[cols, rows])?;
                frame.push_bytes(&LCD_ROW_ADDRESSES)?;
                Ok(frame)
            }
            Command::RawCommand(command) => with_byte(b"MCD", command),
            Command::RawData(value) => with_byte(b"MDT", value),
            Command::DigitalWrite(value) => with_byte(b"DOUT", value),

            Command::SetI2cAddress(address) => with_byte(b"SI2CA", address),
            Command::SetBaudRate(baud) => {
                let mut frame = Frame::new(b"SB")?;
                push_decimal(&mut frame, baud)?;
                frame.push_bytes(b"\r\n")?;
                Ok(frame)
            }
        }
    }

    /// Number of response bytes the module sends after this command
    ///
    /// Flash reads answer with their requested length.
    pub fn response_len(&self) -> usize {
        match *self {
            Command::ReadTouchscreen(_) => 4,
            Command::ReadBattery | Command::ReadAux | Command::ReadTemperature => 2,
            Command::FlashRead { len, .. } => len as usize,
            _ => 0,
        }
    }
}

fn with_byte(mnemonic: &[u8], value: u8) -> Result<Frame, FrameError> {
    let mut frame = Frame::new(mnemonic)?;
    frame.push_byte(value)?;
    Ok(frame)
}

fn with_varints(mnemonic: &[u8], values: &[u16]) -> Result<Frame, FrameError> {
    let mut frame = Frame::new(mnemonic)?;
    for &value in values {
        frame.push_varint(value)?;
    }
    Ok(frame)
}

fn with_u24s(mnemonic: &[u8], values: &[u32]) -> Result<Frame, FrameError> {
    let mut frame = Frame::new(mnemonic)?;
    for &value in values {
        frame.push_u24(value)?;
    }
    Ok(frame)
}

/// Append `value` as ASCII decimal digits
fn push_decimal(frame: &mut Frame, value: u32) -> Result<(), FrameError> {
    let mut digits = [0u8; 10];
    let mut start = digits.len();
    let mut rest = value;
    loop {
        start -= 1;
        digits[start] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    frame.push_bytes(&digits[start..])
}
