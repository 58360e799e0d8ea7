//! Chunk planning for bulk transfers
//!
//! Flash writes are accepted 1 KiB at a time, each chunk announced with its
//! own address. User fonts occupy up to four 4 KiB sections, each uploaded
//! with its own header.

use core::slice::Chunks;

use crate::frame::{FrameError, U24_MAX};

/// Largest flash write the module accepts per header
pub const FLASH_CHUNK_SIZE: usize = 1024;

/// Size of one user font section
pub const FONT_SECTION_SIZE: usize = 4096;

/// Number of user font sections on the module
pub const FONT_SECTIONS: u8 = 4;

/// Check that `len` bytes starting at `address` stay inside the 24-bit space
pub fn check_flash_range(address: u32, len: usize) -> Result<(), FrameError> {
    let end = (address as u64) + (len as u64);
    if end > U24_MAX as u64 + 1 {
        return Err(FrameError::ParameterOutOfRange);
    }
    Ok(())
}

/// Iterator over `(address, chunk)` pairs of a flash write
#[derive(Debug, Clone)]
pub struct FlashChunks<'a> {
    address: u32,
    chunks: Chunks<'a, u8>,
}

impl<'a> FlashChunks<'a> {
    /// Plan a write of `data` starting at `address`
    pub fn new(address: u32, data: &'a [u8]) -> Result<Self, FrameError> {
        check_flash_range(address, data.len())?;
        Ok(Self {
            address,
            chunks: data.chunks(FLASH_CHUNK_SIZE),
        })
    }
}

impl<'a> Iterator for FlashChunks<'a> {
    type Item = (u32, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let address = self.address;
        // Cannot overflow: the whole range was checked against 24 bits
        self.address += chunk.len() as u32;
        Some((address, chunk))
    }
}

/// Iterator over `(section, data)` pairs of a user font upload
#[derive(Debug, Clone)]
pub struct FontSections<'a> {
    section: u8,
    chunks: Chunks<'a, u8>,
}

impl<'a> FontSections<'a> {
    /// Plan an upload of `data` starting at `first_section`
    ///
    /// Fails if the font would run past the last section.
    pub fn new(first_section: u8, data: &'a [u8]) -> Result<Self, FrameError> {
        let needed = data.len().div_ceil(FONT_SECTION_SIZE);
        if first_section as usize + needed.max(1) > FONT_SECTIONS as usize {
            return Err(FrameError::ParameterOutOfRange);
        }
        Ok(Self {
            section: first_section,
            chunks: data.chunks(FONT_SECTION_SIZE),
        })
    }
}

impl<'a> Iterator for FontSections<'a> {
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let section = self.section;
        self.section += 1;
        Some((section, chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_flash_chunks_2500_bytes() {
        let data = [0u8; 2500];
        let chunks: Vec<_> = FlashChunks::new(0, &data)
            .unwrap()
            .map(|(address, chunk)| (address, chunk.len()))
            .collect();
        assert_eq!(chunks, [(0, 1024), (1024, 1024), (2048, 452)]);
    }

    #[test]
    fn test_flash_chunks_exact_multiple() {
        let data = [0u8; 2048];
        let chunks: Vec<_> = FlashChunks::new(0x100, &data)
            .unwrap()
            .map(|(address, chunk)| (address, chunk.len()))
            .collect();
        assert_eq!(chunks, [(0x100, 1024), (0x500, 1024)]);
    }

    #[test]
    fn test_flash_chunks_empty() {
        assert_eq!(FlashChunks::new(0, &[]).unwrap().count(), 0);
    }

    #[test]
    fn test_flash_range_limits() {
        assert_eq!(check_flash_range(U24_MAX, 1), Ok(()));
        assert_eq!(
            check_flash_range(U24_MAX, 2),
            Err(FrameError::ParameterOutOfRange)
        );
        assert_eq!(
            check_flash_range(u32::MAX, 0),
            Err(FrameError::ParameterOutOfRange)
        );
        assert!(FlashChunks::new(U24_MAX - 10, &[0u8; 20]).is_err());
    }

    #[test]
    fn test_font_sections() {
        let data = [0u8; 5000];
        let sections: Vec<_> = FontSections::new(1, &data)
            .unwrap()
            .map(|(section, chunk)| (section, chunk.len()))
            .collect();
        assert_eq!(sections, [(1, 4096), (2, 904)]);
    }

    #[test]
    fn test_font_sections_capacity() {
        let data = [0u8; 5000];
        assert!(FontSections::new(2, &data).is_ok());
        assert_eq!(
            FontSections::new(3, &data).err(),
            Some(FrameError::ParameterOutOfRange)
        );
        assert!(FontSections::new(3, &[0u8; 4096]).is_ok());
        assert!(FontSections::new(4, &[]).is_err());
    }
}
