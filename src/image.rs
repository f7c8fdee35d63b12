// Copyright 2024, The Horizen Foundation
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write;

use crate::errors::PadError;
use crate::FILL_BYTE;

/// A fixed-size memory image: the input binary followed by fill bytes.
///
/// Construction goes through [`MemImage::from_rom`], so an image always
/// holds exactly `capacity` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemImage {
    bytes: Vec<u8>,
    rom_len: usize,
}

impl MemImage {
    /// Pads `rom` with [`FILL_BYTE`] up to `capacity` bytes.
    ///
    /// Fails with [`PadError::CapacityExceeded`] if the binary is longer
    /// than the capacity.
    pub fn from_rom(rom: Vec<u8>, capacity: usize) -> Result<Self, PadError> {
        if rom.len() > capacity {
            return Err(PadError::CapacityExceeded {
                size: rom.len(),
                limit: capacity,
            });
        }

        let rom_len = rom.len();
        let mut bytes = rom;
        bytes.resize(capacity, FILL_BYTE);

        Ok(Self { bytes, rom_len })
    }

    /// Length of the original binary, before padding.
    pub fn rom_len(&self) -> usize {
        self.rom_len
    }

    /// Total length of the padded image.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writes the image as one two-digit lowercase hex value per line, in
    /// byte order. Every line ends with a newline, the last one included.
    pub fn write_hex_lines<W: Write>(&self, w: &mut W) -> Result<(), std::io::Error> {
        for byte in &self.bytes {
            writeln!(w, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(image: &MemImage) -> String {
        let mut buf = Vec::new();
        image.write_hex_lines(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn pads_with_fill_byte_up_to_capacity() {
        let image = MemImage::from_rom(vec![0x00, 0x01, 0xab], 5).unwrap();

        assert_eq!(render(&image), "00\n01\nab\nff\nff\n");
        assert_eq!(image.rom_len(), 3);
        assert_eq!(image.capacity(), 5);
    }

    #[test]
    fn empty_rom_is_all_fill() {
        let image = MemImage::from_rom(Vec::new(), 2).unwrap();

        assert_eq!(render(&image), "ff\nff\n");
    }

    #[test]
    fn exact_fit_adds_no_padding() {
        let image = MemImage::from_rom(vec![0x10, 0x20, 0x30, 0x40], 4).unwrap();

        assert_eq!(render(&image), "10\n20\n30\n40\n");
    }

    #[test]
    fn oversized_rom_is_rejected() {
        let err = MemImage::from_rom(vec![0u8; 6], 4).unwrap_err();

        assert_eq!(err, PadError::CapacityExceeded { size: 6, limit: 4 });
    }

    #[test]
    fn one_byte_over_capacity_is_rejected() {
        let err = MemImage::from_rom(vec![0u8; 5], 4).unwrap_err();

        assert_eq!(err, PadError::CapacityExceeded { size: 5, limit: 4 });
    }

    #[test]
    fn zero_capacity_accepts_only_an_empty_rom() {
        let image = MemImage::from_rom(Vec::new(), 0).unwrap();
        assert_eq!(render(&image), "");

        let err = MemImage::from_rom(vec![0xff], 0).unwrap_err();
        assert_eq!(err, PadError::CapacityExceeded { size: 1, limit: 0 });
    }

    #[test]
    fn rendered_lines_round_trip_to_the_rom() {
        let rom: Vec<u8> = (0u8..=255).collect();
        let image = MemImage::from_rom(rom.clone(), 300).unwrap();

        let decoded: Vec<u8> = render(&image)
            .lines()
            .map(|line| {
                assert_eq!(line.len(), 2);
                hex::decode(line).unwrap()[0]
            })
            .collect();

        assert_eq!(decoded.len(), 300);
        assert_eq!(&decoded[..rom.len()], &rom[..]);
        assert!(decoded[rom.len()..].iter().all(|&b| b == FILL_BYTE));
    }

    #[test]
    fn rendering_is_deterministic() {
        let image = MemImage::from_rom(vec![0xde, 0xad, 0xbe, 0xef], 8).unwrap();

        assert_eq!(render(&image), render(&image));
    }

    #[test]
    fn capacity_exceeded_reports_both_sizes() {
        let err = MemImage::from_rom(vec![0u8; 6], 4).unwrap_err();

        assert_eq!(err.to_string(), "Binary too large: 6 bytes (limit 4)");
    }
}
