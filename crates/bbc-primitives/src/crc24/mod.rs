//! CRC-24Q checksum.
//!
//! The 24-bit cyclic redundancy check (polynomial 0x1864CFB, zero initial
//! value) appended to address payloads before base32 encoding. A short
//! integrity hash: corrupted or mistyped addresses fail to decode.

/// CRC-24Q generator polynomial.
const POLY: u32 = 0x1864CFB;

/// Compute the CRC-24Q checksum of the input data.
///
/// # Arguments
/// * `data` - The bytes to checksum.
///
/// # Returns
/// The 24-bit checksum in the low bits of a `u32`.
pub fn crc24q(data: &[u8]) -> u32 {
    let mut crc: u32 = 0;
    for &byte in data {
        crc ^= (byte as u32) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0x0100_0000 != 0 {
                crc ^= POLY;
            }
        }
    }
    crc & 0x00FF_FFFF
}

/// Compute the CRC-24Q checksum as 3 big-endian bytes.
///
/// # Arguments
/// * `data` - The bytes to checksum.
///
/// # Returns
/// The checksum as a `[u8; 3]` array, most significant byte first.
pub fn crc24q_bytes(data: &[u8]) -> [u8; 3] {
    let crc = crc24q(data);
    [(crc >> 16) as u8, (crc >> 8) as u8, crc as u8]
}
