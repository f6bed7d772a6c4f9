pub mod encoding;

use crate::Error;
pub fn tag_error(err: &str) -> Error {
    Error::TagError(err.to_string())
}

// slices longer than 4 bytes keep their lowest 32 bits
pub fn decode_int_be_u32(input: &[u8]) -> u32 {
    input
        .iter()
        .fold(0u32, |result, b| (result << 8) | *b as u32)
}

// big endian, truncated or zero padded on the left to `width` bytes
pub fn encode_int_be(input: u32, width: usize) -> Vec<u8> {
    let mut result = vec![0; width];
    for i in 0..width {
        let shift = 8 * (width - 1 - i);
        if shift < 32 {
            result[i] = (input >> shift) as u8;
        }
    }
    result
}
