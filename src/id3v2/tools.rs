// drop every 0x00 that directly follows an 0xFF of the input
pub fn undo_unsynch(vec: &mut Vec<u8>) {
    let mut previous = 0x00;
    vec.retain(|&b| {
        let keep = previous != 0xFF || b != 0x00;
        previous = b;
        keep
    });
}

// insert 0x00 after every 0xFF that would otherwise start a false sync
// (followed by %111xxxxx or 0x00, or last)
pub fn unsynch(input: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(input.len() + input.len() / 16);
    for (i, b) in input.iter().enumerate() {
        result.push(*b);
        if *b == 0xFF {
            match input.get(i + 1) {
                Some(next) if *next < 0xE0 && *next != 0x00 => (),
                _ => result.push(0x00),
            }
        }
    }
    result
}

pub fn decode_synch_int(input: &[u8]) -> Result<u32, String> {
    if input.len() > 5 {
        return Err(format!("Synchsafe ints are limited to 32 bits"));
    }
    let mut result: u32 = 0;
    for (i, b) in input.iter().enumerate() {
        // verify that this is a valid synchsafe int
        // (by checking that the msb of each byte is zero)
        if b & 0x80 != 0 {
            return Err(format!("Invalid synch-safe byte at position {}", i));
        }
        // if so, transform to proper uint by
        // moving the 7 bit parts to proper places
        // (0000 0001 0111 1111 => 1111 1111)
        result |= (*b as u32) << (7 * (input.len() - 1 - i));
    }
    Ok(result)
}

pub fn encode_synch_int(input: u32, use_fifth_bit: bool) -> Result<Vec<u8>, String> {
    // request >28 bit explicitly
    if input >= 0x10000000 && !use_fifth_bit {
        Err("Input uses more than 28 bits, but use fifth bit option is not enabled.".to_string())
    } else {
        let mut result = Vec::new();

        if use_fifth_bit {
            result.push((input >> 28) as u8);
        }
        for i in 0..4 {
            let mut r = input & (0x0FE00000 >> (7 * i));
            r = r >> (7 * (3 - i));

            result.push(r as u8);
        }
        Ok(result)
    }
}

// frame ids are made of A-Z and 0-9 only
fn is_frame_id(input: &[u8]) -> bool {
    input
        .iter()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

pub fn decode_frame_id(input: &[u8]) -> Result<String, String> {
    if !is_frame_id(input) {
        return Err(format!("Invalid frame ID {:X?}", input));
    }
    Ok(input.iter().map(|c| *c as char).collect())
}

pub fn encode_frame_id(input: &str) -> Result<Vec<u8>, String> {
    if !is_frame_id(input.as_bytes()) {
        return Err(format!("Invalid frame ID \"{}\"", input));
    }
    Ok(input.as_bytes().to_vec())
}
