/// Applies the 4-byte mask to the payload in place.
///
/// XOR is its own inverse, so the same operation masks and unmasks.
pub fn unmask(payload: &mut [u8], mask: [u8; 4]) {
    for (i, byte) in payload.iter_mut().enumerate() {
        *byte ^= mask[i & 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_with_rolling_key() {
        let mut payload = [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF];
        let mask = [0x0A, 0x0B, 0x0C, 0x0D];

        unmask(&mut payload, mask);

        assert_eq!(payload, [0x0A, 0x0B, 0x0C, 0x0D, 0xF5, 0xF4]);
    }

    #[test]
    fn round_trip() {
        let original = b"Hello, world!".to_vec();
        let mask = [0x37, 0xFA, 0x21, 0x3D];

        let mut payload = original.clone();

        unmask(&mut payload, mask);
        assert_ne!(payload, original);

        unmask(&mut payload, mask);
        assert_eq!(payload, original);
    }
}
