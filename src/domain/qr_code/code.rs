//! Short public codes printed on QR stickers and NFC tags.

use rand::Rng;

pub const CODE_LENGTH: usize = 8;

/// Lowercase alphanumerics minus the look-alikes `0 o 1 l i`.
pub const CODE_ALPHABET: &[u8] = b"abcdefghjkmnpqrstuvwxyz23456789";

/// Generates a random code. Uniqueness is enforced by the store.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Cheap shape check before hitting the database.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}
