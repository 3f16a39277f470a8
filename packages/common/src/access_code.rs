use rand::Rng;

/// Characters used in judge access codes: digits 2-9 and A-Z without I and O.
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every generated access code.
pub const LENGTH: usize = 8;

/// Generate a fresh access code from the thread-local RNG.
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

/// Generate an access code by drawing [`LENGTH`] characters uniformly, with
/// replacement, from [`ALPHABET`].
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    (0..LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated access code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
