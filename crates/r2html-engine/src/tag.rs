use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdef";

/// Generate a random tag of `len` lowercase hex characters.
///
/// Keeps temporary artifact names from colliding; probabilistic only, there
/// is no uniqueness guarantee and no need for a cryptographic source.
pub fn random_tag(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
