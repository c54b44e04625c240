//! Content fingerprints for facts
//!
//! A fingerprint is the Adler-32 checksum of the fact text, rendered as
//! lowercase hexadecimal without leading zeros. It is a checksum, not a
//! cryptographic digest: two different texts may share a fingerprint, in
//! which case the second one is treated as a duplicate of the first.

/// Largest prime below 2^16
const MOD_ADLER: u32 = 65_521;

/// Largest block length for which the running sums cannot overflow a u32
/// before the modulo reduction.
const NMAX: usize = 5_552;

/// Compute the fingerprint of a fact text.
///
/// # Examples
/// ```
/// use fact_cache::utils::fingerprint::fingerprint;
///
/// assert_eq!(fingerprint("Wikipedia"), "11e60398");
/// assert_eq!(fingerprint(""), "1");
/// ```
pub fn fingerprint(text: &str) -> String {
    format!("{:x}", adler32(text.as_bytes()))
}

/// Adler-32 checksum of a byte slice.
pub fn adler32(bytes: &[u8]) -> u32 {
    let mut a: u32 = 1;
    let mut b: u32 = 0;

    for block in bytes.chunks(NMAX) {
        for &byte in block {
            a += u32::from(byte);
            b += a;
        }
        a %= MOD_ADLER;
        b %= MOD_ADLER;
    }

    (b << 16) | a
}
