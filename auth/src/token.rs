use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Random bytes behind every generated token (256 bits).
pub const TOKEN_BYTES: usize = 32;

/// Generate an opaque, unguessable token.
///
/// # Returns
/// Lowercase hex string of `TOKEN_BYTES` bytes drawn from the OS CSPRNG
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compare two byte strings without an early exit on the first difference.
///
/// Length differences still return immediately; token lengths are public.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
