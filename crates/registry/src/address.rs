//! Mixed-case checksummed account addresses (EIP-55).

use crate::error::{RegistryError, Result};
use sha3::{Digest, Keccak256};

/// Number of hex characters in a 20-byte address.
const ADDRESS_HEX_LENGTH: usize = 40;

/// Converts a hex address to its checksummed form.
///
/// The `0x` prefix is optional and the input may use any letter case.
pub fn to_checksum_address(address: &str) -> Result<String> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    if digits.len() != ADDRESS_HEX_LENGTH || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RegistryError::InvalidAddress(address.to_string()));
    }

    let lower = digits.to_ascii_lowercase();
    let hash = hex::encode(Keccak256::digest(lower.as_bytes()));

    let mut checksummed = String::with_capacity(ADDRESS_HEX_LENGTH + 2);
    checksummed.push_str("0x");
    for (c, nibble) in lower.chars().zip(hash.chars()) {
        let uppercase = nibble.to_digit(16).map_or(false, |n| n >= 8);
        if c.is_ascii_alphabetic() && uppercase {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }
    Ok(checksummed)
}

/// Returns true when `address` is already in checksummed form.
pub fn is_checksum_address(address: &str) -> bool {
    to_checksum_address(address).map_or(false, |checksummed| checksummed == address)
}
