//! Property-based tests for the registry codec.

use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;
use taco_registry::{decode, encode, EntryKey, RegistryEntry};

fn arb_entry() -> impl Strategy<Value = RegistryEntry> {
    (
        prop_oneof![Just(1u64), Just(137u64), Just(80002u64), Just(11155111u64), any::<u64>()],
        "[A-Z][A-Za-z0-9]{0,24}",
        prop::array::uniform20(any::<u8>()),
        "0x[0-9a-f]{64}",
        any::<u64>(),
        prop::collection::vec("[a-z]{1,12}", 0..4),
    )
        .prop_map(|(chain_id, name, address, tx_hash, block_number, functions)| {
            RegistryEntry {
                chain_id,
                name,
                address: format!("0x{}", hex_encode(&address)),
                abi: json!(functions
                    .iter()
                    .map(|f| json!({"type": "function", "name": f}))
                    .collect::<Vec<_>>()),
                tx_hash,
                block_number,
                deployer: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
            }
        })
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Entries as the registry stores them: one per key, the last one winning.
fn by_key(entries: Vec<RegistryEntry>) -> BTreeMap<EntryKey, RegistryEntry> {
    entries.into_iter().map(|e| (e.key(), e)).collect()
}

proptest! {
    /// Property: decoding an encoded registry yields the same entry set
    #[test]
    fn prop_roundtrip_preserves_entry_set(entries in prop::collection::vec(arb_entry(), 0..16)) {
        let bytes = encode(&entries).unwrap();
        let decoded = decode(&bytes).unwrap();

        prop_assert_eq!(by_key(decoded.clone()), by_key(entries.clone()));
        prop_assert_eq!(decoded.len(), by_key(entries).len());
    }

    /// Property: encoding does not depend on entry order when keys are unique
    #[test]
    fn prop_encoding_is_order_independent(entries in prop::collection::vec(arb_entry(), 0..16)) {
        let unique: Vec<RegistryEntry> = by_key(entries).into_values().collect();
        let mut reversed = unique.clone();
        reversed.reverse();

        prop_assert_eq!(encode(&unique).unwrap(), encode(&reversed).unwrap());
    }
}
