//! Property tests for the codec laws.

use proptest::prelude::*;
use zwhide::{decode, encode, hide, retrieve};

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(s in "[ -~]{0,64}") {
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    #[test]
    fn prop_encode_length_law(s in "[ -~]{0,64}") {
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(encoded.chars().count(), 3 * s.chars().count());
    }

    #[test]
    fn prop_hide_retrieve_roundtrip(secret in "[ -~]{0,32}", carrier in "\\PC{0,64}") {
        let hidden = hide(&secret, &carrier).unwrap();
        prop_assert_eq!(retrieve(&hidden).unwrap(), secret);
    }

    #[test]
    fn prop_non_ascii_rejected(prefix in "[ -~]{0,8}", c in "[^ -~]") {
        let message = format!("{}{}", prefix, c);
        prop_assert!(encode(&message).is_err());
    }
}
