//! Property-based tests for the identifier codec.
//!
//! Every wrapper must survive `decode(encode(v)) == v` for every value of its
//! primitive, encode to a size that depends only on its type (strings aside),
//! and map "absent" to nil and back.

use idkit_codec::{Formatter, NIL, from_slice, to_vec};
use idkit_types::{Bit, BoolValue, GuidKey, IntKey, Key2, Key3, LongKey, ShortKey, StringKey};
use proptest::prelude::*;
use uuid::Uuid;

struct Tenant;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn guid_strategy() -> impl Strategy<Value = GuidKey<Tenant>> {
    any::<[u8; 16]>().prop_map(|bytes| GuidKey::new(Uuid::from_bytes(bytes)))
}

fn string_strategy() -> impl Strategy<Value = StringKey<Tenant>> {
    any::<String>().prop_map(|s| StringKey::new(s))
}

fn roundtrip<T: Formatter>(value: &T) -> T {
    let bytes = to_vec(value).expect("encode");
    from_slice(&bytes).expect("decode")
}

// =============================================================================
// ROUND TRIPS
// =============================================================================

mod roundtrip_properties {
    use super::*;

    proptest! {
        #[test]
        fn guid_key_roundtrips(key in guid_strategy()) {
            prop_assert_eq!(roundtrip(&key), key);
            prop_assert_eq!(roundtrip(&Some(key)), Some(key));
        }

        #[test]
        fn string_key_roundtrips(key in string_strategy()) {
            prop_assert_eq!(roundtrip(&key), key.clone());
            prop_assert_eq!(roundtrip(&Some(key.clone())), Some(key));
        }

        #[test]
        fn short_key_roundtrips(value in any::<i16>()) {
            let key = ShortKey::<Tenant>::new(value);
            prop_assert_eq!(roundtrip(&key), key);
        }

        #[test]
        fn int_key_roundtrips(value in any::<i32>()) {
            let key = IntKey::<Tenant>::new(value);
            prop_assert_eq!(roundtrip(&key), key);
            prop_assert_eq!(roundtrip(&Some(key)), Some(key));
        }

        #[test]
        fn long_key_roundtrips(value in any::<i64>()) {
            let key = LongKey::<Tenant>::new(value);
            prop_assert_eq!(roundtrip(&key), key);
        }

        #[test]
        fn bool_and_bit_roundtrip(value in any::<bool>()) {
            let flag = BoolValue::<Tenant>::new(value);
            prop_assert_eq!(roundtrip(&flag), flag);
            prop_assert_eq!(roundtrip(&Bit::value_of(value)), Bit::value_of(value));
        }

        #[test]
        fn composite_roundtrips(
            id in guid_strategy(),
            seq in proptest::option::of(any::<i64>()),
            name in string_strategy(),
        ) {
            let key = Key3::new(id, seq.map(LongKey::<Tenant>::new), name);
            prop_assert_eq!(roundtrip(&key), key);
        }

        #[test]
        fn composite_with_optional_guids_roundtrips(
            first in proptest::option::of(guid_strategy()),
            second in proptest::option::of(guid_strategy()),
            name in string_strategy(),
        ) {
            let key = Key3::new(first, second, name);
            prop_assert_eq!(roundtrip(&key), key.clone());
        }

        #[test]
        fn absent_guid_before_nested_guids_roundtrips(a in guid_strategy(), b in guid_strategy()) {
            let key = Key2::new(None::<GuidKey<Tenant>>, Key2::new(a, b));
            prop_assert_eq!(roundtrip(&key), key);
        }
    }
}

// =============================================================================
// SIZES
// =============================================================================

mod size_properties {
    use super::*;

    proptest! {
        #[test]
        fn present_guid_is_sixteen_bytes(key in guid_strategy()) {
            prop_assert_eq!(to_vec(&key).unwrap().len(), 16);
            prop_assert_eq!(to_vec(&Some(key)).unwrap().len(), 16);
        }

        #[test]
        fn integer_width_is_fixed(a in any::<i16>(), b in any::<i32>(), c in any::<i64>()) {
            prop_assert_eq!(to_vec(&ShortKey::<Tenant>::new(a)).unwrap().len(), 3);
            prop_assert_eq!(to_vec(&IntKey::<Tenant>::new(b)).unwrap().len(), 5);
            prop_assert_eq!(to_vec(&LongKey::<Tenant>::new(c)).unwrap().len(), 9);
        }
    }

    #[test]
    fn absent_is_one_byte_for_every_type() {
        assert_eq!(to_vec(&None::<GuidKey<Tenant>>).unwrap(), vec![NIL]);
        assert_eq!(to_vec(&None::<StringKey<Tenant>>).unwrap(), vec![NIL]);
        assert_eq!(to_vec(&None::<ShortKey<Tenant>>).unwrap(), vec![NIL]);
        assert_eq!(to_vec(&None::<IntKey<Tenant>>).unwrap(), vec![NIL]);
        assert_eq!(to_vec(&None::<LongKey<Tenant>>).unwrap(), vec![NIL]);
        assert_eq!(to_vec(&None::<BoolValue<Tenant>>).unwrap(), vec![NIL]);
        assert_eq!(to_vec(&None::<Bit>).unwrap(), vec![NIL]);
    }
}

// =============================================================================
// INTEROPERABILITY WITH rmp-serde
// =============================================================================

mod interop {
    use super::*;

    #[test]
    fn default_encoder_is_compact_and_width_varies() {
        // rmp-serde goes through the transparent serde impl and picks the
        // smallest marker, so the size follows the magnitude.
        assert_eq!(rmp_serde::to_vec(&IntKey::<Tenant>::new(-1)).unwrap(), vec![0xff]);
        assert_eq!(rmp_serde::to_vec(&IntKey::<Tenant>::new(200)).unwrap(), vec![0xcc, 0xc8]);
        assert_eq!(to_vec(&IntKey::<Tenant>::new(-1)).unwrap().len(), 5);
        assert_eq!(to_vec(&IntKey::<Tenant>::new(200)).unwrap().len(), 5);
    }

    #[test]
    fn compact_integers_are_rejected() {
        let compact = rmp_serde::to_vec(&7i32).unwrap();
        assert!(from_slice::<IntKey<Tenant>>(&compact).is_err());
    }

    proptest! {
        #[test]
        fn fixed_integers_decode_with_rmp_serde(
            a in any::<i16>(),
            b in any::<i32>(),
            c in any::<i64>(),
        ) {
            let short_bytes = to_vec(&ShortKey::<Tenant>::new(a)).unwrap();
            let int_bytes = to_vec(&IntKey::<Tenant>::new(b)).unwrap();
            let long_bytes = to_vec(&LongKey::<Tenant>::new(c)).unwrap();
            let short: i16 = rmp_serde::from_slice(&short_bytes).unwrap();
            let int: i32 = rmp_serde::from_slice(&int_bytes).unwrap();
            let long: i64 = rmp_serde::from_slice(&long_bytes).unwrap();
            prop_assert_eq!((short, int, long), (a, b, c));
        }

        #[test]
        fn strings_match_rmp_serde(text in any::<String>()) {
            let ours = to_vec(&StringKey::<Tenant>::new(text.clone())).unwrap();
            prop_assert_eq!(&ours, &rmp_serde::to_vec(&text).unwrap());
            let decoded: StringKey<Tenant> = from_slice(&ours).unwrap();
            prop_assert_eq!(decoded.value(), text.as_str());
        }

        #[test]
        fn bools_match_rmp_serde(value in any::<bool>()) {
            prop_assert_eq!(
                to_vec(&BoolValue::<Tenant>::new(value)).unwrap(),
                rmp_serde::to_vec(&value).unwrap()
            );
        }
    }
}
