use alloy_primitives::aliases::I24;
use alloy_primitives::{keccak256, Address, B256};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Lowest tick a position boundary can take.
pub const MIN_TICK: i32 = -887272;
/// Highest tick a position boundary can take.
pub const MAX_TICK: i32 = -MIN_TICK;

const PACKED_LEN: usize = 26;

/// Storage key of a position, `keccak256(abi.encodePacked(owner, int24 tickLower, int24 tickUpper))`.
///
/// Ticks are int24 values packed as 3 byte big-endian two's complement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PositionKey(B256);

impl PositionKey {
    pub fn new(owner: Address, tick_lower: I24, tick_upper: I24) -> Self {
        PositionKey(keccak256(Self::encode_packed(owner, tick_lower, tick_upper)))
    }

    /// Preimage of the key: 20 bytes of owner followed by two 3 byte ticks.
    pub fn encode_packed(owner: Address, tick_lower: I24, tick_upper: I24) -> [u8; PACKED_LEN] {
        let mut packed = [0u8; PACKED_LEN];
        packed[0..20].copy_from_slice(owner.as_slice());
        packed[20..23].copy_from_slice(&tick_lower.to_be_bytes::<3>());
        packed[23..26].copy_from_slice(&tick_upper.to_be_bytes::<3>());
        packed
    }

    #[inline]
    pub fn as_b256(&self) -> &B256 {
        &self.0
    }
}

impl From<PositionKey> for B256 {
    fn from(value: PositionKey) -> Self {
        value.0
    }
}

impl Display for PositionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy_primitives::{address, hex};

    fn tick(value: i32) -> I24 {
        I24::try_from(value).unwrap()
    }

    #[test]
    fn test_encode_packed() {
        let owner = address!("00000000000000000000000000000000000000aa");
        let packed = PositionKey::encode_packed(owner, tick(-60), tick(60));

        assert_eq!(hex::encode(packed), "00000000000000000000000000000000000000aaffffc400003c");

        let packed = PositionKey::encode_packed(owner, tick(MIN_TICK), tick(MAX_TICK));
        assert_eq!(hex::encode(&packed[20..]), "f276180d89e8");

        let packed = PositionKey::encode_packed(owner, I24::MIN, I24::MAX);
        assert_eq!(hex::encode(&packed[20..]), "8000007fffff");
    }

    #[test]
    fn test_key_is_keccak_of_packed() {
        let owner = Address::random();
        let key = PositionKey::new(owner, tick(-887220), tick(887220));

        assert_eq!(*key.as_b256(), keccak256(PositionKey::encode_packed(owner, tick(-887220), tick(887220))));
        assert_eq!(B256::from(key), keccak256(PositionKey::encode_packed(owner, tick(-887220), tick(887220))));
        assert_eq!(key.to_string(), key.as_b256().to_string());
    }

    #[test]
    fn test_key_distinct() {
        let owner = Address::random();
        let other = Address::random();

        let key = PositionKey::new(owner, tick(-10), tick(10));
        assert_eq!(key, PositionKey::new(owner, tick(-10), tick(10)));
        assert_ne!(key, PositionKey::new(other, tick(-10), tick(10)));
        assert_ne!(key, PositionKey::new(owner, tick(10), tick(-10)));
        assert_ne!(key, PositionKey::new(owner, tick(-10), tick(11)));
        assert_ne!(key, PositionKey::new(owner, tick(-11), tick(10)));
        assert_ne!(PositionKey::new(owner, tick(0), tick(1)), PositionKey::new(owner, tick(1), tick(0)));
    }

    #[test]
    fn test_key_distinct_at_int24_extremes() {
        let owner = Address::random();

        let keys = [
            PositionKey::new(owner, I24::MIN, tick(60)),
            PositionKey::new(owner, I24::MAX, tick(60)),
            PositionKey::new(owner, tick(0), tick(60)),
            PositionKey::new(owner, tick(-1), tick(60)),
            PositionKey::new(owner, tick(60), I24::MIN),
            PositionKey::new(owner, tick(60), I24::MAX),
            PositionKey::new(owner, I24::MIN, I24::MAX),
            PositionKey::new(owner, I24::MAX, I24::MIN),
        ];

        for (i, key) in keys.iter().enumerate() {
            for other in keys.iter().skip(i + 1) {
                assert_ne!(key, other);
            }
        }
    }

    #[test]
    fn test_ticks_outside_int24_rejected() {
        assert!(I24::try_from(1i32 << 23).is_err());
        assert!(I24::try_from(-(1i32 << 23) - 1).is_err());
        assert_eq!(tick(-(1 << 23)), I24::MIN);
        assert_eq!(tick((1 << 23) - 1), I24::MAX);
    }
}
