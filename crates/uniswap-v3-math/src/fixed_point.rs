use alloy_primitives::U256;

/// Number of fractional bits of a Q128 value.
pub const RESOLUTION: u8 = 128;

/// 2^128, the scale of fee growth accumulators.
pub const Q128: U256 = U256::from_limbs([0, 0, 1, 0]);
