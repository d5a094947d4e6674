use crate::error::UniswapV3MathError;

/// Adds a signed liquidity delta to a liquidity amount.
/// Fails with `LiquiditySub` when the result would be negative and with `LiquidityAdd` when it exceeds `u128::MAX`.
pub fn add_delta(x: u128, y: i128) -> Result<u128, UniswapV3MathError> {
    if y < 0 {
        x.checked_sub(y.unsigned_abs()).ok_or(UniswapV3MathError::LiquiditySub)
    } else {
        x.checked_add(y as u128).ok_or(UniswapV3MathError::LiquidityAdd)
    }
}
