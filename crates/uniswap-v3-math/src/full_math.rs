use crate::error::UniswapV3MathError;
use alloy_primitives::{U256, U512};

// returns (floor(a * b / denominator), (a * b) % denominator != 0) with a 512 bit intermediate product
fn mul_div_inner(a: U256, b: U256, denominator: U256) -> Result<(U256, bool), UniswapV3MathError> {
    if denominator.is_zero() {
        return Err(UniswapV3MathError::DenominatorIsZero);
    }

    let product = U512::from(a) * U512::from(b);
    let denominator = U512::from(denominator);
    let quotient = product / denominator;

    if quotient > U512::from(U256::MAX) {
        return Err(UniswapV3MathError::ResultIsU256MAX);
    }

    Ok((quotient.to(), !(product % denominator).is_zero()))
}

/// Calculates floor(a * b / denominator) with full precision.
/// Fails if the denominator is zero or the result does not fit into 256 bits.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256, UniswapV3MathError> {
    mul_div_inner(a, b, denominator).map(|(result, _)| result)
}

/// Calculates ceil(a * b / denominator) with full precision.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256, UniswapV3MathError> {
    let (result, has_remainder) = mul_div_inner(a, b, denominator)?;

    if has_remainder {
        if result == U256::MAX {
            return Err(UniswapV3MathError::ResultIsU256MAX);
        }
        Ok(result + U256::from(1))
    } else {
        Ok(result)
    }
}
