use alloy_primitives::U256;
use ledger_uniswap_v3_math::fixed_point::Q128;
use ledger_uniswap_v3_math::full_math::mul_div;
use ledger_uniswap_v3_math::liquidity_math::add_delta;
use ledger_uniswap_v3_math::UniswapV3MathError;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::PositionError;

/// Liquidity and fee state of a single position.
///
/// Fee growth snapshots are Q128 values of the fee growth inside the position range at the last update.
/// The only mutator is [`PositionInfo::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PositionInfo {
    liquidity: u128,
    fee_growth_inside_0_last_x128: U256,
    fee_growth_inside_1_last_x128: U256,
    tokens_owed_0: u128,
    tokens_owed_1: u128,
}

// uint128(mulDiv(feeGrowthInside - feeGrowthInsideLast, liquidity, Q128))
fn fees_accrued(fee_growth_inside_x128: U256, fee_growth_inside_last_x128: U256, liquidity: u128) -> Result<u128, UniswapV3MathError> {
    let fees = mul_div(fee_growth_inside_x128.wrapping_sub(fee_growth_inside_last_x128), U256::from(liquidity), Q128)?;
    Ok((fees & U256::from(u128::MAX)).to())
}

impl PositionInfo {
    #[inline]
    pub fn liquidity(&self) -> u128 {
        self.liquidity
    }

    #[inline]
    pub fn fee_growth_inside_0_last_x128(&self) -> U256 {
        self.fee_growth_inside_0_last_x128
    }

    #[inline]
    pub fn fee_growth_inside_1_last_x128(&self) -> U256 {
        self.fee_growth_inside_1_last_x128
    }

    #[inline]
    pub fn tokens_owed_0(&self) -> u128 {
        self.tokens_owed_0
    }

    #[inline]
    pub fn tokens_owed_1(&self) -> u128 {
        self.tokens_owed_1
    }

    /// Fees a settlement at the given fee growth inside values would credit, without touching the position.
    pub fn tokens_owed(&self, fee_growth_inside_0_x128: U256, fee_growth_inside_1_x128: U256) -> Result<(u128, u128), PositionError> {
        let tokens_owed_0 = fees_accrued(fee_growth_inside_0_x128, self.fee_growth_inside_0_last_x128, self.liquidity)?;
        let tokens_owed_1 = fees_accrued(fee_growth_inside_1_x128, self.fee_growth_inside_1_last_x128, self.liquidity)?;
        Ok((tokens_owed_0, tokens_owed_1))
    }

    /// Credits accumulated fees to the position and applies the liquidity delta.
    ///
    /// A zero `liquidity_delta` is a poke and fails on a position without liquidity. Fees are computed with
    /// the liquidity held before the update, fee growth snapshots always advance to the passed values.
    /// Nothing is written if the update fails.
    pub fn update(&mut self, liquidity_delta: i128, fee_growth_inside_0_x128: U256, fee_growth_inside_1_x128: U256) -> Result<(), PositionError> {
        let liquidity_next = if liquidity_delta == 0 {
            if self.liquidity == 0 {
                debug!("Poke on empty position rejected");
                return Err(PositionError::NoPokeOnEmptyPosition);
            }
            self.liquidity
        } else {
            add_delta(self.liquidity, liquidity_delta)?
        };

        let (tokens_owed_0, tokens_owed_1) = self.tokens_owed(fee_growth_inside_0_x128, fee_growth_inside_1_x128)?;

        trace!("Position update liquidity {} -> {} tokens owed {} {}", self.liquidity, liquidity_next, tokens_owed_0, tokens_owed_1);

        if liquidity_delta != 0 {
            self.liquidity = liquidity_next;
        }
        self.fee_growth_inside_0_last_x128 = fee_growth_inside_0_x128;
        self.fee_growth_inside_1_last_x128 = fee_growth_inside_1_x128;
        if tokens_owed_0 > 0 || tokens_owed_1 > 0 {
            // overflow is acceptable, owed tokens have to be withdrawn before reaching u128::MAX
            self.tokens_owed_0 = self.tokens_owed_0.wrapping_add(tokens_owed_0);
            self.tokens_owed_1 = self.tokens_owed_1.wrapping_add(tokens_owed_1);
        }

        Ok(())
    }
}
