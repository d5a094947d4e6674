use ledger_uniswap_v3_math::UniswapV3MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// Zero liquidity delta applied to a position without liquidity.
    #[error("NP: no-op on empty position")]
    NoPokeOnEmptyPosition,
    #[error("Math error: {0}")]
    Math(#[from] UniswapV3MathError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Settlement {index} failed: {source}")]
    SettlementFailed { index: usize, source: PositionError },
    #[error("Settlement {index} succeeded but was expected to fail")]
    ExpectedFailure { index: usize },
}
