pub use error::UniswapV3MathError;

pub mod error;
pub mod fixed_point;
pub mod full_math;
pub mod liquidity_math;
