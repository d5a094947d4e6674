use alloy_primitives::aliases::I24;
use alloy_primitives::{Address, U256};
use serde::de::{self, DeserializeOwned, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// A single position update: resolve `(owner, tick_lower, tick_upper)` and apply the delta at the given fee growth.
#[derive(Clone, Debug, Deserialize)]
pub struct SettlementConfig {
    pub owner: Address,
    #[serde(deserialize_with = "deserialize_tick")]
    pub tick_lower: I24,
    #[serde(deserialize_with = "deserialize_tick")]
    pub tick_upper: I24,
    /// TOML integer, or a decimal string for values outside the i64 range.
    #[serde(default, deserialize_with = "deserialize_liquidity_delta")]
    pub liquidity_delta: i128,
    #[serde(default)]
    pub fee_growth_inside_0_x128: U256,
    #[serde(default)]
    pub fee_growth_inside_1_x128: U256,
    /// The settlement is expected to be rejected.
    #[serde(default)]
    pub expect_error: bool,
}

fn deserialize_tick<'de, D: Deserializer<'de>>(deserializer: D) -> Result<I24, D::Error> {
    let tick = i64::deserialize(deserializer)?;
    I24::try_from(tick).map_err(|_| de::Error::custom(format!("tick {tick} is out of int24 range")))
}

struct LiquidityDeltaVisitor;

impl Visitor<'_> for LiquidityDeltaVisitor {
    type Value = i128;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or a decimal string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i128, E> {
        Ok(value as i128)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i128, E> {
        Ok(value as i128)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i128, E> {
        value.trim().parse::<i128>().map_err(|e| E::custom(format!("invalid liquidity delta {value}: {e}")))
    }
}

fn deserialize_liquidity_delta<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
    deserializer.deserialize_any(LiquidityDeltaVisitor)
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub settlements: Vec<SettlementConfig>,
}

pub fn load_from_str<C: DeserializeOwned>(contents: &str) -> Result<C, LoadConfigError> {
    let config: C = toml::from_str(contents)?;
    Ok(config)
}

pub async fn load_from_file<C: DeserializeOwned>(file_path: PathBuf) -> Result<C, LoadConfigError> {
    let contents = fs::read_to_string(file_path).await?;
    load_from_str(&contents)
}
