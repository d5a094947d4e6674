use alloy_primitives::aliases::I24;
use alloy_primitives::map::{Entry, HashMap};
use alloy_primitives::{Address, U256};
use tracing::debug;

use crate::error::PositionError;
use crate::info::PositionInfo;
use crate::key::PositionKey;

/// Positions keyed by [`PositionKey`]. Records are created zero-valued on first access and never removed.
#[derive(Clone, Debug, Default)]
pub struct PositionStore {
    // keccak(owner, tick_lower, tick_upper) -> position
    positions: HashMap<PositionKey, PositionInfo>,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position of `owner` in the given range, inserting an empty one if it does not exist yet.
    pub fn get_mut_or_default(&mut self, owner: Address, tick_lower: I24, tick_upper: I24) -> &mut PositionInfo {
        let key = PositionKey::new(owner, tick_lower, tick_upper);
        self.positions.entry(key).or_insert_with(|| {
            debug!("New position {key} owner {owner} ticks {tick_lower} {tick_upper}");
            PositionInfo::default()
        })
    }

    pub fn get(&self, owner: Address, tick_lower: I24, tick_upper: I24) -> Option<&PositionInfo> {
        self.get_by_key(&PositionKey::new(owner, tick_lower, tick_upper))
    }

    #[inline]
    pub fn get_by_key(&self, key: &PositionKey) -> Option<&PositionInfo> {
        self.positions.get(key)
    }

    /// Resolves the position and updates it. A failed update leaves the store unchanged, no empty position is inserted.
    pub fn update(
        &mut self,
        owner: Address,
        tick_lower: I24,
        tick_upper: I24,
        liquidity_delta: i128,
        fee_growth_inside_0_x128: U256,
        fee_growth_inside_1_x128: U256,
    ) -> Result<PositionKey, PositionError> {
        let key = PositionKey::new(owner, tick_lower, tick_upper);
        match self.positions.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().update(liquidity_delta, fee_growth_inside_0_x128, fee_growth_inside_1_x128)?;
            }
            Entry::Vacant(entry) => {
                let mut position = PositionInfo::default();
                position.update(liquidity_delta, fee_growth_inside_0_x128, fee_growth_inside_1_x128)?;
                debug!("New position {key} owner {owner} ticks {tick_lower} {tick_upper}");
                entry.insert(position);
            }
        }
        Ok(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PositionKey, &PositionInfo)> {
        self.positions.iter()
    }
}
