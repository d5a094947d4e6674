use tracing::{debug, info};

use crate::config::SettlementConfig;
use crate::error::ReplayError;
use crate::store::PositionStore;

/// Applies settlements in order and returns the number of accepted ones.
/// Stops at the first settlement whose outcome differs from its `expect_error` flag.
pub fn replay_settlements(store: &mut PositionStore, settlements: &[SettlementConfig]) -> Result<usize, ReplayError> {
    let mut accepted = 0;

    for (index, settlement) in settlements.iter().enumerate() {
        let result = store.update(
            settlement.owner,
            settlement.tick_lower,
            settlement.tick_upper,
            settlement.liquidity_delta,
            settlement.fee_growth_inside_0_x128,
            settlement.fee_growth_inside_1_x128,
        );

        match (result, settlement.expect_error) {
            (Ok(key), false) => {
                debug!("Settlement {index} applied to {key}");
                accepted += 1;
            }
            (Ok(_), true) => return Err(ReplayError::ExpectedFailure { index }),
            (Err(error), true) => {
                debug!("Settlement {index} rejected as expected: {error}");
            }
            (Err(error), false) => return Err(ReplayError::SettlementFailed { index, source: error }),
        }
    }

    info!("Replayed {} settlements, {} accepted, {} positions", settlements.len(), accepted, store.len());
    Ok(accepted)
}
