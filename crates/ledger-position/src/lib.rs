pub use config::{load_from_file, load_from_str, LoadConfigError, ReplayConfig, SettlementConfig};
pub use error::{PositionError, ReplayError};
pub use info::PositionInfo;
pub use key::{PositionKey, MAX_TICK, MIN_TICK};
pub use replay::replay_settlements;
pub use store::PositionStore;

mod config;
mod error;
mod info;
mod key;
mod replay;
mod store;
