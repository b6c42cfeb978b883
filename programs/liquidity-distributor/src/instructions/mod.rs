pub mod initialize;
pub use initialize::*;

pub mod transfer_ownership;
pub use transfer_ownership::*;

pub mod update_config;
pub use update_config::*;

pub mod deposit;
pub use deposit::*;

pub mod distribute_eth;
pub use distribute_eth::*;

pub mod rescue_eth;
pub use rescue_eth::*;
