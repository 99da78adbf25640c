//! Population dynamics: culling, rebalancing, and species interactions.
//!
//! These operators adjust population membership after reproduction:
//! - **Culling**: predator and disaster remove members fitness-blind
//! - **Rebalance**: clamps the population into its configured size bounds
//! - **Interaction**: mutualism and communalism between species

pub mod culling;
pub mod interaction;
pub mod rebalance;

pub use culling::{disaster, predator};
pub use interaction::{communalism, mutualism};
pub use rebalance::rebalance;
