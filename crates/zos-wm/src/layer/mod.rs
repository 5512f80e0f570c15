//! Layer management
//!
//! Every client carries a layer in `[MIN_LAYER, MAX_LAYER]`. The table only
//! holds the numbers; restacking is driven by
//! [`ClientManager`](crate::ClientManager), which owns the table and knows
//! which windows are icons or move/resize placeholders.

mod order;
mod table;

pub use order::stacking_order;
pub use table::LayerTable;
