mod adjust;
mod ledger;

pub use self::adjust::{InventoryAdjustService, next_quantity};
pub use self::ledger::{LedgerEntry, LedgerWriter};
