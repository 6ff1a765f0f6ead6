//! Domain layer: entities, state containers and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod registry;
pub mod store;

pub use entities::*;
pub use errors::*;
pub use ledger::PaperLedger;
pub use registry::ActorRegistry;
pub use store::LedgerStore;
