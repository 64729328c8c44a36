// Mapping module - phrase tables, exception shielding and the runtime-mutable stores

mod shield;
mod store;
mod table;

pub use shield::Shield;
pub use store::{CorrectionStore, CustomMappings, MappingSnapshot, MappingStore, StoreError};
pub use table::{MappingEntry, MappingTable};
