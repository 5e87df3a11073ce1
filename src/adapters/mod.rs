// Adapters layer: concrete implementations for external systems (input formats, storage).

pub mod input;
pub mod storage;
