// Domain layer: the record type and the ports the adapters implement.

pub mod model;
pub mod ports;
