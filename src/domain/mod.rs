// Domain layer: receipt models and the storage port. No I/O beyond serde.

pub mod model;
pub mod ports;
