// Domain layer: CV records and the ports the adapters implement.

pub mod model;
pub mod ports;
