// Domain layer: schedule models and the validator port.

pub mod model;
pub mod ports;
