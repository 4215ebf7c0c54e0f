// Domain layer: booking models and the ports the flow talks through.

pub mod model;
pub mod ports;
