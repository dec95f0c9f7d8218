// Domain layer: plain data and the ports the checkout depends on.

pub mod model;
pub mod ports;
