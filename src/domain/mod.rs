// Domain layer: seller records and the ports the session talks through.

pub mod model;
pub mod ports;
