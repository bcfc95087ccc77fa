// Domain layer: credentials, controller state and the ports the controllers talk through.

pub mod model;
pub mod ports;
