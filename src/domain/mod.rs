// Domain layer: the roster, its aggregates and the persistence ports.

pub mod model;
pub mod ports;
pub mod roster;
pub mod stats;
