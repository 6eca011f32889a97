// Domain layer: course snapshots, derived statistics and ports (interfaces).

pub mod model;
pub mod ports;
