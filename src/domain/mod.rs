// Domain layer: core models and ports (interfaces). No terminal or process handling here.

pub mod model;
pub mod ports;
