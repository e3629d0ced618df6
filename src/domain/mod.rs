// Domain layer: core models and ports (interfaces). No HTTP or filesystem
// dependencies here; adapters and core wire those in.

pub mod model;
pub mod ports;
