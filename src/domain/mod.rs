// Domain layer: core models, ports (interfaces) and the validation policy.
// No HTTP or framework types leak in here.

pub mod model;
pub mod ports;
pub mod validate;
