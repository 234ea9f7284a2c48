// Domain layer: invocation models and the ports to the queue and orchestration services.

pub mod model;
pub mod ports;
