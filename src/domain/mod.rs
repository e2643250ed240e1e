// Domain layer: the chakra catalog, core models and ports (interfaces).

pub mod model;
pub mod palette;
pub mod ports;
