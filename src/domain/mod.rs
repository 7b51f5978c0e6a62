// Domain layer: card record model and ports (interfaces). No dependencies beyond serde.

pub mod model;
pub mod ports;
