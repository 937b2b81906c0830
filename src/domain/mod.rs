// Domain layer: plan/report models and ports. Only std, serde and indexmap here.

pub mod model;
pub mod ports;
