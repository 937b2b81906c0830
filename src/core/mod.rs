pub mod bundle;
pub mod engine;
pub mod injector;
pub mod pipeline;

pub use crate::domain::model::{LocalePlan, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
