pub mod engine;
pub mod extract;
pub mod mapper;
pub mod overlay;
pub mod pipeline;
pub mod reading;

pub use crate::domain::model::{AuraAnalysis, AuraResult, Photo, RgbSample, SelectedPalette};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
