use crate::domain::model::{AuraResult, Photo};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// JPEG quality factor for the rendered aura image, 1-100.
    fn jpeg_quality(&self) -> u8;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Photo>;
    async fn transform(&self, photo: Photo) -> Result<AuraResult>;
    async fn load(&self, result: AuraResult) -> Result<String>;
}
