use crate::domain::model::{LocalePlan, MergePolicy, TransformResult};
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
    fn section(&self) -> &str;
    fn policy(&self) -> MergePolicy;
    fn locales(&self) -> &[LocalePlan];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn locales(&self) -> &[LocalePlan];
    async fn extract(&self, locale: &LocalePlan) -> Result<serde_json::Value>;
    async fn transform(
        &self,
        locale: &LocalePlan,
        bundle: serde_json::Value,
    ) -> Result<TransformResult>;
    async fn load(&self, locale: &LocalePlan, result: &TransformResult) -> Result<String>;
}
