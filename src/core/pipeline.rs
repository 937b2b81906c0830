use crate::core::bundle::{parse_bundle, render_bundle};
use crate::core::injector::Injector;
use crate::core::{ConfigProvider, LocalePlan, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

pub struct InjectionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    injector: Injector,
}

impl<S: Storage, C: ConfigProvider> InjectionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let injector = Injector::new(config.section(), config.policy());
        Self {
            storage,
            config,
            injector,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for InjectionPipeline<S, C> {
    fn locales(&self) -> &[LocalePlan] {
        self.config.locales()
    }

    async fn extract(&self, locale: &LocalePlan) -> Result<serde_json::Value> {
        tracing::debug!("Reading {} bundle from {}", locale.code, locale.path);
        let bytes = self.storage.read_file(&locale.path).await?;
        parse_bundle(&bytes, &locale.path)
    }

    async fn transform(
        &self,
        locale: &LocalePlan,
        mut bundle: serde_json::Value,
    ) -> Result<TransformResult> {
        let stats = self
            .injector
            .apply(&locale.path, &mut bundle, &locale.entries)?;

        if stats.section_created {
            tracing::info!(
                "Created section '{}' in {}",
                self.injector.section(),
                locale.path
            );
        }
        tracing::debug!("{} merge stats: {:?}", locale.code, stats);

        Ok(TransformResult { bundle, stats })
    }

    async fn load(&self, locale: &LocalePlan, result: &TransformResult) -> Result<String> {
        let data = render_bundle(&result.bundle)?;
        self.storage.write_file(&locale.path, &data).await?;
        Ok(locale.path.clone())
    }
}
