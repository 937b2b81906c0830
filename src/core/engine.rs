use crate::core::Pipeline;
use crate::domain::model::InjectionReport;
use crate::utils::error::Result;

pub struct InjectEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> InjectEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs extract, transform and load for each locale in plan order.
    ///
    /// Stops at the first failure. Bundles written before it stay written.
    pub async fn run(&self) -> Result<Vec<InjectionReport>> {
        let locales = self.pipeline.locales();
        tracing::info!("Injecting into {} bundle(s)", locales.len());

        let mut reports = Vec::with_capacity(locales.len());
        for locale in locales {
            let bundle = self.pipeline.extract(locale).await?;
            let result = self.pipeline.transform(locale, bundle).await?;

            let written = if self.dry_run {
                tracing::info!("[dry-run] Skipping write of {}", locale.path);
                false
            } else {
                let path = self.pipeline.load(locale, &result).await?;
                tracing::info!("Updated {}", path);
                true
            };

            tracing::info!(
                "{}: {} inserted, {} overwritten, {} unchanged, {} skipped",
                locale.code,
                result.stats.inserted,
                result.stats.overwritten,
                result.stats.unchanged,
                result.stats.skipped
            );

            reports.push(InjectionReport {
                locale: locale.code.clone(),
                path: locale.path.clone(),
                stats: result.stats,
                written,
            });
        }

        Ok(reports)
    }
}
