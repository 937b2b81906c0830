use clap::Parser;
use i18n_inject::utils::{logger, validation::Validate};
use i18n_inject::{CliConfig, InjectEngine, InjectError, InjectionPipeline, InjectionPlan, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting i18n-inject");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let plan = match config.resolve_plan() {
        Ok(plan) => plan,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = plan.validate() {
        tracing::error!("❌ Plan validation failed: {}", e);
        exit_with(&e);
    }

    display_plan_summary(&plan, &config);

    let pipeline = InjectionPipeline::new(LocalStorage::default(), plan);
    let engine = InjectEngine::new(pipeline).with_dry_run(config.dry_run);

    match engine.run().await {
        Ok(reports) => {
            for report in &reports {
                let verb = if report.written { "updated" } else { "would update" };
                println!(
                    "✅ {} {} ({} inserted, {} overwritten, {} unchanged, {} skipped)",
                    verb,
                    report.path,
                    report.stats.inserted,
                    report.stats.overwritten,
                    report.stats.unchanged,
                    report.stats.skipped
                );
            }
            if config.dry_run {
                println!("🔍 Dry run complete, no files were written.");
            } else {
                println!("✅ Translations injected successfully!");
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Injection failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }

    Ok(())
}

fn exit_with(e: &InjectError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn display_plan_summary(plan: &InjectionPlan, config: &CliConfig) {
    println!("📋 Plan Summary:");
    println!("  Plan: {}", plan.name);
    println!("  Section: {}", plan.section);
    println!("  Policy: {:?}", plan.policy);
    for locale in &plan.locales {
        println!(
            "  {}: {} ({} entries)",
            locale.code,
            locale.path,
            locale.entries.len()
        );
    }
    if config.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}
