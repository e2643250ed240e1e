use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the three pipeline stages for a single photo. Each stage runs
/// exactly once; a failed stage ends the run (no retries).
pub struct AuraEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AuraEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting aura pipeline");

        tracing::info!("Reading photo...");
        let photo = self.pipeline.extract().await?;
        self.monitor.log_stats("extract");

        tracing::info!("Analyzing aura...");
        let result = self.pipeline.transform(photo).await?;
        tracing::info!(
            colors = result.analysis.selection.len(),
            "Analysis complete"
        );
        self.monitor.log_stats("transform");

        tracing::info!("Rendering aura overlay...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
