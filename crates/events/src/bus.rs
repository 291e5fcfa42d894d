use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    /// `silent_mode` suppresses the console banner lines; tracing output is unaffected.
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                self.print(format!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black()));
                self.print(format!("  {}", "Kodo Store - Media Storage Adapter".white().bold()));
                self.print(format!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan()));
                self.print(format!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black()));
            }
            AppEvent::Ready { addr, origin } => {
                self.print(format!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green()));
                self.print(format!("  {} {}", "Server".white(), addr.cyan()));
                self.print(format!("  {} {}", "Origin".white(), origin.blue()));
                self.print(format!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green()));
            }
            AppEvent::Shutdown => {
                self.print(format!("\n{}", "Server shutting down".red()));
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                self.print(format!("  {} {}", "Loading config".dimmed(), path.cyan()));
            }
            AppEvent::ConfigLoaded { bucket, naming } => {
                self.print(format!("  {} Bucket {}", "✓".green(), bucket.cyan()));
                match naming {
                    Some(policy) => self.print(format!("  {} Key naming: {}", "✓".green(), policy.dimmed())),
                    None => self.print(format!("  {} Key naming: assigned by Kodo", "⚠".yellow())),
                }
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    self.print(format!(
                        "  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    ));
                }
            }

            // Storage
            AppEvent::UploadDirReady { path } => {
                tracing::debug!("Upload directory ready: {}", path);
            }
            AppEvent::StorageReady { bucket, endpoint } => {
                self.print(format!("  {} Kodo {} via {}", "✓".green(), bucket.cyan(), endpoint.dimmed()));
            }
            AppEvent::FileSaved { name, url } => {
                tracing::info!("Saved {} -> {}", name, url);
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }

    fn print(&self, line: String) {
        if !self.silent_mode {
            println!("{}", line);
        }
    }
}
