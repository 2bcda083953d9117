use clap::Parser;

use barcode_copier_lib::bootstrap::{init_tracing_subscriber, resolve_config, wire_app};
use barcode_copier_lib::cli::{self, Cli};
use bc_app::AppPaths;
use bc_core::ports::AppDirsPort;
use bc_platform::DirsAppDirsAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    if let Err(err) = init_tracing_subscriber(Some(&paths.logs_dir)) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_path.clone());
    let config = resolve_config(&config_path, &app_dirs.app_data_root)?;
    tracing::info!(config = %config_path.display(), "barcode copier starting");

    let wired = wire_app(&config);
    cli::run(cli.command, wired).await
}
