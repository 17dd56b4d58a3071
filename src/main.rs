use std::sync::Arc;

use anyhow::Result;

use zenboard::ai::AiAssistant;
use zenboard::config::Config;
use zenboard::store::RestTaskStore;
use zenboard::ui;

fn setup_logging(config: &Config) -> Result<()> {
    if !config.logging.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file("zenboard.log")?)
        .apply()?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    setup_logging(&config)?;

    let remote_url = config.remote_url();
    if remote_url.is_empty() {
        eprintln!("Error: no remote store configured");
        eprintln!("\nTo use this app:");
        eprintln!("1. Put your project URL in zenboard.toml under [remote] url = \"https://...\"");
        eprintln!("   (or set ZENBOARD_STORE_URL for a one-off run)");
        eprintln!(
            "2. Export the store API key: export {}=your_key_here",
            config.remote.api_key_env
        );
        eprintln!("3. Run the app again to see your board!");
        return Ok(());
    }

    let Some(api_key) = config.remote_api_key() else {
        eprintln!(
            "Error: {} environment variable not set",
            config.remote.api_key_env
        );
        eprintln!("\nExport the store API key and run the app again:");
        eprintln!("  export {}=your_key_here", config.remote.api_key_env);
        return Ok(());
    };

    let store = Arc::new(RestTaskStore::new(
        remote_url,
        config.remote.table.clone(),
        api_key,
    ));

    // An empty AI key just disables the smart-sort and describe actions
    let ai = AiAssistant::new(config.ai.model.clone(), config.ai_api_key());

    // Run the TUI application
    ui::run_app(store, ai, &config.ui).await?;

    Ok(())
}
