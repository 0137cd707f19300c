use crate::{
    CliResult, cli::Cli, commands::Commands, settings_commands::SettingsCommands,
};

use std::sync::Arc;

use log::debug;
use ra_billing::BillingClient;
use ra_config::Config;
use ra_core::{
    JsonFileStore, KeyValueStore, SettingsUpdate, StoreUninstallRegistrar, VoiceKind,
    clear_settings, get_settings, parse_lang, update_settings,
};
use serde_json::{Value, json};

/// Run one CLI command and return its JSON output.
///
/// `--service-url` and `--store` take precedence over `config`.
pub async fn execute(cli: Cli, config: &Config) -> CliResult<Value> {
    let service_url = cli
        .service_url
        .unwrap_or_else(|| config.service.url.clone());
    let store_path = match cli.store {
        Some(path) => path,
        None => config.store_path()?,
    };
    debug!("Using store {store_path:?} and service {service_url}");

    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(store_path));

    let value = match cli.command {
        Commands::InstallationId => {
            let id = billing_client(&service_url, &store)?
                .identity()
                .get_installation_id()
                .await?;
            json!({ "installationId": id })
        }
        Commands::Balance => billing_client(&service_url, &store)?.get_balance().await?,
        Commands::Redeem { code } => {
            Value::String(billing_client(&service_url, &store)?.redeem_coupon(&code).await?)
        }
        Commands::Remove { code } => {
            Value::String(billing_client(&service_url, &store)?.remove_coupon(&code).await?)
        }
        Commands::Settings { action } => {
            match action {
                SettingsCommands::Show => {}
                SettingsCommands::Set {
                    voice,
                    rate,
                    pitch,
                    volume,
                    show_highlighting,
                } => {
                    let update = SettingsUpdate {
                        voice_name: voice,
                        rate,
                        pitch,
                        volume,
                        show_highlighting,
                    };
                    update_settings(store.as_ref(), &update).await?;
                }
                SettingsCommands::Clear => clear_settings(store.as_ref()).await?,
            }
            serde_json::to_value(get_settings(store.as_ref()).await?)?
        }
        Commands::Voice { name } => {
            let kind = VoiceKind::classify(&name);
            json!({
                "name": name,
                "kind": kind.as_str(),
                "remote": kind.is_remote(),
                "premium": kind.is_premium(),
            })
        }
        Commands::Lang { tag } => {
            let parsed = parse_lang(&tag);
            json!({ "lang": parsed.lang, "rest": parsed.rest })
        }
    };

    Ok(value)
}

// Only the remote commands need a parseable service URL.
fn billing_client(service_url: &str, store: &Arc<dyn KeyValueStore>) -> CliResult<BillingClient> {
    let registrar = Arc::new(StoreUninstallRegistrar::new(store.clone()));
    Ok(BillingClient::connect(service_url, store.clone(), registrar)?)
}
