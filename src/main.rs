use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use mate::cli::{AccountCommand, Cli, Command, DevicesCommand, EventsCommand, IapCommand};
use mate::config::ConfigStore;
use mate::context::ServiceContext;
use mate::dispatch::{Dispatcher, StoresClient};
use mate::logging::init_tracing;
use mate::store::StoresManager;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let context = ServiceContext::from_config(config).context("Failed to build service context")?;

    let (client, server) = Dispatcher::new();
    let server_task = tokio::spawn(server.run(StoresManager::new(&context)));

    let outcome = execute(&client, cli.command).await;

    drop(client);
    server_task.await.context("Dispatcher task failed")?;
    outcome
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let config = ConfigStore::open(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(database) = cli.database.clone() {
        config.update(|config| config.storage.path = database);
    }
    Ok(config)
}

async fn execute(client: &StoresClient, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Account(account) => match account.command {
            AccountCommand::Sync => print(&client.synchronize_account().await?),
            AccountCommand::Show { user_id } => print(&client.load_account(user_id).await?),
            AccountCommand::CheckEmail { email } => print(&client.check_email(email).await?),
            AccountCommand::Close { user_id } => print(&client.close_account(user_id).await?),
        },
        Command::Token { user_id } => print(&client.get_token(user_id).await?),
        Command::Devices(devices) => match devices.command {
            DevicesCommand::Sync { user_id } => print(&client.synchronize_devices(user_id).await?),
            DevicesCommand::Register {
                name,
                model,
                os_version,
            } => print(&client.register_device(name, model, os_version).await?),
            DevicesCommand::Unregister { device_id } => {
                print(&client.unregister_device(device_id).await?)
            }
        },
        Command::Events(events) => match events.command {
            EventsCommand::Sync { user_id, category } => {
                print(&client.synchronize_events(user_id, category).await?)
            }
            EventsCommand::List { user_id } => print(&client.load_events(user_id).await?),
            EventsCommand::Reset { user_id } => print(&client.reset_events(user_id).await?),
        },
        Command::Forecast {
            latitude,
            longitude,
            days,
        } => print(&client.load_forecast(latitude, longitude, days).await?),
        Command::Iap(iap) => match iap.command {
            IapCommand::Products => print(&client.load_products().await?),
            IapCommand::Purchase {
                product_id,
                receipt,
            } => print(&client.purchase_product(product_id, receipt).await?),
        },
    }
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
