//! Command-line surface of the `mate` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mate", version, about = "Talk to the Mate backend through the action bus")]
pub struct Cli {
    /// Path to config file (defaults to ~/.config/mate/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the SQLite database path from the config
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Account synchronisation and lookup
    Account(AccountCli),
    /// Request an ONSA token for a user
    Token {
        user_id: i64,
    },
    /// Device registration
    Devices(DevicesCli),
    /// Calendar events
    Events(EventsCli),
    /// Weather forecast for a coordinate
    Forecast {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
        #[arg(long, default_value_t = 3)]
        days: u8,
    },
    /// In-app purchases
    Iap(IapCli),
}

#[derive(Args, Debug)]
pub struct AccountCli {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Fetch the signed-in account and cache it
    Sync,
    /// Print a cached account
    Show { user_id: i64 },
    /// Ask the backend whether an email is registered
    CheckEmail { email: String },
    /// Close the account and drop its cached data
    Close { user_id: i64 },
}

#[derive(Args, Debug)]
pub struct DevicesCli {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Subcommand, Debug)]
pub enum DevicesCommand {
    /// Replace the cached devices of a user with the backend's list
    Sync { user_id: i64 },
    Register {
        name: String,
        model: String,
        #[arg(long)]
        os_version: Option<String>,
    },
    Unregister { device_id: i64 },
}

#[derive(Args, Debug)]
pub struct EventsCli {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// Fetch events, replacing the cached copy (or one category of it)
    Sync {
        user_id: i64,
        #[arg(long)]
        category: Option<i64>,
    },
    /// Print cached events
    List { user_id: i64 },
    /// Delete cached events
    Reset { user_id: i64 },
}

#[derive(Args, Debug)]
pub struct IapCli {
    #[command(subcommand)]
    pub command: IapCommand,
}

#[derive(Subcommand, Debug)]
pub enum IapCommand {
    Products,
    Purchase { product_id: String, receipt: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_counts_flags() {
        let cli = Cli::try_parse_from(["mate", "-vv", "token", "7"]).expect("parse");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Token { user_id: 7 }));
    }

    #[test]
    fn test_event_sync_category_is_optional() {
        let cli = Cli::try_parse_from(["mate", "events", "sync", "3", "--category", "9"])
            .expect("parse");
        match cli.command {
            Command::Events(EventsCli {
                command: EventsCommand::Sync { user_id, category },
            }) => {
                assert_eq!(user_id, 3);
                assert_eq!(category, Some(9));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_forecast_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["mate", "forecast", "-33.9", "18.4", "--days", "5"])
            .expect("parse");
        match cli.command {
            Command::Forecast {
                latitude,
                longitude,
                days,
            } => {
                assert_eq!(latitude, -33.9);
                assert_eq!(longitude, 18.4);
                assert_eq!(days, 5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_database_override() {
        let cli = Cli::try_parse_from(["mate", "iap", "products", "--database", "/tmp/x.sqlite"])
            .expect("parse");
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.sqlite")));
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["mate"]).is_err());
    }
}
