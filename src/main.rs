// Copyright (c) 2024 Nexus. All rights reserved.

mod cli_messages;
mod config;
mod consts;
mod error;
mod logging;
mod mock_data;
mod model;
mod navigation;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH};
use crate::model::{TabId, UserRole};
use crate::session::setup::SessionOverrides;
use crate::session::snapshot_mode::SnapshotOptions;
use crate::session::{run_snapshot_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the clinic dashboard in the terminal
    Start {
        /// Role of the signed-in user. Overrides the config file.
        #[arg(long, value_enum)]
        role: Option<UserRole>,

        /// Name shown in the sidebar profile.
        #[arg(long, value_name = "NAME")]
        user_name: Option<String>,

        /// Disable the dashboard background color
        #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
        no_background_color: bool,
    },
    /// Render one dashboard frame as text and print it to stdout
    Snapshot {
        /// Role of the signed-in user. Overrides the config file.
        #[arg(long, value_enum)]
        role: Option<UserRole>,

        /// Tab to show
        #[arg(long, value_enum)]
        tab: Option<TabId>,

        /// Open the chat with this queued patient
        #[arg(long, value_name = "PATIENT_ID")]
        open_chat: Option<String>,

        #[arg(long, default_value_t = SNAPSHOT_WIDTH)]
        width: u16,

        #[arg(long, default_value_t = SNAPSHOT_HEIGHT)]
        height: u16,
    },
    /// Write a config file with the given role and name
    InitConfig {
        #[arg(long, value_enum, default_value_t = UserRole::default())]
        role: UserRole,

        #[arg(long, value_name = "NAME")]
        user_name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            role,
            user_name,
            no_background_color,
        } => {
            let session = setup_session(SessionOverrides {
                role,
                user_name,
                no_background_color,
            })?;
            run_tui_mode(session).await
        }
        Command::Snapshot {
            role,
            tab,
            open_chat,
            width,
            height,
        } => {
            let session = setup_session(SessionOverrides {
                role,
                user_name: None,
                no_background_color: true,
            })?;
            let result = run_snapshot_mode(
                session,
                SnapshotOptions {
                    tab,
                    open_chat,
                    width,
                    height,
                },
            );
            if let Err(e) = &result {
                print_cmd_error!("Snapshot failed", e.to_string().as_str());
            }
            result
        }
        Command::InitConfig { role, user_name } => {
            let config_path = get_config_path()?;
            let config = Config::new(role, user_name);
            if let Err(e) = config.save(&config_path) {
                print_cmd_error!("Failed to save config", e.to_string().as_str());
                return Err(e.into());
            }
            print_cmd_success!(
                "Config written",
                "{} ({} as {})",
                config_path.display(),
                config.display_name(),
                role.label()
            );
            print_cmd_info!("Start the dashboard with", "medichat start");
            Ok(())
        }
    }
}
