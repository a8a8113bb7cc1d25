use clap::{Args, Parser, Subcommand};

mod admin;
mod db;

#[derive(Debug, Parser)]
#[command(name = "foodwheels-app", about = "FoodWheels operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Admin(admin::AdminCommand),
}

/// Connection options shared by every command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// `SQLite` connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://foodwheels.db")]
    pub(crate) database_url: String,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Admin(command) => admin::run(command).await,
        }
    }
}
