use std::{path::PathBuf, sync::Arc};

use clap::Args;
use foodwheels_app::{
    context::AppContext,
    domain::{seed::models::SeedData, sessions::MemorySessionStore},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// YAML seed document; the bundled demo data when omitted
    #[arg(long)]
    file: Option<PathBuf>,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let seed = match &args.file {
        Some(path) => {
            let yaml = tokio::fs::read_to_string(path)
                .await
                .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

            SeedData::from_yaml(&yaml)
        }
        None => SeedData::bundled(),
    }
    .map_err(|error| format!("invalid seed document: {error}"))?;

    let context = AppContext::from_database_url(
        &args.database.database_url,
        Arc::new(MemorySessionStore::default()),
    )
    .await
    .map_err(|error| format!("failed to open database: {error}"))?;

    let report = context
        .seed
        .reset_and_seed(seed)
        .await
        .map_err(|error| format!("failed to seed database: {error}"))?;

    println!("users: {}", report.users);
    println!("restaurants: {}", report.restaurants);
    println!("catalog items: {}", report.items);

    Ok(())
}
