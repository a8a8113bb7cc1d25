use std::sync::Arc;

use clap::Args;
use foodwheels_app::{
    context::AppContext,
    domain::{
        accounts::models::{NewUser, Password},
        sessions::MemorySessionStore,
    },
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateAdminArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Login email
    #[arg(long)]
    email: String,

    /// Login password
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: String,

    #[arg(long)]
    first_name: Option<String>,

    #[arg(long)]
    last_name: Option<String>,
}

pub(crate) async fn run(args: CreateAdminArgs) -> Result<(), String> {
    let context = AppContext::from_database_url(
        &args.database.database_url,
        Arc::new(MemorySessionStore::default()),
    )
    .await
    .map_err(|error| format!("failed to open database: {error}"))?;

    let user = context
        .accounts
        .sign_up(NewUser {
            email: args.email,
            password: Password::new(args.password),
            first_name: args.first_name,
            last_name: args.last_name,
            country: None,
            is_admin: true,
        })
        .await
        .map_err(|error| format!("failed to create admin: {error}"))?;

    println!("user_id: {}", user.id);
    println!("email: {}", user.email);

    Ok(())
}
