use clap::Args;
use storefront_app::{auth::PgAuthService, database};

#[derive(Debug, Args)]
pub(crate) struct CreateSessionArgs {
    /// Email of the user to sign in
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateSessionArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_session(&args.email)
        .await
        .map_err(|error| format!("failed to create session: {error}"))?;

    println!("session_uuid: {}", issued.session.uuid);
    println!("user_uuid: {}", issued.session.user_uuid);
    println!("session_created_at: {}", issued.session.created_at);
    println!("session_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
