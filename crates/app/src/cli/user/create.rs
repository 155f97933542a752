use clap::Args;
use storefront_app::{
    auth::{NewUser, PgAuthService, Role, UserUuid},
    database,
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// Sign-in email address
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    full_name: Option<String>,

    /// Role granted to the user (admin or customer)
    #[arg(long, default_value = "customer")]
    role: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let role: Role = args.role.parse().map_err(|error| format!("{error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgAuthService::new(pool);

    let user = service
        .create_user(NewUser {
            uuid: UserUuid::new(),
            email: args.email,
            full_name: args.full_name,
            role,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_email: {}", user.email);
    println!("user_role: {}", user.role);

    Ok(())
}
