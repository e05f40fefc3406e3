use starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed::seed_all,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let email =
        std::env::var("SEED_USER_EMAIL").unwrap_or_else(|_| "luke@rebellion.org".to_string());
    let password =
        std::env::var("SEED_USER_PASSWORD").unwrap_or_else(|_| "usetheforce".to_string());

    let report = seed_all(&orm, &email, &password).await?;

    println!(
        "Seed completed. users: {}, people: {}, planets: {}",
        report.users, report.people, report.planets
    );
    Ok(())
}
