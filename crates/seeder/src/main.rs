//! One-shot seeding binary.
//!
//! Usage: `taskboard-seeder [sequential|batch]` (default: sequential).
//! Expects `DATABASE_URL` in the environment or a `.env` file, and is meant
//! to run against an empty or disposable store.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_seeder::{
    seed_batch, seed_sequential, BATCH_TASKS_PER_PROJECT, DEFAULT_PROJECT_COUNT,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let variant = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sequential".to_string());

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = taskboard_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    taskboard_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let mut rng = rand::rng();
    let result = match variant.as_str() {
        "sequential" => seed_sequential(&pool, &mut rng, DEFAULT_PROJECT_COUNT).await,
        "batch" => {
            seed_batch(
                &pool,
                &mut rng,
                DEFAULT_PROJECT_COUNT,
                BATCH_TASKS_PER_PROJECT,
            )
            .await
        }
        other => {
            tracing::error!(variant = other, "Unknown variant, expected 'sequential' or 'batch'");
            taskboard_db::close_pool(&pool).await;
            return ExitCode::FAILURE;
        }
    };

    let code = match result {
        Ok(summary) => {
            tracing::info!(
                projects = summary.projects,
                tasks = summary.tasks,
                variant,
                "Seeding complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            // First failure aborts the run; nothing is retried or rolled back.
            tracing::error!(error = %err, variant, "Seeding aborted");
            ExitCode::FAILURE
        }
    };

    taskboard_db::close_pool(&pool).await;
    code
}
