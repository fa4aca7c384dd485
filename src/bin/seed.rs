//! Database seeder for local development.
//!
//! Imports fixture bootcamps and their courses from `_data/bootcamps.json`,
//! or wipes both tables.
//!
//! ```bash
//! cargo run --bin seed -- --import
//! cargo run --bin seed -- --destroy
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use bootcamp_api::config;
use bootcamp_api::domain::entities::{NewBootcamp, NewCourse};
use bootcamp_api::domain::repositories::{BootcampRepository, CourseRepository};
use bootcamp_api::infrastructure::persistence::{PgBootcampRepository, PgCourseRepository};

#[derive(Parser)]
#[command(name = "seed", about = "Import or destroy fixture data", version)]
struct Args {
    /// Import fixture data from the data directory.
    #[arg(long, conflicts_with = "destroy")]
    import: bool,

    /// Delete all bootcamps and courses.
    #[arg(long)]
    destroy: bool,

    /// Directory containing bootcamps.json.
    #[arg(long, default_value = "_data")]
    data_dir: PathBuf,
}

/// A fixture bootcamp with its nested courses.
#[derive(Debug, Deserialize)]
struct SeedBootcamp {
    #[serde(flatten)]
    bootcamp: NewBootcamp,
    #[serde(default)]
    courses: Vec<NewCourse>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if !args.import && !args.destroy {
        bail!("Pass --import or --destroy");
    }

    let config = config::load_from_env()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    if args.destroy {
        // Courses go with their bootcamps via ON DELETE CASCADE.
        sqlx::query("DELETE FROM bootcamps").execute(&pool).await?;
        tracing::info!("Data destroyed");
        return Ok(());
    }

    let path = args.data_dir.join("bootcamps.json");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let fixtures: Vec<SeedBootcamp> =
        serde_json::from_str(&raw).context("Failed to parse bootcamps.json")?;

    let pool = Arc::new(pool);
    let bootcamp_repo = PgBootcampRepository::new(pool.clone());
    let course_repo = PgCourseRepository::new(pool.clone());

    let mut bootcamps = 0usize;
    let mut courses = 0usize;

    for fixture in fixtures {
        let name = fixture.bootcamp.name.clone();
        let bootcamp = bootcamp_repo
            .create(fixture.bootcamp)
            .await
            .with_context(|| format!("Failed to import bootcamp '{name}'"))?;
        bootcamps += 1;

        for course in fixture.courses {
            course_repo
                .create(bootcamp.id, course)
                .await
                .with_context(|| format!("Failed to import a course of '{name}'"))?;
            courses += 1;
        }
    }

    tracing::info!(bootcamps, courses, "Data imported");
    Ok(())
}
