use crate::catalog::SeedConfig;
use crate::seed::populate;
use db::store::SeaOrmStore;
use util::config::{self, AppConfig};

mod catalog;
mod error;
mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    common::logger::init_logger(&config::log_level(), &config::log_file(), config::log_to_stdout());

    let seed_config = SeedConfig::from_app_config(AppConfig::global());

    log::info!(
        "{} seeding validation fixtures into {}",
        config::project_name(),
        config::database_path()
    );

    let db = match db::connect(&seed_config.readiness).await {
        Ok(db) => db,
        Err(err) => {
            log::error!("Failed to connect to database: {err}");
            exit_with_failure();
        }
    };

    if populate(SeaOrmStore::new(db), &seed_config).await.is_err() {
        exit_with_failure();
    }
}

fn exit_with_failure() -> ! {
    log::logger().flush();
    std::process::exit(1);
}
