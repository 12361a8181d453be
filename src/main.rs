mod config;
mod report;

use crate::config::DashboardConfig;
use database::{DatabaseGenerator, DatabaseLoader, LeagueDatabase, SeasonStore};
use env_logger::Env;
use league_core::TimeEstimation;
use log::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = DashboardConfig::from_env();

    let data = load(&config).await;

    let output = report::report(&config, &data)?;

    println!("{}", output);

    Ok(())
}

async fn load(config: &DashboardConfig) -> LeagueDatabase {
    match &config.data_dir {
        Some(data_dir) => {
            let store = SeasonStore::new(data_dir);

            let ((seasons, cup), estimated) = TimeEstimation::estimate_async(async {
                (store.seasons(&config.seasons).await, store.cup(&config.cup).await)
            })
            .await;

            info!("data loaded from {}: {} ms", data_dir.display(), estimated);

            LeagueDatabase {
                seasons,
                cups: [(config.cup.clone(), cup.as_ref().clone())].into_iter().collect(),
            }
        }
        None => {
            let (database, estimated) =
                TimeEstimation::estimate(|| DatabaseGenerator::generate(DatabaseLoader::load()));

            info!("bundled data loaded: {} ms", estimated);

            LeagueDatabase {
                seasons: database
                    .seasons
                    .iter()
                    .filter(|(id, _)| config.seasons.contains(id))
                    .map(|(id, season)| (id.clone(), season.clone()))
                    .collect(),
                cups: database.cups,
            }
        }
    }
}
