use crate::LoadError;
use crate::generators::SeasonGenerator;
use crate::loaders::{DataFileKind, SeasonLoader};
use futures::future::join_all;
use league_core::{SeasonCollection, SeasonData, SeasonId};
use log::{debug, error, info};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

type SeasonCache = RwLock<HashMap<SeasonId, Arc<SeasonData>>>;

/// Directory-backed season and cup data with a per-id cache.
/// A file that cannot be read or parsed is logged and served as an empty season.
pub struct SeasonStore {
    data_dir: PathBuf,
    seasons: SeasonCache,
    cups: SeasonCache,
}

impl SeasonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        SeasonStore {
            data_dir: data_dir.into(),
            seasons: RwLock::new(HashMap::new()),
            cups: RwLock::new(HashMap::new()),
        }
    }

    pub async fn season(&self, id: &SeasonId) -> Arc<SeasonData> {
        self.get_or_load(DataFileKind::Season, id).await
    }

    pub async fn cup(&self, id: &SeasonId) -> Arc<SeasonData> {
        self.get_or_load(DataFileKind::Cup, id).await
    }

    /// Loads every requested season concurrently.
    pub async fn seasons(&self, ids: &[SeasonId]) -> SeasonCollection {
        let loaded = join_all(ids.iter().map(|id| self.season(id))).await;

        info!("{} seasons ready", loaded.len());

        ids.iter()
            .cloned()
            .zip(loaded.into_iter().map(|season| season.as_ref().clone()))
            .collect()
    }

    pub async fn try_load(&self, kind: DataFileKind, id: &SeasonId) -> Result<SeasonData, LoadError> {
        let file_name = kind.file_name(id.as_str());
        let path = self.data_dir.join(&file_name);

        let contents = tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::NotFound(path.display().to_string())
            } else {
                LoadError::Io {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;

        let entity = SeasonLoader::parse(&file_name, &contents)?;

        Ok(SeasonGenerator::generate(entity))
    }

    async fn get_or_load(&self, kind: DataFileKind, id: &SeasonId) -> Arc<SeasonData> {
        let cache = self.cache(kind);

        if let Some(season) = cache.read().await.get(id) {
            debug!("cache hit: {:?} {}", kind, id);
            return Arc::clone(season);
        }

        let season = match self.try_load(kind, id).await {
            Ok(season) => season,
            Err(e) => {
                error!("{}", e);
                SeasonData::empty()
            }
        };

        let mut cache = cache.write().await;

        Arc::clone(cache.entry(id.clone()).or_insert_with(|| Arc::new(season)))
    }

    fn cache(&self, kind: DataFileKind) -> &SeasonCache {
        match kind {
            DataFileKind::Season => &self.seasons,
            DataFileKind::Cup => &self.cups,
        }
    }
}
