use crate::loaders::{SeasonEntity, SeasonLoader};
use include_dir::{Dir, include_dir};
use log::{error, info, warn};

static STATIC_DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/data");

const SEASON_FILE_PREFIX: &str = "season";
const CUP_FILE_PREFIX: &str = "eurocup";
const DATA_FILE_EXTENSION: &str = ".json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFileKind {
    Season,
    Cup,
}

impl DataFileKind {
    pub fn file_name(&self, id: &str) -> String {
        let prefix = match self {
            DataFileKind::Season => SEASON_FILE_PREFIX,
            DataFileKind::Cup => CUP_FILE_PREFIX,
        };

        format!("{}{}{}", prefix, id, DATA_FILE_EXTENSION)
    }

    /// `season3.json` -> `(Season, "3")`, `eurocup25.json` -> `(Cup, "25")`
    pub fn parse_file_name(file_name: &str) -> Option<(DataFileKind, &str)> {
        let stem = file_name.strip_suffix(DATA_FILE_EXTENSION)?;

        let (kind, id) = if let Some(id) = stem.strip_prefix(CUP_FILE_PREFIX) {
            (DataFileKind::Cup, id)
        } else {
            (DataFileKind::Season, stem.strip_prefix(SEASON_FILE_PREFIX)?)
        };

        if id.is_empty() { None } else { Some((kind, id)) }
    }
}

#[derive(Debug, Default)]
pub struct DatabaseEntity {
    pub seasons: Vec<(String, SeasonEntity)>,
    pub cups: Vec<(String, SeasonEntity)>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads the bundled data files. Unreadable files are logged and skipped.
    pub fn load() -> DatabaseEntity {
        let mut database = DatabaseEntity::default();

        for file in STATIC_DATA_DIR.files() {
            let Some(file_name) = file.path().file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            let Some((kind, id)) = DataFileKind::parse_file_name(file_name) else {
                warn!("unrecognized data file: {}", file_name);
                continue;
            };

            let Some(contents) = file.contents_utf8() else {
                warn!("data file is not utf-8: {}", file_name);
                continue;
            };

            match SeasonLoader::parse(file_name, contents) {
                Ok(entity) => match kind {
                    DataFileKind::Season => database.seasons.push((String::from(id), entity)),
                    DataFileKind::Cup => database.cups.push((String::from(id), entity)),
                },
                Err(e) => error!("{}", e),
            }
        }

        info!(
            "bundled data loaded: {} seasons, {} cups",
            database.seasons.len(),
            database.cups.len()
        );

        database
    }
}
