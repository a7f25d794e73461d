use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::aircraft::{Aircraft, CrewCostProfile, DEFAULT_SAFETY_FACTOR};
use crate::error::{Error, Result};
use crate::network::{AirportSpec, Network};

/// Default filename for a user-provided airport dataset.
const DATASET_FILENAME: &str = "airports.json";

/// Environment variable naming an airport dataset file.
pub const AIRPORTS_ENV_VAR: &str = "FLIGHTNET_AIRPORTS";

/// Sample network bundled with the library.
const BUILTIN_AIRPORTS: &str = include_str!("../data/airports.json");

static BUILTIN_SPECS: Lazy<std::result::Result<Vec<AirportSpec>, String>> =
    Lazy::new(|| parse_airports_json(BUILTIN_AIRPORTS.as_bytes()).map_err(|err| err.to_string()));

/// Where an airport dataset was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Path passed explicitly by the caller.
    Explicit(PathBuf),
    /// Path taken from [`AIRPORTS_ENV_VAR`].
    Environment(PathBuf),
    /// `airports.json` in the platform data directory.
    DataDir(PathBuf),
    /// The bundled sample network.
    Builtin,
}

impl DatasetSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            DatasetSource::Explicit(path)
            | DatasetSource::Environment(path)
            | DatasetSource::DataDir(path) => Some(path),
            DatasetSource::Builtin => None,
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("built-in sample network"),
        }
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "flightnet", "flightnet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATASET_FILENAME))
}

/// Decide which dataset to load.
///
/// Precedence: explicit path, then [`AIRPORTS_ENV_VAR`], then `airports.json`
/// in the platform data directory when it exists, then the bundled network.
pub fn resolve_dataset_source(explicit: Option<&Path>) -> DatasetSource {
    let data_dir = match default_dataset_path() {
        Ok(path) => Some(path),
        Err(err) => {
            debug!("no platform data directory: {err}");
            None
        }
    };
    resolve_with(explicit, env::var_os(AIRPORTS_ENV_VAR), data_dir)
}

fn resolve_with(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    data_dir_file: Option<PathBuf>,
) -> DatasetSource {
    if let Some(path) = explicit {
        return DatasetSource::Explicit(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return DatasetSource::Environment(PathBuf::from(value));
    }
    if let Some(path) = data_dir_file.filter(|path| path.is_file()) {
        return DatasetSource::DataDir(path);
    }
    DatasetSource::Builtin
}

/// Airports of the bundled sample network.
pub fn builtin_network_airports() -> Result<Vec<AirportSpec>> {
    match &*BUILTIN_SPECS {
        Ok(specs) => Ok(specs.clone()),
        Err(err) => Err(Error::AirportDataValidation {
            message: format!("bundled airport data: {err}"),
        }),
    }
}

/// Load airport specs from a file. Files ending in `.csv` are read as CSV;
/// anything else is parsed as a JSON array.
pub fn load_airports(path: &Path) -> Result<Vec<AirportSpec>> {
    let file = fs::File::open(path)?;
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let parsed = if is_csv {
        parse_airports_csv(file)
    } else {
        parse_airports_json(file)
    };
    let specs = parsed.map_err(|err| Error::AirportDataValidation {
        message: format!("{}: {err}", path.display()),
    })?;

    info!("loaded {} airports from {}", specs.len(), path.display());
    Ok(specs)
}

/// Load the airport specs for a resolved source.
pub fn load_airports_from(source: &DatasetSource) -> Result<Vec<AirportSpec>> {
    match source.path() {
        Some(path) => load_airports(path),
        None => {
            let specs = builtin_network_airports()?;
            info!("using built-in sample network ({} airports)", specs.len());
            Ok(specs)
        }
    }
}

/// Parse a JSON array of airport records.
pub fn parse_airports_json<R: Read>(reader: R) -> Result<Vec<AirportSpec>> {
    let specs: Vec<AirportSpec> = serde_json::from_reader(reader)?;
    warn_on_duplicates(&specs);
    Ok(specs)
}

/// Parse CSV airport records with a header row.
pub fn parse_airports_csv<R: Read>(reader: R) -> Result<Vec<AirportSpec>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let mut specs = Vec::new();
    for (row, record) in csv_reader.deserialize::<AirportSpec>().enumerate() {
        let spec = record.map_err(|err| Error::AirportDataValidation {
            // Header occupies line 1.
            message: format!("row {}: {}", row + 2, err),
        })?;
        specs.push(spec);
    }
    warn_on_duplicates(&specs);
    Ok(specs)
}

// Later records replace earlier ones once inserted into a network.
fn warn_on_duplicates(specs: &[AirportSpec]) {
    let mut seen = HashSet::new();
    for spec in specs {
        let code = spec.code.trim().to_ascii_uppercase();
        if !seen.insert(code.clone()) {
            warn!("duplicate airport code {code}; the later record wins");
        }
    }
}

/// Build a network from the resolved airport dataset.
///
/// `safety_factor` defaults to 0.9 when `None`.
pub fn load_network(
    explicit: Option<&Path>,
    aircraft: Aircraft,
    crew: CrewCostProfile,
    safety_factor: Option<f64>,
) -> Result<Network> {
    let source = resolve_dataset_source(explicit);
    debug!("airport dataset source: {source}");
    let specs = load_airports_from(&source)?;

    let safety_factor = safety_factor.unwrap_or(DEFAULT_SAFETY_FACTOR);
    let mut network = Network::with_config(aircraft, crew, safety_factor)?;
    network.extend_airports(specs)?;
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn builtin_network_is_deduplicated() {
        let specs = builtin_network_airports().expect("bundled data parses");
        assert_eq!(specs.len(), 45);
        let codes: HashSet<_> = specs.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes.len(), specs.len());
        assert!(codes.contains("DEL") && codes.contains("JFK"));
    }

    #[test]
    fn explicit_path_wins() {
        let source = resolve_with(
            Some(Path::new("/tmp/a.json")),
            Some(OsString::from("/tmp/b.json")),
            None,
        );
        assert_eq!(source, DatasetSource::Explicit(PathBuf::from("/tmp/a.json")));
    }

    #[test]
    fn environment_beats_data_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("airports.json");
        fs::write(&file, "[]").unwrap();

        let source = resolve_with(None, Some(OsString::from("/tmp/env.json")), Some(file.clone()));
        assert_eq!(source, DatasetSource::Environment(PathBuf::from("/tmp/env.json")));

        let source = resolve_with(None, Some(OsString::new()), Some(file.clone()));
        assert_eq!(source, DatasetSource::DataDir(file));
    }

    #[test]
    fn missing_data_dir_file_falls_back_to_builtin() {
        let dir = tempdir().unwrap();
        let source = resolve_with(None, None, Some(dir.path().join("airports.json")));
        assert_eq!(source, DatasetSource::Builtin);
        assert_eq!(source.to_string(), "built-in sample network");
    }

    #[test]
    fn json_accepts_short_field_names() {
        let json = r#"[{"id":"AAA","name":"Alpha","lat":1.0,"lon":2.0,"fuel_price":0.5,"landing_fee":100,"country":"X","max_fuel_capacity":20000}]"#;
        let specs = parse_airports_json(Cursor::new(json)).unwrap();
        assert_eq!(specs[0].code, "AAA");
        assert_eq!(specs[0].fuel_price_per_kg, 0.5);
        assert_eq!(specs[0].max_fuel_capacity_kg, Some(20_000.0));
    }

    #[test]
    fn csv_with_optional_capacity_column() {
        let csv = "code,name,country,lat,lon,fuel_price_per_kg,landing_fee,max_fuel_capacity_kg\nAAA,Alpha,X,1,2,0.5,100,\nBBB,Bravo,Y,3,4,0.7,200,15000\n";
        let specs = parse_airports_csv(Cursor::new(csv)).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].max_fuel_capacity_kg, None);
        assert_eq!(specs[1].max_fuel_capacity_kg, Some(15_000.0));
    }

    #[test]
    fn load_airports_reports_path_on_bad_json() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("broken.json");
        fs::write(&file, "{not json").unwrap();
        let err = load_airports(&file).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
