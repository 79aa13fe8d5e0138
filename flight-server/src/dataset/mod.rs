//! Loading of the generated airport and route tables.
//!
//! The dataset consists of two headerless CSV files produced offline:
//!
//! - airports: `index,iata,icao`, one row per airport, indices dense from 0
//! - routes: `from,to,distance`, airport indices and kilometres
//!
//! Loading happens once at startup. The result is immutable.

mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Airport, AirportIndex};
use crate::network::{AirportDirectory, Route, RouteGraph};

pub use error::DatasetError;

/// A row of the airports file.
#[derive(Debug, Deserialize)]
struct AirportRecord {
    index: u32,
    iata: String,
    icao: String,
}

/// The loaded flight network.
#[derive(Debug, Clone)]
pub struct Dataset {
    directory: AirportDirectory,
    graph: RouteGraph,
}

impl Dataset {
    /// Load both files from disk.
    pub fn load(airports_path: &Path, routes_path: &Path) -> Result<Self, DatasetError> {
        let open = |path: &Path| {
            File::open(path).map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let directory = read_airports(open(airports_path)?, &airports_path.display().to_string())?;
        let routes = read_routes(open(routes_path)?, &routes_path.display().to_string())?;
        Ok(Self::assemble(directory, routes))
    }

    /// Load from arbitrary readers (e.g. in-memory buffers).
    pub fn from_readers(airports: impl Read, routes: impl Read) -> Result<Self, DatasetError> {
        let directory = read_airports(airports, "airports")?;
        let routes = read_routes(routes, "routes")?;
        Ok(Self::assemble(directory, routes))
    }

    fn assemble(directory: AirportDirectory, routes: Vec<Route>) -> Self {
        let read = routes.len();
        let (graph, stats) = RouteGraph::from_routes(directory.len(), routes);

        if stats.dropped_unresolved > 0 {
            warn!(
                dropped = stats.dropped_unresolved,
                "Dropped routes with unknown airports"
            );
        }
        if stats.dropped_distance > 0 {
            warn!(
                dropped = stats.dropped_distance,
                "Dropped routes without a usable distance"
            );
        }
        info!(
            airports = directory.len(),
            routes = stats.accepted,
            read,
            "Loaded flight network"
        );

        Self { directory, graph }
    }

    /// Airport code lookup.
    pub fn directory(&self) -> &AirportDirectory {
        &self.directory
    }

    /// Route adjacency.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Number of airports.
    pub fn airport_count(&self) -> usize {
        self.directory.len()
    }
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn read_airports(input: impl Read, origin: &str) -> Result<AirportDirectory, DatasetError> {
    let mut airports = Vec::new();
    for record in csv_reader(input).deserialize::<AirportRecord>() {
        let record = record.map_err(|source| DatasetError::Csv {
            origin: origin.to_string(),
            source,
        })?;
        let index = AirportIndex::new(record.index)?;
        airports.push(Airport::new(index, record.iata, record.icao));
    }
    Ok(AirportDirectory::new(airports)?)
}

fn read_routes(input: impl Read, origin: &str) -> Result<Vec<Route>, DatasetError> {
    csv_reader(input)
        .deserialize::<Route>()
        .map(|record| {
            record.map_err(|source| DatasetError::Csv {
                origin: origin.to_string(),
                source,
            })
        })
        .collect()
}
