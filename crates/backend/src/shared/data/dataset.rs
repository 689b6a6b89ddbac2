use chrono::{DateTime, Datelike, NaiveDate, Utc};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

static DATASET: OnceCell<SalesDataset> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot open dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dataset row: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset already initialized")]
    AlreadyInitialized,
}

/// One row of the sales CSV
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub region: String,
    pub revenue: f64,
    pub customers: u64,
    pub churned: u64,
}

impl SalesRecord {
    /// Month key "YYYY-MM" the record is aggregated under
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

/// Read-only in-memory sales data, loaded once at startup
#[derive(Debug, Clone)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
    loaded_at: DateTime<Utc>,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records,
            loaded_at: Utc::now(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let records = csv_reader
            .deserialize::<SalesRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records))
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

/// Load the dataset from `path` and publish it for the handlers
pub fn initialize_dataset(path: &Path) -> Result<(), DatasetError> {
    let dataset = SalesDataset::from_path(path)?;
    tracing::info!(
        "Loaded {} sales records from {}",
        dataset.records().len(),
        path.display()
    );
    DATASET
        .set(dataset)
        .map_err(|_| DatasetError::AlreadyInitialized)
}

pub fn get_dataset() -> anyhow::Result<&'static SalesDataset> {
    DATASET
        .get()
        .ok_or_else(|| anyhow::anyhow!("Sales dataset has not been initialized"))
}
