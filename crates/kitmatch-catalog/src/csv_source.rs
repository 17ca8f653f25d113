//! CSV catalog ingestion.
//!
//! One reader accepts both row shapes found in the wild: inventory rows (`nama_alat`,
//! `harga_sewa`, `kebutuhan_konten`, ...) and structured rows (`name`, `price_band`,
//! `environment`, `best_for`, `components`, ...). Columns are matched by header alias,
//! case-insensitively, and any column may be missing except the name.
//!
//! Ingestion is best effort: rows without a name and repeated names are skipped, and values
//! that fail to parse fall back to defaults (price 0, stock 0, rating 0.0, medium bands).

use std::{
    collections::HashSet,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use csv::{ReaderBuilder, StringRecord, Trim};
use kitmatch_engine::{Band, EquipmentKit, Expertise, normalize_tags};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{CatalogError, CatalogProvider};

/// Category used when a row has none.
const DEFAULT_CATEGORY: &str = "other";

/// Separator for tag lists.
const TAG_SEPARATOR: char = ';';

/// Separator for component lists.
const COMPONENT_SEPARATOR: char = '|';

/// Counts from one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Rows turned into kits.
    pub added: usize,
    /// Rows dropped for a missing or repeated name.
    pub skipped: usize,
}

/// Kits read from a source together with the ingestion counts.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    /// Kits in file order.
    pub kits: Vec<EquipmentKit>,
    /// Ingestion counts.
    pub report: LoadReport,
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct Columns {
    /// Kit name.
    name: Option<usize>,
    /// Category.
    category: Option<usize>,
    /// Rental price.
    price: Option<usize>,
    /// Stock.
    stock: Option<usize>,
    /// Rating.
    rating: Option<usize>,
    /// Description.
    description: Option<usize>,
    /// "Good for" notes.
    requirements: Option<usize>,
    /// Image reference.
    image: Option<usize>,
    /// Price band.
    price_band: Option<usize>,
    /// Portability band.
    portability: Option<usize>,
    /// `;`-separated environment tags.
    environment: Option<usize>,
    /// Audio quality band.
    audio_quality: Option<usize>,
    /// Stabilization band.
    stabilization: Option<usize>,
    /// Experience level.
    experience: Option<usize>,
    /// `;`-separated content tags.
    best_for: Option<usize>,
    /// `|`-separated components.
    components: Option<usize>,
}

impl Columns {
    /// Resolves columns from headers.
    fn from_headers(headers: &StringRecord) -> Self {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |aliases: &[&str]| names.iter().position(|h| aliases.contains(&h.as_str()));
        Self {
            name: find(&["name", "nama_alat"]),
            category: find(&["category", "kategori"]),
            price: find(&["price", "harga_sewa"]),
            stock: find(&["stock", "stok"]),
            rating: find(&["rating", "rating_alat"]),
            description: find(&["description", "deskripsi"]),
            requirements: find(&["requirements", "kebutuhan_konten"]),
            image: find(&["image", "gambar"]),
            price_band: find(&["price_band"]),
            portability: find(&["portability"]),
            environment: find(&["environment"]),
            audio_quality: find(&["audio_quality"]),
            stabilization: find(&["stabilization"]),
            experience: find(&["experience"]),
            best_for: find(&["best_for"]),
            components: find(&["components"]),
        }
    }
}

/// A single CSV row with its resolved columns.
struct Row<'a> {
    /// Raw record.
    record: &'a StringRecord,
    /// Column positions.
    columns: &'a Columns,
    /// 1-based line number for diagnostics.
    line: u64,
}

impl Row<'_> {
    /// Trimmed value of a column, empty when the column or cell is missing.
    fn get(&self, column: Option<usize>) -> &str {
        column
            .and_then(|idx| self.record.get(idx))
            .map_or("", str::trim)
    }

    /// Non-negative integer value; floats are truncated, anything else becomes 0.
    fn integer(&self, column: Option<usize>, field: &str) -> i64 {
        let raw = self.get(column);
        if raw.is_empty() {
            return 0;
        }
        let value = match raw.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64),
        };
        match value {
            Some(value) if value >= 0 => value,
            Some(_) => {
                warn!(line = self.line, field, value = raw, "negative value, using 0");
                0
            }
            None => {
                warn!(line = self.line, field, value = raw, "not a number, using 0");
                0
            }
        }
    }

    /// Float value; anything unparsable becomes 0.0.
    fn float(&self, column: Option<usize>, field: &str) -> f64 {
        let raw = self.get(column);
        if raw.is_empty() {
            return 0.0;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                warn!(line = self.line, field, value = raw, "not a number, using 0.0");
                0.0
            }
        }
    }

    /// Parsed value of a band-like column, or the type's default.
    fn level<T>(&self, column: Option<usize>, field: &str) -> T
    where
        T: FromStr + Default,
    {
        let raw = self.get(column);
        if raw.is_empty() {
            return T::default();
        }
        raw.parse().unwrap_or_else(|_| {
            warn!(line = self.line, field, value = raw, "unknown level, using default");
            T::default()
        })
    }

    /// Splits a list column on a separator, dropping empty parts.
    fn list(&self, column: Option<usize>, separator: char) -> Vec<&str> {
        self.get(column)
            .split(separator)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }

    /// Builds a kit from the row. `name` must already be validated.
    fn to_kit(&self, name: &str) -> EquipmentKit {
        let c = self.columns;
        let category = self.get(c.category);
        let image = self.get(c.image);
        EquipmentKit {
            name: name.to_string(),
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            price: self.integer(c.price, "price"),
            stock: self.integer(c.stock, "stock"),
            rating: self.float(c.rating, "rating"),
            description: self.get(c.description).to_string(),
            requirements: self.get(c.requirements).to_string(),
            environment: normalize_tags(self.list(c.environment, TAG_SEPARATOR)),
            best_for: normalize_tags(self.list(c.best_for, TAG_SEPARATOR)),
            price_band: self.level::<Band>(c.price_band, "price_band"),
            portability: self.level::<Band>(c.portability, "portability"),
            audio_quality: self.level::<Band>(c.audio_quality, "audio_quality"),
            stabilization: self.level::<Band>(c.stabilization, "stabilization"),
            experience: self.level::<Expertise>(c.experience, "experience"),
            components: self
                .list(c.components, COMPONENT_SEPARATOR)
                .into_iter()
                .map(String::from)
                .collect(),
            image: (!image.is_empty()).then(|| image.to_string()),
        }
    }
}

/// Reads a catalog from CSV data. `origin` names the source in errors and logs.
pub fn read_csv<R: Read>(reader: R, origin: &str) -> Result<LoadedCatalog, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::read(origin, &e))?
        .clone();
    let columns = Columns::from_headers(&headers);
    if columns.name.is_none() {
        return Err(CatalogError::MissingNameColumn {
            origin: origin.to_string(),
        });
    }

    let mut kits = Vec::new();
    let mut report = LoadReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for result in reader.records() {
        let record = result.map_err(|e| CatalogError::read(origin, &e))?;
        let row = Row {
            record: &record,
            columns: &columns,
            line: record.position().map_or(0, |p| p.line()),
        };

        let name = row.get(columns.name);
        if name.is_empty() {
            warn!(origin, line = row.line, "skipping row without a name");
            report.skipped += 1;
            continue;
        }
        if !seen.insert(name.to_lowercase()) {
            warn!(origin, line = row.line, name, "skipping duplicate kit");
            report.skipped += 1;
            continue;
        }

        kits.push(row.to_kit(name));
        report.added += 1;
    }

    if kits.is_empty() {
        return Err(CatalogError::Empty {
            origin: origin.to_string(),
        });
    }

    debug!(origin, added = report.added, skipped = report.skipped, "catalog loaded");
    Ok(LoadedCatalog { kits, report })
}

/// Reads a catalog from a CSV file.
pub fn read_csv_path(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| CatalogError::Read {
        origin: origin.clone(),
        message: e.to_string(),
    })?;
    read_csv(file, &origin)
}

/// Catalog provider backed by a CSV file, re-read on every call.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    /// CSV file path.
    path: PathBuf,
}

impl CsvCatalog {
    /// Creates a provider for a CSV file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the CSV path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, keeping the ingestion counts.
    pub fn load(&self) -> Result<LoadedCatalog, CatalogError> {
        read_csv_path(&self.path)
    }
}

impl CatalogProvider for CsvCatalog {
    fn list_items(&self) -> Result<Vec<EquipmentKit>, CatalogError> {
        self.load().map(|loaded| loaded.kits)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
