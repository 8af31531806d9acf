// Friction module - surface conditions and their tyre-road friction coefficients
use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DRY_FRICTION, DRY_SURFACE, ICY_FRICTION, ICY_SURFACE, WET_FRICTION, WET_SURFACE,
};
use crate::error::{GeoSafeError, Result};

lazy_static! {
    static ref DEFAULT_TABLE: FrictionTable = FrictionTable::built_in();
}

/// Coefficient for `name` from the built-in table, dry if unrecognised.
pub fn coefficient_for(name: &str) -> f64 {
    DEFAULT_TABLE.coefficient_for(name)
}

/// Surface-condition name to friction coefficient (mu) lookup.
///
/// Names are stored lowercased. The "dry" entry is mandatory since it is
/// the fallback for names the table does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct FrictionTable {
    coefficients: BTreeMap<String, f64>,
    dry: f64,
}

impl FrictionTable {
    pub fn built_in() -> Self {
        let coefficients = BTreeMap::from([
            (DRY_SURFACE.to_string(), DRY_FRICTION),
            (WET_SURFACE.to_string(), WET_FRICTION),
            (ICY_SURFACE.to_string(), ICY_FRICTION),
        ]);
        Self {
            coefficients,
            dry: DRY_FRICTION,
        }
    }

    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut coefficients = BTreeMap::new();
        for (name, mu) in entries {
            let name = name.as_ref().trim().to_lowercase();
            if !(mu > 0.0 && mu <= 1.0) {
                return Err(GeoSafeError::InvalidFrictionTable(format!(
                    "coefficient for '{}' must be in (0, 1], got {}",
                    name, mu
                )));
            }
            coefficients.insert(name, mu);
        }

        if coefficients.is_empty() {
            return Err(GeoSafeError::InvalidFrictionTable("table is empty".to_string()));
        }
        let dry = *coefficients.get(DRY_SURFACE).ok_or_else(|| {
            GeoSafeError::InvalidFrictionTable(format!("missing '{}' entry", DRY_SURFACE))
        })?;

        Ok(Self { coefficients, dry })
    }

    pub fn coefficient_for(&self, name: &str) -> f64 {
        self.lookup(name).unwrap_or(self.dry)
    }

    /// Exact lookup without the dry fallback.
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.coefficients.get(&name.trim().to_lowercase()).copied()
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (&str, f64)> {
        self.coefficients.iter().map(|(name, mu)| (name.as_str(), *mu))
    }
}

impl Default for FrictionTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl TryFrom<BTreeMap<String, f64>> for FrictionTable {
    type Error = GeoSafeError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self> {
        FrictionTable::from_entries(map)
    }
}

impl From<FrictionTable> for BTreeMap<String, f64> {
    fn from(table: FrictionTable) -> Self {
        table.coefficients
    }
}

/// A named surface resolved against a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrictionProfile {
    pub surface: String,
    pub mu: f64,
    /// False when the name was unknown and the dry coefficient was used
    pub recognised: bool,
}

impl FrictionProfile {
    pub fn resolve(table: &FrictionTable, surface: &str) -> Self {
        let (mu, recognised) = match table.lookup(surface) {
            Some(mu) => (mu, true),
            None => (table.coefficient_for(surface), false),
        };
        Self {
            surface: surface.trim().to_lowercase(),
            mu,
            recognised,
        }
    }
}
