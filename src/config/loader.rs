//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading per-company
//! rate configurations from YAML files.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateConfiguration;

/// One rate set, effective from a given date until superseded.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSet {
    /// The date these rates take effect.
    pub effective_date: NaiveDate,
    /// The configuration effective from that date.
    #[serde(flatten)]
    pub configuration: RateConfiguration,
}

/// Per-company rates file structure.
#[derive(Debug, Clone, Deserialize)]
struct CompanyRatesFile {
    /// The company these rates belong to.
    company_id: String,
    /// Rate sets, any order; sorted by effective date after loading.
    rate_sets: Vec<RateSet>,
}

/// Loads and provides access to company rate configurations.
///
/// # Directory Structure
///
/// The configuration directory holds one YAML file per company:
/// ```text
/// config/rates/
/// ├── acme.yaml
/// └── globex.yaml
/// ```
///
/// Each file carries a `company_id` and a list of `rate_sets`, each with an
/// `effective_date` and the full [`RateConfiguration`] fields. Every set is
/// validated at load time.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/rates")?;
/// let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
/// let rates = loader.rate_configuration("acme", date)?;
/// println!("overtime multiplier: {}", rates.overtime_rate);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    companies: HashMap<String, Vec<RateSet>>,
}

impl ConfigLoader {
    /// Loads all company rate files from the specified directory.
    ///
    /// Returns an error if the directory is missing, any file contains
    /// invalid YAML, or any rate set fails range validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let entries = fs::read_dir(path).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut companies = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            let file_path = entry.path();
            if file_path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }

            let contents =
                fs::read_to_string(&file_path).map_err(|e| EngineError::ConfigParseError {
                    path: file_path.display().to_string(),
                    message: e.to_string(),
                })?;
            let file: CompanyRatesFile =
                serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
                    path: file_path.display().to_string(),
                    message: e.to_string(),
                })?;

            for set in &file.rate_sets {
                set.configuration
                    .validate()
                    .map_err(|e| EngineError::ConfigParseError {
                        path: file_path.display().to_string(),
                        message: e.to_string(),
                    })?;
            }

            let mut sets = file.rate_sets;
            sets.sort_by_key(|s| s.effective_date);
            companies.insert(file.company_id, sets);
        }

        Ok(Self { companies })
    }

    /// Builds a loader from in-memory rate sets, for callers and tests that
    /// do not read from disk.
    ///
    /// Rate sets are validated the same way file loading validates them.
    pub fn from_rate_sets(
        company_id: impl Into<String>,
        rate_sets: Vec<RateSet>,
    ) -> EngineResult<Self> {
        let company_id = company_id.into();
        for set in &rate_sets {
            set.configuration.validate()?;
        }
        let mut sets = rate_sets;
        sets.sort_by_key(|s| s.effective_date);

        let mut companies = HashMap::new();
        companies.insert(company_id, sets);
        Ok(Self { companies })
    }

    /// Returns the rate configuration for a company that is effective on the
    /// given date (the latest set whose `effective_date` is on or before it).
    pub fn rate_configuration(
        &self,
        company_id: &str,
        date: NaiveDate,
    ) -> EngineResult<&RateConfiguration> {
        self.companies
            .get(company_id)
            .and_then(|sets| {
                sets.iter()
                    .rev()
                    .find(|s| s.effective_date <= date)
                    .map(|s| &s.configuration)
            })
            .ok_or_else(|| EngineError::ConfigurationMissing {
                company_id: company_id.to_string(),
                date,
            })
    }

    /// Returns the company IDs with loaded rates.
    pub fn company_ids(&self) -> Vec<&str> {
        self.companies.keys().map(String::as_str).collect()
    }
}
