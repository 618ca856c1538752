//! Application configuration. Scenario source, label locale, report output.

use crate::domain::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON scenario to replay. Read from GRADEBOOK_SCENARIO_PATH.
    /// Unset = built-in reference scenario.
    #[serde(default)]
    pub scenario_path: Option<String>,

    /// Label set for renderings (`ru` or `en`). Read from GRADEBOOK_LOCALE.
    #[serde(default)]
    pub locale: Option<Locale>,

    /// Where to write the CSV grade sheet. Read from GRADEBOOK_CSV_PATH; unset = no sheet.
    #[serde(default)]
    pub csv_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("GRADEBOOK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // environment overrides the file
        c = c.add_source(config::Environment::with_prefix("GRADEBOOK"));
        c.build()?.try_deserialize()
    }

    /// Returns the configured locale. Defaults to `Locale::Ru` (reference labels).
    pub fn locale_or_default(&self) -> Locale {
        self.locale.unwrap_or_default()
    }
}
