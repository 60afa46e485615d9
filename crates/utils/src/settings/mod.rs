use crate::{
  error::ScribeResult,
  settings::structs::{Settings, SettingsOpt},
};
use deser_hjson::from_str;
use merge::Merge;
use std::{env, fs, sync::LazyLock};

pub mod structs;

static CONFIG_FILE: &str = "config/config.hjson";

#[allow(clippy::expect_used)]
pub static SETTINGS: LazyLock<Settings> =
  LazyLock::new(|| Settings::init().expect("Failed to load settings file"));

impl Settings {
  /// Reads config from the file and the environment.
  ///
  /// Defaults are used for everything else; the config file is optional, and
  /// environment variables (prefixed with SCRIBE_) override it. The env var
  /// `SCRIBE_DATABASE_URL` is additionally accepted for the connection string.
  fn init() -> ScribeResult<Self> {
    let mut layered = envy::prefixed("SCRIBE_").from_env::<SettingsOpt>()?;

    if let Ok(config_file) = fs::read_to_string(Self::get_config_location()) {
      layered.merge(from_str::<SettingsOpt>(&config_file)?);
    }

    let mut settings = Settings::default();
    settings.apply(layered);

    if let Ok(url) = env::var("SCRIBE_DATABASE_URL") {
      settings.database.connection = url;
    }

    Ok(settings)
  }

  pub fn get_database_url(&self) -> String {
    self.database.connection.clone()
  }

  pub fn get_config_location() -> String {
    env::var("SCRIBE_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string())
  }
}
