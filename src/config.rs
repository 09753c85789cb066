//! Run configuration
//!
//! Every field has a default, so an empty or partial TOML file is valid.
//!
//! ```toml
//! [quote]
//! timeout_secs = 5
//!
//! [chart]
//! price_scale = 0.5
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{PricerError, PricerResult};
use crate::data::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::models::DEFAULT_RANGE;
use crate::report::DEFAULT_OFFSET;

/// Environment variable holding the Alpha Vantage key
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "BS_QUOTE_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub quote: QuoteConfig,
    pub defaults: InputDefaults,
    pub sweep: SweepConfig,
    pub payoff: PayoffConfig,
    pub chart: ChartConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> PricerResult<Self> {
        toml::from_str(text).map_err(|e| PricerError::config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> PricerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PricerError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Config from an explicit path, else `BS_QUOTE_CONFIG`, else defaults
    ///
    /// The API key from `ALPHAVANTAGE_API_KEY` fills `quote.api_key` when the
    /// file does not set one.
    pub fn load(path: Option<&Path>) -> PricerResult<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        let mut config = match path.map(Path::to_path_buf).or(env_path) {
            Some(p) => {
                tracing::info!("Loading config from {}", p.display());
                Self::from_file(p)?
            }
            None => Self::default(),
        };

        if config.quote.api_key.is_none() {
            config.quote.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }

        Ok(config)
    }
}

/// Quote endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub base_url: String,
    /// Request timeout in seconds, 0 means the default
    /// Default: 10
    pub timeout_secs: u64,
    /// Skips the API key prompt when set
    pub api_key: Option<String>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            api_key: None,
        }
    }
}

impl QuoteConfig {
    pub fn timeout(&self) -> Duration {
        match self.timeout_secs {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        }
    }
}

/// Fallbacks for the numeric prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    /// Default strike is spot plus this
    /// Default: 5.0
    pub strike_offset: f64,
    /// Default: 0.5 years
    pub time: f64,
    /// Default: 0.01
    pub rate: f64,
    /// Default: 0.2
    pub vol: f64,
    /// Used when the symbol prompt is left blank
    pub symbol: String,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            strike_offset: 5.0,
            time: 0.5,
            rate: 0.01,
            vol: 0.2,
            symbol: "AAPL".to_string(),
        }
    }
}

/// Strike sweep around spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Strikes from trunc(spot) - half_width to trunc(spot) + half_width
    /// Default: 20
    pub half_width: i64,
    /// Default: 5
    pub step: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            half_width: 20,
            step: 5,
        }
    }
}

/// Payoff window and signed chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffConfig {
    /// Spot window is strike ± range
    /// Default: 30
    pub range: i64,
    /// Zero column of the signed chart
    /// Default: 30
    pub offset: usize,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Magnitude chart scale factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Characters per unit of call or put price
    /// Default: 1.0
    pub price_scale: f64,
    /// Characters per unit of delta
    /// Default: 100.0
    pub delta_scale: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            price_scale: 1.0,
            delta_scale: 100.0,
        }
    }
}

/// Where files go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default: current directory
    pub dir: PathBuf,
    /// Also write payoff_diagram.svg
    /// Default: true
    pub svg: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            svg: true,
        }
    }
}

impl OutputConfig {
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.strike_offset, 5.0);
        assert_eq!(config.defaults.time, 0.5);
        assert_eq!(config.defaults.rate, 0.01);
        assert_eq!(config.defaults.vol, 0.2);
        assert_eq!(config.sweep.half_width, 20);
        assert_eq!(config.sweep.step, 5);
        assert_eq!(config.payoff.range, 30);
        assert_eq!(config.chart.delta_scale, 100.0);
        assert_eq!(config.quote.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [quote]
            timeout_secs = 3

            [chart]
            price_scale = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.quote.timeout_secs, 3);
        assert_eq!(config.quote.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.chart.price_scale, 0.5);
        assert_eq!(config.chart.delta_scale, 100.0);
        assert_eq!(config.payoff, PayoffConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = AppConfig::from_toml_str("[sweep]\nstep = \"five\"").unwrap_err();
        assert!(matches!(err, PricerError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bs-quote.toml");
        std::fs::write(&path, "[output]\nsvg = false\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(!config.output.svg);

        assert!(AppConfig::from_file(dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = AppConfig::from_toml_str("[quote]\ntimeout_secs = 0").unwrap();
        assert_eq!(config.quote.timeout(), DEFAULT_TIMEOUT);
    }

    // Only test that sets these variables
    #[test]
    fn test_load_from_env() {
        let dir = tempdir().unwrap();
        let env_file = dir.path().join("env.toml");
        let arg_file = dir.path().join("arg.toml");
        std::fs::write(&env_file, "[sweep]\nstep = 2\n").unwrap();
        std::fs::write(
            &arg_file,
            "[sweep]\nstep = 7\n[quote]\napi_key = \"from-file\"\n",
        )
        .unwrap();

        std::env::set_var(CONFIG_ENV, &env_file);
        std::env::set_var(API_KEY_ENV, "from-env");

        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.sweep.step, 2);
        assert_eq!(config.quote.api_key.as_deref(), Some("from-env"));

        // An explicit path wins over the variable, and a key in the file wins
        // over the key variable
        let config = AppConfig::load(Some(&arg_file)).unwrap();
        assert_eq!(config.sweep.step, 7);
        assert_eq!(config.quote.api_key.as_deref(), Some("from-file"));

        std::env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
        assert!(matches!(AppConfig::load(None), Err(PricerError::Config(_))));

        std::env::remove_var(CONFIG_ENV);
        std::env::set_var(API_KEY_ENV, "");
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.sweep, SweepConfig::default());
        assert_eq!(config.quote.api_key, None);

        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    fn test_output_path() {
        let out = OutputConfig {
            dir: PathBuf::from("/tmp/run"),
            svg: true,
        };
        assert_eq!(out.path("payoff_diagram.csv"), PathBuf::from("/tmp/run/payoff_diagram.csv"));
    }
}
