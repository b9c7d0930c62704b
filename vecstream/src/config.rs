//! Configuration of pipeline logging.
//!
//! Logging is off by default. It can be turned on through the environment, with
//! `VECSTREAM_LOG=1` and optionally `VECSTREAM_LOG_CAPACITY=NUM`, or from command line
//! arguments with `--log` and `--log-capacity NUM`. Arguments take precedence.

use std::rc::Rc;

use vecstream_logging::{BufferingLogger, LoggerBatch, DEFAULT_CAPACITY};

use crate::logging::{CollectionEvent, CollectionLogger, StreamSetup};

/// Environment variable enabling event logging, unless set to `0` or `false`.
pub const LOG_VAR: &str = "VECSTREAM_LOG";
/// Environment variable setting the number of events buffered before they are written.
pub const LOG_CAPACITY_VAR: &str = "VECSTREAM_LOG_CAPACITY";

/// Logging configuration for stream pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Record pipeline events.
    pub log_events: bool,
    /// Number of events buffered before a batch is written.
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_events: false,
            log_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// A configuration that records events with the default capacity.
    pub fn logged() -> Self {
        Config { log_events: true, ..Default::default() }
    }

    /// Reads the configuration from `VECSTREAM_LOG` and `VECSTREAM_LOG_CAPACITY`.
    ///
    /// Unset variables, and capacities that do not parse, leave the defaults in place.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let mut config = Config::default();
        if let Some(value) = var(LOG_VAR) {
            config.log_events = !matches!(value.trim(), "" | "0" | "false");
        }
        if let Some(capacity) = var(LOG_CAPACITY_VAR).and_then(|x| x.trim().parse().ok()) {
            config.log_capacity = capacity;
        }
        config
    }

    /// Registers the options understood by [`Config::apply_matches`].
    #[cfg(feature = "getopts")]
    pub fn install_options(opts: &mut getopts::Options) {
        opts.optflag("", "log", "record pipeline events to stderr");
        opts.optopt("", "log-capacity", "number of events buffered before writing", "NUM");
    }

    /// Overrides `self` with the options present in `matches`.
    #[cfg(feature = "getopts")]
    pub fn apply_matches(mut self, matches: &getopts::Matches) -> Result<Config, String> {
        if matches.opt_present("log") {
            self.log_events = true;
        }
        self.log_capacity = matches.opt_get_default("log-capacity", self.log_capacity).map_err(|e| e.to_string())?;
        Ok(self)
    }

    /// Constructs a configuration from the environment, overridden by `args`.
    ///
    /// Most commonly, this uses `std::env::args()` as the supplied iterator.
    #[cfg(feature = "getopts")]
    pub fn from_args<I: Iterator<Item=String>>(args: I) -> Result<Config, String> {
        let mut opts = getopts::Options::new();
        Self::install_options(&mut opts);
        let matches = opts.parse(args).map_err(|e| e.to_string())?;
        Self::from_env().apply_matches(&matches)
    }

    /// Builds a logger writing the events of pipeline `pipeline` to stderr, or `None` if
    /// logging is off.
    pub fn logger(&self, pipeline: usize) -> Option<CollectionLogger> {
        if !self.log_events {
            return None;
        }
        let action: Box<dyn FnMut(LoggerBatch<StreamSetup, CollectionEvent>)> = Box::new(|batch| {
            if let LoggerBatch::Logs(records) = batch {
                for (time, setup, event) in records {
                    eprintln!("{:?}\tpipeline {}\t{:?}", time, setup.pipeline, event);
                }
            }
        });
        Some(Rc::new(BufferingLogger::with_capacity(StreamSetup { pipeline }, self.log_capacity, action)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, LOG_CAPACITY_VAR, LOG_VAR};

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| pairs.iter().find(|(key, _)| *key == name).map(|(_, value)| value.to_string())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(Config::from_vars(vars(&[])), Config::default());
        assert!(Config::default().logger(0).is_none());
    }

    #[test]
    fn variables_enable_logging() {
        let config = Config::from_vars(vars(&[(LOG_VAR, "1"), (LOG_CAPACITY_VAR, "16")]));
        assert_eq!(config, Config { log_capacity: 16, ..Config::logged() });
        assert!(config.logger(3).is_some());

        assert!(!Config::from_vars(vars(&[(LOG_VAR, "false")])).log_events);
        assert_eq!(Config::from_vars(vars(&[(LOG_CAPACITY_VAR, "lots")])).log_capacity, Config::default().log_capacity);
    }

    #[cfg(feature = "getopts")]
    #[test]
    fn arguments_override() {
        let mut opts = getopts::Options::new();
        Config::install_options(&mut opts);
        let matches = opts.parse(["--log", "--log-capacity", "8", "free"]).unwrap();
        let config = Config::default().apply_matches(&matches).unwrap();
        assert_eq!(config, Config { log_events: true, log_capacity: 8 });
        assert_eq!(matches.free, vec!["free".to_owned()]);

        let matches = opts.parse(["--log-capacity", "eight"]).unwrap();
        assert!(Config::default().apply_matches(&matches).is_err());
    }

    #[cfg(feature = "getopts")]
    #[test]
    fn from_args_overrides_environment() {
        let args = |list: &[&str]| list.iter().map(|x| x.to_string()).collect::<Vec<_>>().into_iter();
        let config = Config::from_args(args(&["prog", "--log-capacity", "8"])).unwrap();
        assert_eq!(config.log_capacity, 8);
        assert_eq!(config.log_events, Config::from_env().log_events);

        assert!(Config::from_args(args(&["prog", "--log"])).unwrap().log_events);
        assert!(Config::from_args(args(&["prog", "--log-capacity", "eight"])).is_err());
        assert!(Config::from_args(args(&["--unknown"])).is_err());
    }
}
