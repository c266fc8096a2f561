//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Decoding of provider payloads into domain records
//! - Hourly / daily bucketing of a forecast series
//! - "Now"-relative date labels, wind and icon presentation
//! - Daylight window classification and persisted settings
//! - Provider request URLs built from those settings
//!
//! Nothing here performs network I/O; callers hand in already fetched
//! payloads. It is used by `forecast-cli`, but can also be reused by other
//! front-ends.

pub mod bucket;
pub mod codec;
pub mod config;
pub mod daylight;
pub mod error;
pub mod labels;
pub mod model;
pub mod presentation;
pub mod request;

pub use bucket::{BucketConfig, bucket};
pub use config::Config;
pub use daylight::DaylightWindow;
pub use error::ProviderError;
pub use labels::Labels;
pub use model::{CurrentConditions, ForecastBundle, ForecastPoint, UnitSystem, WindBearing};
pub use presentation::CanonicalIcon;
pub use request::Endpoint;
