//! Async client for the GB Carbon Intensity API (`api.carbonintensity.org.uk`).
//!
//! Each API operation is a row in a static catalog ([`endpoint::ENDPOINTS`]).
//! The [`Client`] renders an operation's path from caller-supplied values and
//! returns the decoded JSON payload or a classified [`Error`].
//!
//! ```no_run
//! # async fn run() -> Result<(), carbonintensity_api::Error> {
//! use carbonintensity_api::{Client, Operation};
//!
//! let client = Client::new()?;
//! let now = client.get_current_intensity().await?;
//! let window = client
//!     .call(Operation::RegionalBetweenPostcode, &["2023-01-01T00:00Z", "2023-01-02T00:00Z", "SW1A"])
//!     .await?;
//! # let _ = (now, window);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
pub mod endpoint;
mod errors;
pub mod path;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::endpoint::{Endpoint, Method, Operation, ParamKind, Segment};
pub use self::errors::{Error, ErrorKind};
pub use self::path::RenderedRequest;
