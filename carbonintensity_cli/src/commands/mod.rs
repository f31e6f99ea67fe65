//! CLI subcommand implementations.

pub mod endpoints;
pub mod get;
pub mod render;

use carbonintensity_api::Operation;
use clap::Args;

/// An operation name followed by its path parameters, in template order.
#[derive(Args)]
pub struct CallArgs {
    /// Operation name, e.g. intensity-between (see `endpoints`)
    pub operation: Operation,

    /// Path parameters in template order (dates, period, postcode, region id, block)
    pub params: Vec<String>,
}

impl CallArgs {
    pub fn param_refs(&self) -> Vec<&str> {
        self.params.iter().map(String::as_str).collect()
    }
}
