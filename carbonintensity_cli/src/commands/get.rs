use std::process::ExitCode;

use anyhow::Result;
use carbonintensity_api::Client;
use clap::Args;

use super::CallArgs;
use crate::output::{print_error, print_payload};

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub call: CallArgs,

    /// Print the payload on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Prints the payload, or the error object on stderr. A failed call is
/// reported once, through the exit code, not as an `Err`.
pub async fn run(args: &GetArgs, client: &Client) -> Result<ExitCode> {
    match client
        .call(args.call.operation, &args.call.param_refs())
        .await
    {
        Ok(payload) => {
            print_payload(&payload, args.compact);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_error(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
