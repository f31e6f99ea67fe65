use anyhow::Result;
use carbonintensity_api::RenderedRequest;
use clap::Args;

use super::CallArgs;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub call: CallArgs,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let request = RenderedRequest::new(args.call.operation, &args.call.param_refs())?;
    println!("{} {}", request.method, request.path);
    Ok(())
}
