use anyhow::Result;
use clap::Parser;

use crate::aws::client::{AwsClientFactory, ClientFactory};
use crate::cli_helpers::*;
use crate::preflight::{
    check_limits, print_limits, print_regions, print_streams, print_target, stream_names,
};

mod aws;
mod cli_helpers;
mod credentials;
mod preflight;
mod region;
mod settings;
mod sink;

#[tokio::main]
async fn main() -> Result<()> {
    reset_signal_pipe_handler()?;
    set_log_level();

    let opt = Opt::parse();

    if opt.list_regions {
        print_regions();
        return Ok(());
    }

    let credentials = credentials_source(&opt)?;
    let settings = client_settings(&opt);

    print_runtime(&opt);

    let factory = AwsClientFactory::default();

    let client = factory
        .create_client(&credentials, Some(settings), &opt.region)
        .await?;

    if opt.check {
        let report = check_limits(&client).await?;
        print_limits(&report, opt.no_color);
    }

    if opt.list_streams {
        let names = stream_names(&client).await?;
        print_streams(&names, opt.no_color);
    }

    if !opt.check && !opt.list_streams {
        let region = region::resolve(&opt.region)?;
        print_target(region, opt.endpoint_url.as_deref(), opt.no_color);
    }

    Ok(())
}
