use std::time::Duration;

use anyhow::{anyhow, Result};
use aws_sdk_kinesis::meta::PKG_VERSION;
use clap::Parser;
use log::info;

use crate::credentials::CredentialsSource;
use crate::settings::{ClientSettings, DEFAULT_MAX_ATTEMPTS};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Builds a Kinesis client bound to one region and one credentials source, and optionally proves it can talk to the service"
)]
pub struct Opt {
    /// AWS Region
    #[arg(short, long, default_value = "us-east-1")]
    pub region: String,

    /// Named profile from the shared AWS config files
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Explicit access key ID. Requires --secret-access-key.
    #[arg(long)]
    pub access_key_id: Option<String>,

    /// Explicit secret access key. Requires --access-key-id.
    #[arg(long)]
    pub secret_access_key: Option<String>,

    /// Session token for temporary credentials
    #[arg(long)]
    pub session_token: Option<String>,

    /// Endpoint URL to use
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Maximum number of aws sdk attempts per request. Increase if you are seeing throttling errors.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// TCP connect timeout, eg. 3s or 500ms
    #[arg(long, value_parser = humantime::parse_duration)]
    pub connect_timeout: Option<Duration>,

    /// Overall timeout per operation, retries included. Eg. 30s.
    #[arg(long, value_parser = humantime::parse_duration)]
    pub operation_timeout: Option<Duration>,

    /// Call DescribeLimits with the new client to prove the credentials work
    #[arg(long)]
    pub check: bool,

    /// List the streams visible to the new client
    #[arg(long)]
    pub list_streams: bool,

    /// Print the known regions and exit
    #[arg(long)]
    pub list_regions: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Display additional information
    #[arg(short, long)]
    pub verbose: bool,
}

pub(crate) fn credentials_source(opt: &Opt) -> Result<CredentialsSource> {
    match (&opt.profile, &opt.access_key_id, &opt.secret_access_key) {
        (Some(profile), None, None) => Ok(CredentialsSource::Profile(profile.clone())),
        (None, Some(access_key_id), Some(secret_access_key)) => Ok(CredentialsSource::from_keys(
            access_key_id,
            secret_access_key,
            opt.session_token.clone(),
        )),
        (None, None, None) => Ok(CredentialsSource::DefaultChain),
        (Some(_), _, _) => Err(anyhow!("--profile cannot be combined with explicit keys")),
        _ => Err(anyhow!(
            "--access-key-id and --secret-access-key must be provided together"
        )),
    }
}

pub(crate) fn client_settings(opt: &Opt) -> ClientSettings {
    ClientSettings {
        max_attempts: opt.max_attempts,
        connect_timeout: opt.connect_timeout,
        operation_timeout: opt.operation_timeout,
        endpoint_url: opt.endpoint_url.clone(),
    }
}

pub(crate) fn set_log_level() {
    env_logger::init_from_env(
        env_logger::Env::default().default_filter_or("WARN,kinesis_dialr=INFO"),
    );
}

pub(crate) fn print_runtime(opt: &Opt) {
    if opt.verbose {
        info!("Kinesis client version: {}", PKG_VERSION);
        info!("Region:                 {}", opt.region);
        opt.endpoint_url.iter().for_each(|url| {
            info!("Endpoint url:           {}", url);
        });
        info!("Max attempts:           {}", opt.max_attempts);
    }
}

pub fn reset_signal_pipe_handler() -> Result<()> {
    // https://github.com/rust-lang/rust/issues/46016
    // Long story short: handle SIGPIPE (ie. broken pipe) on Unix systems gracefully.
    #[cfg(target_family = "unix")]
    {
        use nix::sys::signal;

        unsafe {
            signal::signal(signal::Signal::SIGPIPE, signal::SigHandler::SigDfl)?;
        }
    }

    Ok(())
}
