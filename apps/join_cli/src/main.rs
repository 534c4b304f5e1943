use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use shared::domain::check_email_input;
use tracing_subscriber::EnvFilter;
use waitlist_core::{
    ClientContextProvider, ModalDescriptor, ProcessClientContext, StaticClientContext,
    StoreConfig, SubmitOutcome, WaitlistController, WaitlistService,
};

const APP_NAME: &str = "waitlist-join";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Add an email address to the Interview Lens waitlist")]
struct Args {
    #[arg(long)]
    email: String,
    /// Settings file with store_url / store_api_key (defaults to ./waitlist.toml).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Reported referrer; falls back to WAITLIST_REFERRER, then "direct".
    #[arg(long)]
    referrer: Option<String>,
    #[arg(long)]
    user_agent: Option<String>,
    /// Print the outcome and modal as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    email: &'a str,
    outcome: SubmitOutcome,
    modal: &'a ModalDescriptor,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let email = check_email_input(&args.email)
        .with_context(|| format!("--email '{}' was rejected", args.email))?
        .to_string();
    let store_config = StoreConfig::load(args.config.as_deref())
        .context("failed to load waitlist store configuration")?;

    let process = ProcessClientContext::new(APP_NAME, env!("CARGO_PKG_VERSION"));
    let context = StaticClientContext::new(
        args.user_agent.unwrap_or_else(|| process.user_agent()),
        args.referrer.or_else(|| process.referrer()),
    );
    let service = WaitlistService::from_config(&store_config, Arc::new(context));
    let mut controller = WaitlistController::new(service);

    controller.set_email_input(email.as_str());
    let Some(outcome) = controller.submit().await else {
        bail!("nothing was submitted for '{email}'");
    };

    let modal = &controller.state().modal;
    if args.json {
        let report = Report {
            email: &email,
            outcome,
            modal,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n{}", modal.title, modal.message);
    }

    Ok(match outcome {
        SubmitOutcome::Error => ExitCode::from(1),
        SubmitOutcome::Success | SubmitOutcome::Duplicate => ExitCode::SUCCESS,
    })
}
