mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod scan;
mod shared;

use adapters::outbound::aws::{AwsCliClient, AwsCliConfig};
use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::CsvReportSink;
use application::dto::ScanRequest;
use application::use_cases::ScanSecurityGroupsUseCase;
use cli::{resolve_settings, Args};
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments and merge in the config file
    let args = Args::parse_args();
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = resolve_settings(args, config)?;

    // Create adapters (Dependency Injection)
    let aws = AwsCliClient::new(AwsCliConfig {
        bin: settings.aws_bin.clone(),
        profile: settings.profile.clone(),
        timeout: settings.timeout,
    });
    let report_sink = CsvReportSink::new(settings.output.clone());
    let progress_reporter = StderrProgressReporter::with_quiet(settings.quiet);

    // Create use case with injected dependencies; the same CLI client
    // serves both provider ports
    let use_case = ScanSecurityGroupsUseCase::new(aws.clone(), aws, report_sink, progress_reporter);

    let request = ScanRequest::new(
        settings.port,
        settings.protocol,
        settings.fresh,
        settings.concurrency,
    );
    use_case.execute(request).await?;

    Ok(())
}
