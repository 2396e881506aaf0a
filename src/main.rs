mod cli;

use anyhow::Context;
use cli::Args;
use compliance_scan::adapters::outbound::filesystem::FileSystemCatalogueReader;
use compliance_scan::adapters::outbound::network::HttpScanExecutor;
use compliance_scan::application::dto::OutputFormat;
use compliance_scan::application::factories::{
    ExecutorType, FormatterFactory, ReporterFactory, ScanExecutorFactory,
};
use compliance_scan::application::read_models::{DashboardReadModel, DashboardReadModelBuilder};
use compliance_scan::application::use_cases::{ScanOrchestrator, SlotPolicy, ViewStateController};
use compliance_scan::compliance::domain::{ComplianceCatalogue, ItemId};
use compliance_scan::config::{self, ConfigFile, ExecutorConfig};
use compliance_scan::ports::outbound::{CatalogueSource, ScanExecutor, ScanReporter};
use compliance_scan::shared::{ComplianceError, ExitCode, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // clap exits with code 2 on its own for invalid arguments
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Settings for one run, CLI flags layered over the config file
struct RunSettings {
    catalogue: PathBuf,
    format: OutputFormat,
    slot_policy: SlotPolicy,
    scan_timeout: Option<Duration>,
    executor: Option<ExecutorType>,
}

impl RunSettings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let catalogue = args.catalogue.clone().or(config.catalogue).context(
            "No catalogue given\n\n💡 Hint: Pass --catalogue <FILE> or set 'catalogue' in compliance-scan.config.yml",
        )?;

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let slot_policy = if args.per_item {
            SlotPolicy::PerItem
        } else {
            config.slot_policy.unwrap_or_default()
        };

        let scan_timeout = match args.timeout.or(config.scan_timeout_secs) {
            Some(secs) if secs.is_finite() && secs > 0.0 => Some(Duration::from_secs_f64(secs)),
            Some(secs) => anyhow::bail!(
                "Invalid scan timeout: {}. The timeout must be a positive number of seconds",
                secs
            ),
            None => None,
        };

        let executor = config.executor.map(|executor| match executor {
            ExecutorConfig::Http {
                base_url,
                request_timeout_secs,
            } => ExecutorType::Http {
                base_url,
                request_timeout: request_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(HttpScanExecutor::DEFAULT_REQUEST_TIMEOUT),
            },
            ExecutorConfig::Command { program, args } => ExecutorType::Command { program, args },
        });

        Ok(Self {
            catalogue,
            format,
            slot_policy,
            scan_timeout,
            executor,
        })
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            config::discover_config(&cwd)?.unwrap_or_default()
        }
    };
    let view_mode = args.view.or(config.view_mode).unwrap_or_default();
    let settings = RunSettings::resolve(&args, config)?;

    // Create adapters (Dependency Injection)
    let catalogue_reader = FileSystemCatalogueReader::new(&settings.catalogue);
    let catalogue = ComplianceCatalogue::from_items(catalogue_reader.load_items()?)
        .with_context(|| format!("Invalid catalogue: {}", settings.catalogue.display()))?;
    tracing::info!(items = catalogue.len(), "catalogue ready");

    let scan_ids = parse_scan_ids(&args.scan)?;
    let (items, scan_error) = if scan_ids.is_empty() {
        (catalogue.list(), None)
    } else {
        let executor_type = settings.executor.clone().context(
            "No scanner configured\n\n💡 Hint: Add an 'executor' section to compliance-scan.config.yml",
        )?;
        let executor = ScanExecutorFactory::create(executor_type)?;
        let reporter = ReporterFactory::create(
            args.quiet,
            !args.no_color && std::io::stderr().is_terminal(),
        );

        let mut orchestrator =
            ScanOrchestrator::new(catalogue, executor, reporter).with_slot_policy(settings.slot_policy);
        if let Some(timeout) = settings.scan_timeout {
            orchestrator = orchestrator.with_scan_timeout(timeout);
        }

        let scan_error = run_scans(&orchestrator, &scan_ids).await;
        (orchestrator.list(), scan_error)
    };

    let mut view = ViewStateController::new();
    view.set_view_mode(view_mode);
    if args.expand_all {
        view.expand_all(&items);
    }
    for name in &args.expand {
        view.toggle_expanded(name, &items)?;
    }

    let model = DashboardReadModelBuilder::build(&items, &[], &view);
    let formatter = FormatterFactory::create(
        settings.format,
        !args.no_color && std::io::stdout().is_terminal(),
    );
    let output = formatter.format(&model)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    if let Some(error) = scan_error {
        return Err(error.into());
    }
    Ok(exit_code_for(&model, args.fail_on_critical))
}

fn parse_scan_ids(raw: &[String]) -> Result<Vec<ItemId>> {
    let mut ids: Vec<ItemId> = Vec::with_capacity(raw.len());
    for value in raw {
        let id = ItemId::new(value.as_str())?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Runs the requested scans and returns the first error, if any.
///
/// Under the single-slot policy scans run one after another; otherwise they
/// are requested together.
async fn run_scans<E, R>(
    orchestrator: &ScanOrchestrator<E, R>,
    ids: &[ItemId],
) -> Option<ComplianceError>
where
    E: ScanExecutor,
    R: ScanReporter,
{
    let mut results = Vec::with_capacity(ids.len());
    match orchestrator.slot_policy() {
        SlotPolicy::Single => {
            for id in ids {
                results.push(orchestrator.request_scan(id).await);
            }
        }
        SlotPolicy::PerItem => {
            results.extend(
                orchestrator
                    .request_scans(ids)
                    .await
                    .into_iter()
                    .map(|(_, result)| result),
            );
        }
    }
    results.into_iter().find_map(|result| result.err())
}

fn exit_code_for(model: &DashboardReadModel, fail_on_critical: bool) -> ExitCode {
    if fail_on_critical && model.summary.has_critical() {
        ExitCode::CriticalItemsDetected
    } else {
        ExitCode::Success
    }
}
