use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use typeref_search::{
    CollectingRequestor, SearchParticipant, SearchSettings, TypeReferencePattern, TypeReferenceResolver,
    config::{find_config_file, load_config_file},
    dump::{MatchReport, load_events, load_unit},
    search::replay,
};

/// Replay recorded visitor events and print type-reference matches as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "typeref-search", version, about)]
struct Args {
    /// JSON array of recorded visitor events.
    #[arg(long)]
    events: PathBuf,

    /// Source text of the compilation unit the events were recorded from.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Simple name of the searched type.
    #[arg(long)]
    name: String,

    /// Package qualification of the searched type.
    #[arg(long)]
    qualifier: Option<String>,

    #[arg(long)]
    case_sensitive: bool,

    #[arg(long)]
    camel_case: bool,

    /// Settings file; defaults to the nearest `typeref-search.toml`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(
    args: &Args,
    settings: &SearchSettings,
) {
    let directive = if args.verbose {
        "typeref_search=debug".to_string()
    } else {
        settings.logging.filter_directive()
    };

    let file_layer = args.log_file.as_ref().map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("typeref-search.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(&directive))
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(&directive));

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

fn load_settings(args: &Args) -> Result<SearchSettings, typeref_search::config::ConfigError> {
    let start = args.source.as_deref().unwrap_or(args.events.as_path());
    match args.config.clone().or_else(|| find_config_file(start)) {
        Some(path) => load_config_file(&path),
        None => Ok(SearchSettings::default()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };
    init_logging(&args, &settings);

    let unit = match args.source.as_deref().map(load_unit).transpose() {
        Ok(unit) => unit,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        },
    };
    let events = match load_events(&args.events, unit) {
        Ok(events) => events,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        },
    };

    let mut pattern =
        TypeReferencePattern::new(&args.name).case_sensitive(args.case_sensitive).camel_case(args.camel_case);
    if let Some(qualifier) = &args.qualifier {
        pattern = pattern.qualified(qualifier);
    }

    let mut resolver =
        TypeReferenceResolver::with_settings(&pattern, CollectingRequestor::new(), SearchParticipant::default(), settings);
    info!("Replaying {} events for '{}'", events.len(), resolver.target());
    replay(&mut resolver, &events);

    for search_match in resolver.requestor().matches() {
        match serde_json::to_string(&MatchReport::from_match(search_match)) {
            Ok(line) => println!("{line}"),
            Err(err) => error!("Failed to serialize match: {err}"),
        }
    }

    info!("{} matches", resolver.requestor().matches().len());
    ExitCode::SUCCESS
}
