use clap::Parser;
use timetable_validator::adapters::file::load_schedule;
use timetable_validator::config::{CheckArgs, Command, ServeArgs};
use timetable_validator::utils::error::ScheduleError;
use timetable_validator::utils::{logger, validation::Validate};
use timetable_validator::{app, CliConfig, LocalValidator, RemoteValidator, ScheduleValidator};

/// Exit code for a schedule that was checked and contains conflicts.
const EXIT_CONFLICTS: i32 = 4;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let outcome = match cli.command {
        Command::Serve(args) => run_serve(args).await,
        Command::Check(args) => run_check(args).await,
    };

    match outcome {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }
}

async fn run_serve(args: ServeArgs) -> Result<i32, ScheduleError> {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(args.verbose, None);
            return Err(e);
        }
    };

    if config.json_logs() {
        logger::init_json_logger(args.verbose, Some(&config.logging.level));
    } else {
        logger::init_cli_logger(args.verbose, Some(&config.logging.level));
    }

    tracing::info!("Starting timetable-validator server");
    tracing::debug!("Server config: {:?}", config);

    app::serve(config).await?;
    Ok(0)
}

async fn run_check(args: CheckArgs) -> Result<i32, ScheduleError> {
    logger::init_cli_logger(args.verbose, None);
    args.validate()?;

    let courses = load_schedule(&args.file)?;
    tracing::info!("📁 Loaded {} courses from {}", courses.len(), args.file.display());

    let validator: Box<dyn ScheduleValidator> = match &args.server {
        Some(url) => Box::new(RemoteValidator::new(url.clone())?),
        None => Box::new(LocalValidator::new()),
    };
    tracing::debug!("Using validator: {}", validator.name());

    let report = validator.validate(&courses).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_valid {
        tracing::info!("✅ No conflicts found");
        Ok(0)
    } else {
        tracing::warn!("⚠️ {} conflict(s) found", report.conflicts.len());
        Ok(EXIT_CONFLICTS)
    }
}
