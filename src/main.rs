use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use footage_uploader::api::v1::{self, AnalysisApiV1};
use footage_uploader::commands::files::{resolve_dropped_paths, resolve_local_file};
use footage_uploader::commands::session::{Session, Submission};
use footage_uploader::commands::{uploads, ConsoleNotifier};
use footage_uploader::error::{AppError, Result};
use footage_uploader::models::file::{DragEvent, PickerEvent};
use footage_uploader::models::settings::{AppSettings, SubmitTrigger};
use footage_uploader::models::upload::UploadOutcome;
use footage_uploader::services::file_intake::IntakeView;
use footage_uploader::services::upload_coordinator::{CoordinatorOptions, UploadCoordinator};
use footage_uploader::storage::settings;

#[derive(Parser)]
#[command(name = "footage-uploader", version, about = "Upload footage and start its analysis")]
struct Cli {
    /// Settings file (JSON).
    #[arg(
        long,
        global = true,
        env = "FOOTAGE_UPLOADER_CONFIG",
        default_value = "footage-uploader.json"
    )]
    config: PathBuf,

    /// Analysis service base URL; overrides the settings file.
    #[arg(long, global = true, env = "FOOTAGE_UPLOADER_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a file as the file picker would; submits unless the trigger is explicit.
    Pick { path: String },
    /// Drop files on the drop zone; only the first is considered, and only if it is a video.
    Drop {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Select a file and upload it right away.
    Upload { path: String },
    /// List files stored by the service.
    List,
    /// Delete a stored file.
    Delete { filename: String },
    /// Show analysis status for a stored file.
    Status { filename: String },
    /// Show analysis results for a stored file.
    Results { filename: String },
    /// Check whether the service is reachable.
    Health,
    /// Show or create the settings file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    Init,
}

type CliSession = Session<AnalysisApiV1, ConsoleNotifier>;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut app_settings = settings::get_settings(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        app_settings.base_url = base_url;
    }

    match cli.command {
        Command::Pick { path } => {
            let file = resolve_local_file(&path)?;
            let mut session = build_session(&app_settings, app_settings.submit_trigger)?;
            let submission = session.pick_files(PickerEvent { files: vec![file] });
            print_view(&session);
            finish(submission).await
        }
        Command::Drop { paths } => {
            let files = resolve_dropped_paths(&paths)?;
            let mut session = build_session(&app_settings, app_settings.submit_trigger)?;
            let mut event = DragEvent::new(files);
            session.drag_over(&mut event);
            let submission = session.drop_files(&mut event);
            if session.intake().selected().is_none() {
                println!("Dropped file is not a video; ignored");
                return Ok(());
            }
            print_view(&session);
            finish(submission).await
        }
        Command::Upload { path } => {
            let file = resolve_local_file(&path)?;
            let mut session = build_session(&app_settings, SubmitTrigger::Explicit)?;
            session.pick_files(PickerEvent { files: vec![file] });
            print_view(&session);
            finish(Some(session.upload_selected()?)).await
        }
        Command::List => {
            let api = AnalysisApiV1::new(&app_settings)?;
            for line in uploads::list_uploads(&api).await? {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Delete { filename } => {
            let api = AnalysisApiV1::new(&app_settings)?;
            println!("{}", uploads::delete_upload(&api, &filename).await?);
            Ok(())
        }
        Command::Status { filename } => {
            let api = AnalysisApiV1::new(&app_settings)?;
            println!("{}", uploads::analysis_status(&api, &filename).await?);
            Ok(())
        }
        Command::Results { filename } => {
            let api = AnalysisApiV1::new(&app_settings)?;
            println!("{}", uploads::analysis_results(&api, &filename).await?);
            Ok(())
        }
        Command::Health => {
            let healthy = v1::check_health(&app_settings.base_url).await;
            println!(
                "{} is {}",
                app_settings.base_url,
                if healthy { "healthy" } else { "unreachable" }
            );
            Ok(())
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&app_settings)?);
                Ok(())
            }
            ConfigAction::Init => {
                if cli.config.exists() {
                    return Err(AppError::Storage(format!(
                        "{} already exists",
                        cli.config.display()
                    )));
                }
                settings::save_settings(&cli.config, &AppSettings::default())?;
                println!("Wrote {}", cli.config.display());
                Ok(())
            }
        },
    }
}

fn build_session(app_settings: &AppSettings, trigger: SubmitTrigger) -> Result<CliSession> {
    let api = Arc::new(AnalysisApiV1::new(app_settings)?);
    let coordinator = UploadCoordinator::new(
        api,
        Arc::new(ConsoleNotifier),
        CoordinatorOptions::from(app_settings),
    );
    Ok(Session::new(coordinator, trigger))
}

fn print_view(session: &CliSession) {
    if let IntakeView::Selected { name, size_label } = session.view() {
        println!("{}  {}", name, size_label);
    }
}

/// Wait for a submission, if one was started, and report its outcome.
async fn finish(submission: Option<Submission>) -> Result<()> {
    let Some(handle) = submission else {
        println!("Selected; run `upload` to submit");
        return Ok(());
    };
    let report = handle
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;
    match report.outcome {
        UploadOutcome::Success(filename) => {
            println!("Stored as {}; analysis requested", filename);
            Ok(())
        }
        UploadOutcome::Failure(reason) => Err(AppError::Api(reason)),
    }
}
