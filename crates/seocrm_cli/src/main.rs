//! Interactive front end for the SEO content CRM.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the document.
//! - Run the project list screen and save once more on normal exit.
//! - Turn any error into a message and a non-zero exit code.

mod error;
mod prompt;
mod screens;

use error::{error_code, CliResult};
use log::{error, info};
use prompt::TerminalPrompt;
use screens::project_list::ProjectListScreen;
use seocrm_core::{current_month_labels, init_logging, CrmConfig, CrmContext, JsonFileStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = CrmConfig::rooted_at(&base);

    // Logging is diagnostics only; the session works without it.
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                "event=session_end module=cli status=error error_code={} error={}",
                error_code(&err),
                err
            );
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CrmConfig) -> CliResult<()> {
    let mut context = CrmContext::open(JsonFileStore::new(&config.data_file))?;
    info!(
        "event=session_start module=cli status=ok version={} projects={}",
        seocrm_core::core_version(),
        context.document().projects.len()
    );

    let mut prompt = TerminalPrompt::new();
    ProjectListScreen::new(&mut context, current_month_labels()).run(&mut prompt)?;

    context.close()?;
    info!("event=session_end module=cli status=ok");
    Ok(())
}
