use std::sync::Arc;

use anyhow::Result;
use tojob_app::controller::HomeController;
use tojob_app::logging::{initialize, LogDestination};
use tojob_app::splash::{SplashController, SPLASH_DELAY};
use tojob_core::HomeUiState;
use tojob_engine::{
    AppConfigs, FakeJobsSource, FileAppConfigs, GraphqlJobsSource, JobsSource, QuerySettings,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Headless demo driver: searches typed on stdin are run through the full
/// controller/engine stack and the derived view is printed.
#[tokio::main]
async fn main() -> Result<()> {
    initialize(LogDestination::File);

    let config_dir = std::env::current_dir()?;
    let configs: Arc<dyn AppConfigs> = Arc::new(FileAppConfigs::open(&config_dir));
    let jobs: Arc<dyn JobsSource> = if std::env::var_os("TOJOB_FAKE_JOBS").is_some() {
        Arc::new(FakeJobsSource)
    } else {
        Arc::new(GraphqlJobsSource::new(QuerySettings::default())?)
    };

    let splash = SplashController::new(configs.clone());
    if splash.is_first_launch() {
        println!("Welcome to ToJob - find a job you love.");
        splash
            .set_first_launch_with_delay(SPLASH_DELAY, false)
            .await?;
    }

    let controller = HomeController::spawn(jobs, configs);
    let mut ui = controller.ui_state();

    println!("Type a job type to search (Ctrl-D to quit):");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let query = line.trim().to_string();
        if query.is_empty() {
            continue;
        }

        ui.mark_unchanged();
        controller.update_search_input(query.as_str());
        controller.search();

        // Wait for the fetch to settle, then show the result.
        let view = loop {
            ui.changed().await?;
            let view = ui.borrow_and_update().clone();
            if !view.is_loading() {
                break view;
            }
        };
        render(&view);
        controller.clear_error_messages();
    }

    Ok(())
}

fn render(view: &HomeUiState) {
    for error in view.error_messages() {
        println!("error: {}", error.message);
    }
    match view {
        HomeUiState::NoJobs(_) => println!("No jobs found."),
        HomeUiState::HasJobs(view) => {
            println!(
                "{} jobs across {} companies:",
                view.job_list.len(),
                view.job_list.company_count()
            );
            for job in view.job_list.jobs().iter().take(10) {
                match &job.company {
                    Some(company) => println!("  {} ({})", job.title, company.name),
                    None => println!("  {}", job.title),
                }
            }
            println!("selected: {}", view.selected_job.title);
        }
    }
    if !view.recent_search().is_empty() {
        println!("recent: {}", view.recent_search().entries().join(", "));
    }
}
