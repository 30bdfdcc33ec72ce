use std::sync::Arc;

use app_logging::{app_info, app_warn};
use tojob_core::{update, AppState, Effect, HomeUiState, Job, Msg};
use tojob_engine::{AppConfigs, JobsSource};
use tokio::sync::{mpsc, watch};

/// Handle to the Home state machine.
///
/// The state itself lives inside a spawned dispatch task; the handle only
/// enqueues intents and hands out read-only views. Collaborators are passed
/// in at construction, so wiring stays explicit.
pub struct HomeController {
    msg_tx: mpsc::UnboundedSender<Msg>,
    ui_rx: watch::Receiver<HomeUiState>,
}

impl HomeController {
    pub fn spawn(jobs: Arc<dyn JobsSource>, configs: Arc<dyn AppConfigs>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let state = AppState::new();
        let (ui_tx, ui_rx) = watch::channel(state.view());

        tokio::spawn(dispatch_loop(
            state,
            msg_rx,
            msg_tx.clone(),
            ui_tx,
            jobs,
            configs,
        ));

        Self { msg_tx, ui_rx }
    }

    /// Continuously updated view of the derived UI state.
    pub fn ui_state(&self) -> watch::Receiver<HomeUiState> {
        self.ui_rx.clone()
    }

    /// Notify that the user updated the search query.
    pub fn update_search_input(&self, text: impl Into<String>) {
        self.send(Msg::InputChanged(text.into()));
    }

    /// Search the current input as a job type and refresh the job list.
    pub fn search(&self) {
        self.send(Msg::SearchSubmitted);
    }

    /// Notify that the user clicked a job in the result list.
    pub fn select_job(&self, job: Job) {
        self.send(Msg::JobSelected(job));
    }

    /// Notify that the user navigated back from the job detail.
    pub fn interacted_with_job(&self) {
        self.send(Msg::JobInteracted);
    }

    /// Notify that the user navigated back from the result list.
    pub fn interacted_with_job_list(&self) {
        self.send(Msg::JobListDismissed);
    }

    /// Notify that the user acknowledged the error dialog.
    pub fn clear_error_messages(&self) {
        self.send(Msg::ErrorsDismissed);
    }

    fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_err() {
            app_warn!("Home dispatch task is gone; dropping intent");
        }
    }
}

async fn dispatch_loop(
    mut state: AppState,
    mut msg_rx: mpsc::UnboundedReceiver<Msg>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    ui_tx: watch::Sender<HomeUiState>,
    jobs: Arc<dyn JobsSource>,
    configs: Arc<dyn AppConfigs>,
) {
    let mut recent_rx = configs.recent_search();
    // The value the store loaded at open time counts as a change too, so a
    // history persisted in an earlier session reaches the view.
    recent_rx.mark_changed();
    let mut store_open = true;

    loop {
        let msg = tokio::select! {
            maybe = msg_rx.recv() => match maybe {
                Some(msg) => msg,
                // All handles dropped; the controller's scope ended.
                None => break,
            },
            changed = recent_rx.changed(), if store_open => match changed {
                Ok(()) => Msg::RecentSearchChanged(recent_rx.borrow_and_update().clone()),
                Err(_) => {
                    store_open = false;
                    continue;
                }
            },
        };

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;

        for effect in effects {
            run_effect(effect, &jobs, &configs, &msg_tx);
        }

        if state.consume_dirty() {
            ui_tx.send_replace(state.view());
        }
    }
}

fn run_effect(
    effect: Effect,
    jobs: &Arc<dyn JobsSource>,
    configs: &Arc<dyn AppConfigs>,
    msg_tx: &mpsc::UnboundedSender<Msg>,
) {
    match effect {
        Effect::FetchJobs { seq, job_type } => {
            app_info!("FetchJobs seq={} type={}", seq, job_type);
            let jobs = jobs.clone();
            let msg_tx = msg_tx.clone();
            // The fetch runs detached; completion re-enters via the message
            // channel carrying its stamp.
            tokio::spawn(async move {
                let result = jobs.jobs_by_type(&job_type).await.map_err(|err| {
                    app_warn!("Jobs query failed: {}", err);
                    err.to_string()
                });
                let _ = msg_tx.send(Msg::JobsLoaded {
                    seq,
                    query: job_type,
                    result,
                });
            });
        }
        Effect::PersistRecentSearch(recent_search) => {
            configs.update_recent_search(&recent_search);
        }
    }
}
