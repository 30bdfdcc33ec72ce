use std::sync::Arc;
use std::time::Duration;

use tojob_engine::AppConfigs;
use tokio::sync::oneshot;

/// How long the splash screen is shown on a first launch.
pub const SPLASH_DELAY: Duration = Duration::from_secs(3);

/// Decides the initial screen and retires the splash after its delay.
pub struct SplashController {
    configs: Arc<dyn AppConfigs>,
}

impl SplashController {
    pub fn new(configs: Arc<dyn AppConfigs>) -> Self {
        Self { configs }
    }

    /// Current first-launch flag. A failed persisted read already defaulted
    /// to `true` at the store, so the splash is shown when in doubt.
    pub fn is_first_launch(&self) -> bool {
        *self.configs.is_first_launch().borrow()
    }

    /// After `delay`, persists the flag and resolves the returned signal so
    /// the navigation layer can leave the splash. The timer is
    /// fire-and-forget and not cancellable.
    pub fn set_first_launch_with_delay(
        &self,
        delay: Duration,
        first_launch: bool,
    ) -> oneshot::Receiver<()> {
        let (done_tx, done_rx) = oneshot::channel();
        let configs = self.configs.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            configs.set_first_launch(first_launch);
            let _ = done_tx.send(());
        });
        done_rx
    }
}
