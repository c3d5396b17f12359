pub mod data_loader;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Tracks the tasks performing remote calls so they can be replaced or
/// cancelled on shutdown
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
    /// Earlier tasks under an id that were left running, not replaced
    superseded: Vec<JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            superseded: Vec::new(),
        }
    }

    /// Spawn a task for a remote call.
    ///
    /// With `replace`, a task still running under the same id is aborted
    /// first. Without it the earlier task is kept running to completion.
    pub fn spawn_task<F>(&mut self, task_id: String, replace: bool, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());
        self.superseded.retain(|handle| !handle.is_finished());

        if let Some(handle) = self.tasks.remove(&task_id) {
            if replace {
                tracing::debug!("Replacing running task {}", task_id);
                handle.abort();
            } else {
                tracing::debug!("Task {} still running, keeping it", task_id);
                self.superseded.push(handle);
            }
        }

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id, handle);
    }

    /// Cancel all running tasks (used on shutdown)
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
        for handle in self.superseded.drain(..) {
            handle.abort();
        }
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn same_id_replaces_running_task() {
        let mut manager = BackgroundTaskManager::new();
        let (first_tx, first_rx) = oneshot::channel::<()>();
        let (second_tx, second_rx) = oneshot::channel::<()>();

        manager.spawn_task("load_notes".to_string(), true, async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = first_tx.send(());
        });
        manager.spawn_task("load_notes".to_string(), true, async move {
            let _ = second_tx.send(());
        });

        assert!(second_rx.await.is_ok());
        // The aborted task dropped its sender without sending
        assert!(first_rx.await.is_err());
    }

    #[tokio::test]
    async fn writes_under_same_id_both_complete() {
        let mut manager = BackgroundTaskManager::new();
        let (first_tx, first_rx) = oneshot::channel::<()>();
        let (second_tx, second_rx) = oneshot::channel::<()>();

        manager.spawn_task("add_note".to_string(), false, async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = first_tx.send(());
        });
        manager.spawn_task("add_note".to_string(), false, async move {
            let _ = second_tx.send(());
        });

        assert!(second_rx.await.is_ok());
        assert!(first_rx.await.is_ok());
    }

    #[tokio::test]
    async fn cancel_all_stops_everything() {
        let mut manager = BackgroundTaskManager::new();
        let (first_tx, first_rx) = oneshot::channel::<()>();
        let (second_tx, second_rx) = oneshot::channel::<()>();
        manager.spawn_task("add_note".to_string(), false, async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = first_tx.send(());
        });
        manager.spawn_task("add_note".to_string(), false, async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = second_tx.send(());
        });

        manager.cancel_all();
        assert!(first_rx.await.is_err());
        assert!(second_rx.await.is_err());
        assert!(manager.tasks.is_empty());
        assert!(manager.superseded.is_empty());
    }
}
