use super::actions::Action;
use crate::constants::{ERROR_DOWNLOAD_FAILED, SUCCESS_DOWNLOADED, SUCCESS_OPENED};
use crate::download::{DownloadOutcome, DownloadRequest, Downloader};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    DownloadCompleted(DownloadOutcome),
    DownloadFailed(String),
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Copy a file or launch a link off the event loop; the result comes back as an action.
    pub fn spawn_download(&mut self, downloader: Downloader, request: DownloadRequest) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Download '{}'", request.name());

        let handle = tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || downloader.execute(request)).await;

            match outcome {
                Ok(Ok(outcome)) => {
                    let message = match &outcome {
                        DownloadOutcome::Saved(_) => format!("{} {}", SUCCESS_DOWNLOADED, outcome),
                        DownloadOutcome::Opened(_) => format!("{} {}", SUCCESS_OPENED, outcome),
                    };
                    let _ = action_sender.send(Action::DownloadCompleted(message));
                    TaskResult::DownloadCompleted(outcome)
                }
                Ok(Err(e)) => {
                    let error_msg = format!("{}: {}", ERROR_DOWNLOAD_FAILED, e);
                    let _ = action_sender.send(Action::DownloadFailed(error_msg.clone()));
                    TaskResult::DownloadFailed(error_msg)
                }
                Err(e) => {
                    let error_msg = format!("{}: {}", ERROR_DOWNLOAD_FAILED, e);
                    let _ = action_sender.send(Action::DownloadFailed(error_msg.clone()));
                    TaskResult::DownloadFailed(error_msg)
                }
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Drop finished tasks; their results were already sent on the action channel.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Tasks: '{}' (#{}) finished after {:?}",
                    task.description,
                    task.id,
                    task.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
