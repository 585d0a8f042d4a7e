//! Defines Tally runtime task runner.
use std::future::Future;

use log::{error, trace};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::OnceCell;
use tokio::task;
use tokio::task::JoinHandle;

use crate::errors::{Error, RuntimeError, Unknown};

/// Represents the outcome of a task as reported to the runtime.
/// A task may return either `()` or `Result<(), Error>`: both convert into a `TaskResult`.
pub enum TaskResult {
    Ok,
    Err(Error),
}

/// What a finished task sends back to the runtime: its name and its result.
pub struct TaskOutcome {
    pub name: String,
    pub result: TaskResult,
}

/// Represents a handler on a running task (can be used to abort it).
pub type TaskHandler = JoinHandle<Result<(), Error>>;

type TaskReceiver = UnboundedReceiver<TaskOutcome>;

/// Globally accessible runtime transmitter(TX)/receiver(RX) (not initialised yet).
pub static RUNTIME_TX: OnceCell<Mutex<Option<UnboundedSender<TaskReceiver>>>> =
    OnceCell::const_new();
pub static RUNTIME_RX: OnceCell<Mutex<Option<UnboundedReceiver<TaskReceiver>>>> =
    OnceCell::const_new();

impl From<Result<(), Error>> for TaskResult {
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(_) => TaskResult::Ok,
            Err(e) => TaskResult::Err(e),
        }
    }
}

impl From<()> for TaskResult {
    fn from(_: ()) -> Self {
        TaskResult::Ok
    }
}

/// Creates the runtime channel once: subsequent calls are no-ops.
pub async fn init_task_channel() {
    RUNTIME_RX
        .get_or_init(|| async {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<TaskReceiver>();
            RUNTIME_TX
                .get_or_init(|| async { Mutex::new(Some(tx)) })
                .await;
            Mutex::new(Some(rx))
        })
        .await;
}

/// Runs a given future as a tokio task while ensuring the function marked by `#[tally::runtime]`
/// will not return before the task is done.
///
/// Same as [`run_named`] with a generic name.
///
/// # Example
/// ```
/// use tally::utils::task;
///
/// #[tally::runtime]
/// async fn main() {
///     task::run(async move {
///         // whatever
///     }).unwrap();
/// }
/// ```
pub fn run<F, T>(future: F) -> Result<TaskHandler, Error>
where
    F: Future<Output = T> + Send + 'static,
    T: Into<TaskResult> + Send + 'static,
{
    run_named("Task", future)
}

/// Runs a given future as a named tokio task: the name shows up in the runtime logs when the task
/// fails, is aborted or completes.
///
/// Each task gets its own result channel; the receiving side is handed over to the runtime
/// which awaits it before exiting. An aborted task simply closes its channel.
///
/// # Errors
/// Returns `RuntimeError` when called outside of a tokio runtime or if the runtime channel was
/// not initialized (no `#[tally::runtime]`), `Unknown` if the handover to the runtime fails.
pub fn run_named<F, T>(name: impl Into<String>, future: F) -> Result<TaskHandler, Error>
where
    F: Future<Output = T> + Send + 'static,
    T: Into<TaskResult> + Send + 'static,
{
    // The channel outlives the runtime that created it: check both.
    Handle::try_current().map_err(|_| RuntimeError)?;
    let cell = RUNTIME_TX.get().ok_or(RuntimeError)?;

    let name = name.into();
    trace!("{} spawned", name);
    let (task_tx, task_rx) = tokio::sync::mpsc::unbounded_channel();

    let handler = task::spawn(async move {
        let result = future.await.into();
        task_tx
            .send(TaskOutcome { name, result })
            .map_err(|err| Unknown {
                info: err.to_string(),
            })?;
        Ok(())
    });

    let mut lock = cell.lock();
    let runtime_tx = lock.as_mut().ok_or(RuntimeError)?;
    runtime_tx.send(task_rx).map_err(|err| Unknown {
        info: err.to_string(),
    })?;

    Ok(handler)
}

/// Logs the outcome of a task awaited by the runtime (`None` means the task was aborted).
pub fn report(outcome: Option<TaskOutcome>) {
    match outcome {
        None => trace!("Task aborted"),
        Some(TaskOutcome {
            name,
            result: TaskResult::Ok,
        }) => trace!("{} done", name),
        Some(TaskOutcome {
            name,
            result: TaskResult::Err(err),
        }) => error!("{} failed: {}", name, err),
    }
}

/// Sleeps (asynchronously) for the given number of milliseconds.
#[macro_export]
macro_rules! pause {
    ($ms:expr) => {
        $crate::utils::tokio::time::sleep($crate::utils::tokio::time::Duration::from_millis(
            $ms as u64,
        ))
        .await
    };
}
