//! Backend call dispatch.
//!
//! Queries and commands run one at a time, in submission order, on a worker
//! thread. Query answers and host push events come back to the UI thread
//! through a single channel. Failures are logged and otherwise dropped: the
//! UI waits for the next push to show the true state.

use audio_switch_bridge::{
    AppState, Backend, BridgeError, HostEvent, HotkeyConfig, WindowGeometry, WindowTarget,
};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Called after a message is queued for the UI thread.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Messages delivered to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    /// Answer to the initial state query
    State(AppState),
    /// Answer to the initial hotkey query
    HotkeyConfig(HotkeyConfig),
    /// Push event from the host
    Host(HostEvent),
}

/// Sending half of the UI inbox.
#[derive(Clone)]
pub struct UiSender {
    tx: Sender<UiMessage>,
    waker: Waker,
}

impl UiSender {
    pub fn send(&self, message: UiMessage) {
        if self.tx.send(message).is_ok() {
            (self.waker)();
        }
    }
}

/// Create the UI inbox. `waker` typically requests a repaint.
pub fn ui_channel(waker: Waker) -> (UiSender, Receiver<UiMessage>) {
    let (tx, rx) = channel();
    (UiSender { tx, waker }, rx)
}

/// Fire-and-forget operations on the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleSelected,
    SetDevice(String),
    TogglePref(String),
    RegisterHotkey(HotkeyConfig),
    UnregisterHotkey,
    CreateWindow,
    Exit,
    NotifyResize(WindowTarget, WindowGeometry),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::ToggleSelected => "ToggleSelected",
            Command::SetDevice(_) => "SetDevice",
            Command::TogglePref(_) => "TogglePref",
            Command::RegisterHotkey(_) => "RegisterHotkey",
            Command::UnregisterHotkey => "UnregisterHotkey",
            Command::CreateWindow => "CreateWindow",
            Command::Exit => "Exit",
            Command::NotifyResize(..) => "NotifyResize",
        }
    }

    fn run(&self, backend: &dyn Backend) -> Result<(), BridgeError> {
        match self {
            Command::ToggleSelected => backend.toggle_selected(),
            Command::SetDevice(id) => backend.set_device(id),
            Command::TogglePref(id) => backend.toggle_pref(id),
            Command::RegisterHotkey(config) => backend.register_hotkey(config),
            Command::UnregisterHotkey => backend.unregister_hotkey(),
            Command::CreateWindow => backend.create_window(),
            Command::Exit => backend.exit(),
            Command::NotifyResize(target, geometry) => backend.notify_resize(*target, *geometry),
        }
    }
}

type Job = Box<dyn FnOnce(&dyn Backend) + Send>;

/// Serial executor for backend calls.
pub struct Dispatcher {
    jobs: Sender<Job>,
    ui: UiSender,
}

impl Dispatcher {
    /// Start the worker thread.
    pub fn spawn(backend: Arc<dyn Backend>, ui: UiSender) -> std::io::Result<Self> {
        let (jobs, rx) = channel::<Job>();

        std::thread::Builder::new()
            .name("backend-dispatch".into())
            .spawn(move || {
                for job in rx {
                    job(backend.as_ref());
                }
                debug!("Backend dispatch worker stopped");
            })?;

        Ok(Self { jobs, ui })
    }

    fn submit(&self, job: Job) {
        if self.jobs.send(job).is_err() {
            warn!("Backend dispatch worker is gone, dropping call");
        }
    }

    /// Query the full application state.
    pub fn load_state(&self) {
        let ui = self.ui.clone();
        self.submit(Box::new(move |backend| match backend.get_state() {
            Ok(state) => ui.send(UiMessage::State(state)),
            Err(e) => error!("GetState failed: {}", e),
        }));
    }

    /// Query the registered hotkey.
    pub fn load_hotkey_config(&self) {
        let ui = self.ui.clone();
        self.submit(Box::new(move |backend| match backend.get_hotkey_config() {
            Ok(config) => ui.send(UiMessage::HotkeyConfig(config)),
            Err(e) => error!("GetHotkeyConfig failed: {}", e),
        }));
    }

    /// Queue a command. Its outcome is only logged.
    pub fn command(&self, command: Command) {
        self.submit(Box::new(move |backend| {
            debug!("Running {}", command.name());
            if let Err(e) = command.run(backend) {
                error!("{} failed: {}", command.name(), e);
            }
        }));
    }

    /// Wait until everything queued so far has run, or `timeout` passes.
    ///
    /// Returns `false` on timeout.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (done_tx, done_rx) = channel();
        self.submit(Box::new(move |_| {
            let _ = done_tx.send(());
        }));
        done_rx.recv_timeout(timeout).is_ok()
    }
}
