//! TCP client for the host service.
//!
//! One reader thread owns the receiving half of the connection. It settles
//! pending calls by correlation id and forwards push events to the
//! subscriber. Calls block the calling thread until their response arrives.

use crate::backend::{Backend, HostEvent};
use crate::error::BridgeError;
use crate::types::{AppState, HotkeyConfig, StatePatch, WindowGeometry, WindowTarget};
use crate::wire::{self, event, method, Frame};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

type Pending = Arc<Mutex<HashMap<u64, Sender<Result<Value, BridgeError>>>>>;

/// Connection to the host service.
pub struct HostClient {
    writer: Mutex<TcpStream>,
    /// Sequence counter for request-response correlation (skips 0)
    seq: AtomicU64,
    pending: Pending,
    connected: Arc<AtomicBool>,
}

impl HostClient {
    /// Connect to the host and subscribe to its push events.
    ///
    /// `on_event` runs on the reader thread.
    pub fn connect<F>(address: &str, timeout: Duration, on_event: F) -> Result<Self, BridgeError>
    where
        F: Fn(HostEvent) + Send + 'static,
    {
        let stream = open_stream(address, timeout)?;
        let _ = stream.set_nodelay(true);
        let reader = stream.try_clone()?;

        let pending: Pending = Arc::new(Mutex::new(HashMap::new()));
        let connected = Arc::new(AtomicBool::new(true));

        let pending_clone = Arc::clone(&pending);
        let connected_clone = Arc::clone(&connected);
        let address_clone = address.to_string();

        std::thread::Builder::new()
            .name("host-bridge-reader".into())
            .spawn(move || {
                read_loop(reader, &pending_clone, &on_event);
                connected_clone.store(false, Ordering::SeqCst);
                for (_, tx) in lock(&pending_clone).drain() {
                    let _ = tx.send(Err(BridgeError::Disconnected));
                }
                info!("Host connection to {} closed", address_clone);
            })?;

        info!("Connected to host at {}", address);

        Ok(Self {
            writer: Mutex::new(stream),
            seq: AtomicU64::new(1),
            pending,
            connected,
        })
    }

    /// Whether the connection is still alive.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn next_seq(&self) -> u64 {
        loop {
            let s = self.seq.fetch_add(1, Ordering::Relaxed);
            if s != 0 {
                return s;
            }
        }
    }

    fn send(&self, frame: &Frame) -> Result<(), BridgeError> {
        let mut line = wire::encode(frame)?;
        line.push('\n');

        let mut writer = lock(&self.writer);
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| {
                self.connected.store(false, Ordering::SeqCst);
                BridgeError::Io(e)
            })
    }

    /// Call a remote method and wait for its raw result.
    pub fn call(&self, method: &'static str, args: Vec<Value>) -> Result<Value, BridgeError> {
        if !self.is_connected() {
            return Err(BridgeError::Disconnected);
        }

        let id = self.next_seq();
        let (tx, rx) = channel();
        lock(&self.pending).insert(id, tx);

        // The reader may have drained the table between the check above and
        // the insert.
        if !self.is_connected() {
            lock(&self.pending).remove(&id);
            return Err(BridgeError::Disconnected);
        }

        debug!("-> {} #{}", method, id);
        let frame = Frame::Call {
            id,
            method: method.to_string(),
            args,
        };
        if let Err(e) = self.send(&frame) {
            lock(&self.pending).remove(&id);
            return Err(e);
        }

        rx.recv().map_err(|_| BridgeError::Disconnected)?
    }

    fn call_typed<T: DeserializeOwned>(
        &self,
        method: &'static str,
        args: Vec<Value>,
    ) -> Result<T, BridgeError> {
        let value = self.call(method, args)?;
        if value.is_null() {
            return Err(BridgeError::UnexpectedResponse { method });
        }
        serde_json::from_value(value).map_err(BridgeError::Decode)
    }

    fn call_unit(&self, method: &'static str, args: Vec<Value>) -> Result<(), BridgeError> {
        self.call(method, args).map(|_| ())
    }

    /// Emit a named event to the host. Does not wait for anything.
    pub fn emit(&self, name: &str, data: Value) -> Result<(), BridgeError> {
        if !self.is_connected() {
            return Err(BridgeError::Disconnected);
        }
        debug!("-> event {}", name);
        self.send(&Frame::Emit {
            name: name.to_string(),
            data,
        })
    }
}

impl Backend for HostClient {
    fn get_state(&self) -> Result<AppState, BridgeError> {
        self.call_typed(method::GET_STATE, Vec::new())
    }

    fn get_hotkey_config(&self) -> Result<HotkeyConfig, BridgeError> {
        self.call_typed(method::GET_HOTKEY_CONFIG, Vec::new())
    }

    fn toggle_selected(&self) -> Result<(), BridgeError> {
        self.call_unit(method::TOGGLE_SELECTED, Vec::new())
    }

    fn set_device(&self, device_id: &str) -> Result<(), BridgeError> {
        self.call_unit(method::SET_DEVICE, vec![Value::from(device_id)])
    }

    fn toggle_pref(&self, device_id: &str) -> Result<(), BridgeError> {
        self.call_unit(method::TOGGLE_PREF, vec![Value::from(device_id)])
    }

    fn register_hotkey(&self, config: &HotkeyConfig) -> Result<(), BridgeError> {
        let arg = serde_json::to_value(config).map_err(BridgeError::Encode)?;
        self.call_unit(method::REGISTER_HOTKEY, vec![arg])
    }

    fn unregister_hotkey(&self) -> Result<(), BridgeError> {
        self.call_unit(method::UNREGISTER_HOTKEY, Vec::new())
    }

    fn create_window(&self) -> Result<(), BridgeError> {
        self.call_unit(method::CREATE_WINDOW, Vec::new())
    }

    fn exit(&self) -> Result<(), BridgeError> {
        self.call_unit(method::EXIT, Vec::new())
    }

    fn notify_resize(
        &self,
        target: WindowTarget,
        geometry: WindowGeometry,
    ) -> Result<(), BridgeError> {
        let name = match target {
            WindowTarget::Dashboard => event::WINDOW_RESIZE,
            WindowTarget::Overlay => event::OVERLAY_RESIZE,
        };
        let data = serde_json::to_value(geometry).map_err(BridgeError::Encode)?;
        self.emit(name, data)
    }
}

impl Drop for HostClient {
    fn drop(&mut self) {
        let _ = lock(&self.writer).shutdown(Shutdown::Both);
    }
}

fn open_stream(address: &str, timeout: Duration) -> Result<TcpStream, BridgeError> {
    let connect_err = |source| BridgeError::Connect {
        address: address.to_string(),
        source,
    };

    let mut last_err = None;
    for addr in address.to_socket_addrs().map_err(connect_err)? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(connect_err(last_err.unwrap_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "address did not resolve")
    })))
}

fn read_loop<F>(stream: TcpStream, pending: &Pending, on_event: &F)
where
    F: Fn(HostEvent),
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => {}
            Err(e) => {
                warn!("Host read error: {}", e);
                return;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("Skipping non UTF-8 host frame: {}", e);
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let frame = match wire::decode(line) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Skipping undecodable host frame: {}", e);
                continue;
            }
        };

        match frame {
            Frame::Result { id, result } => settle(pending, id, Ok(result)),
            Frame::Error { id, error } => settle(pending, id, Err(BridgeError::Host(error))),
            Frame::Event { name, data } => dispatch_event(&name, data, on_event),
            Frame::Call { method, .. } => {
                warn!("Ignoring call frame from host: {}", method);
            }
            Frame::Emit { name, .. } => {
                warn!("Ignoring emit frame from host: {}", name);
            }
        }
    }
}

fn settle(pending: &Pending, id: u64, result: Result<Value, BridgeError>) {
    match lock(pending).remove(&id) {
        Some(tx) => {
            let _ = tx.send(result);
        }
        None => debug!("Response #{} has no pending call", id),
    }
}

fn dispatch_event<F>(name: &str, data: Value, on_event: &F)
where
    F: Fn(HostEvent),
{
    if name != event::STATE_UPDATE {
        debug!("Ignoring host event {}", name);
        return;
    }

    match serde_json::from_value::<StatePatch>(data) {
        Ok(patch) => {
            debug!("<- event {}", name);
            on_event(HostEvent::StateUpdate(patch));
        }
        Err(e) => warn!("Malformed {} payload: {}", name, e),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
