// ABOUTME: Async actor that serializes hub commands through a tokio channel.
// ABOUTME: Provides DeviceHubHandle for sending commands and reading a consistent view of devices.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, mpsc, oneshot};

use crate::command::Command;
use crate::hub::{DeviceHub, HubError};
use crate::model::Device;

/// A command paired with the channel its result is sent back on.
type CommandMessage = (Command, oneshot::Sender<Result<Device, HubError>>);

/// Cloneable handle to a running hub actor.
#[derive(Clone)]
pub struct DeviceHubHandle {
    cmd_tx: mpsc::Sender<CommandMessage>,
    hub: Arc<RwLock<DeviceHub>>,
}

impl DeviceHubHandle {
    /// Send a command to the actor and await the affected device.
    pub async fn send_command(&self, cmd: Command) -> Result<Device, HubError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send((cmd, tx))
            .await
            .map_err(|_| HubError::ChannelClosed)?;
        rx.await.map_err(|_| HubError::ChannelClosed)?
    }

    /// Read access to the hub. Writes wait until the guard is dropped.
    pub async fn read_state(&self) -> RwLockReadGuard<'_, DeviceHub> {
        self.hub.read().await
    }
}

/// Spawn the hub actor and return a handle to it. Commands run strictly in
/// arrival order, each under the hub's write lock.
pub fn spawn(hub: DeviceHub) -> DeviceHubHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<CommandMessage>(64);
    let hub = Arc::new(RwLock::new(hub));

    let actor = HubActor {
        hub: Arc::clone(&hub),
        cmd_rx,
    };
    tokio::spawn(actor.run());

    DeviceHubHandle { cmd_tx, hub }
}

struct HubActor {
    hub: Arc<RwLock<DeviceHub>>,
    cmd_rx: mpsc::Receiver<CommandMessage>,
}

impl HubActor {
    async fn run(mut self) {
        while let Some((cmd, reply_tx)) = self.cmd_rx.recv().await {
            let result = self.process_command(cmd).await;
            // The caller may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
        tracing::debug!("hub actor shutting down (channel closed)");
    }

    async fn process_command(&mut self, cmd: Command) -> Result<Device, HubError> {
        let mut hub = self.hub.write().await;
        match cmd {
            Command::PatchDevice { device_id, body } => hub.patch_device(&device_id, &body),
            Command::Undo => hub.undo_last_action().ok_or(HubError::NothingToUndo),
        }
    }
}
