//! MoonZoon Connection wrapper.
//!
//! The only backend traffic of the dashboard itself is the configuration
//! round-trip; all aggregate data comes from the external HTTP API.

use futures::channel::mpsc::UnboundedReceiver;
use shared::{DownMsg, UpMsg};
use zoon::*;

/// Actor+Relay compatible Connection adapter.
pub struct ConnectionAdapter {
    connection: Connection<UpMsg, DownMsg>,
}

impl ConnectionAdapter {
    pub fn new() -> (Self, UnboundedReceiver<DownMsg>) {
        let (message_sender, message_stream) = futures::channel::mpsc::unbounded();

        let connection = Connection::new(move |down_msg, _| {
            let _ = message_sender.unbounded_send(down_msg);
        });

        (ConnectionAdapter { connection }, message_stream)
    }

    pub async fn send_up_msg(&self, up_msg: UpMsg) {
        if let Err(error) = self.connection.send_up_msg(up_msg).await {
            zoon::eprintln!("Failed to send message: {:?}", error);
        }
    }
}
