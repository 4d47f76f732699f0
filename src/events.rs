use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Events emitted by the stock mutation services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    StockAdded {
        stock_id: Uuid,
        product_id: Uuid,
        store_id: Uuid,
        quantity: i32,
    },
    StockUpdated {
        stock_id: Uuid,
    },
    StockRemoved {
        stock_id: Uuid,
    },
    LossRecorded {
        loss_id: Uuid,
        stock_id: Uuid,
        quantity: i32,
        loss_value: Decimal,
    },
}

/// Cloneable handle over the event channel.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Builds a channel pair with the given capacity.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}

/// Drains the event channel, logging each event. Runs until all senders
/// are dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::StockAdded {
                stock_id,
                product_id,
                store_id,
                quantity,
            } => {
                info!(%stock_id, %product_id, %store_id, quantity, "stock added");
            }
            Event::StockUpdated { stock_id } => {
                info!(%stock_id, "stock updated");
            }
            Event::StockRemoved { stock_id } => {
                info!(%stock_id, "stock removed");
            }
            Event::LossRecorded {
                loss_id,
                stock_id,
                quantity,
                loss_value,
            } => {
                warn!(%loss_id, %stock_id, quantity, %loss_value, "loss recorded");
            }
        }
    }
}
