use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

/// Record lifecycle events emitted by the services after each successful
/// mutation. Consumers observe; they never participate in the mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    CustomerCreated(Uuid),
    CustomerUpdated(Uuid),
    CustomerDeleted(Uuid),

    SupplierCreated(Uuid),
    SupplierUpdated(Uuid),
    SupplierDeleted(Uuid),

    ProjectCreated(Uuid),
    ProjectUpdated(Uuid),
    ProjectDeleted(Uuid),

    QuoteCreated(Uuid),
    QuoteUpdated(Uuid),
    QuoteDeleted(Uuid),

    SalesOrderCreated(Uuid),
    SalesOrderUpdated(Uuid),
    SalesOrderDeleted(Uuid),

    InvoiceCreated(Uuid),
    InvoiceUpdated(Uuid),
    InvoiceDeleted(Uuid),

    DeliveryNoteCreated(Uuid),
    DeliveryNoteUpdated(Uuid),
    DeliveryNoteDeleted(Uuid),

    /// A line item changed under the given parent document.
    LineItemsChanged { parent_id: Uuid },

    /// An invoice was recorded as sent to the customer.
    InvoiceDeliveryLogged { invoice_id: Uuid },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event. Delivery is best-effort: a full or closed channel is
    /// reported to the caller but never fails the originating mutation.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Background event processor. Runs until every sender is dropped.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Event processor started");
    while let Some(event) = rx.recv().await {
        debug!(?event, "record event");
    }
    info!("Event processor stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_to_processor_channel() {
        let (tx, mut rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);
        let id = Uuid::new_v4();

        sender.send(Event::CustomerCreated(id)).await.unwrap();

        match rx.recv().await {
            Some(Event::CustomerCreated(received)) => assert_eq!(received, id),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_reports_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);

        let result = sender.send(Event::SupplierDeleted(Uuid::new_v4())).await;
        assert!(result.is_err());
    }
}
