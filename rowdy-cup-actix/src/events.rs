use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use rowdy_cup_core::event::ScoreEvent;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Fan-out channel for score pushes. Slow subscribers that lag behind the
/// channel capacity miss events and simply pick up again at the next one.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ScoreEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish to whoever is listening. No subscribers is not an error.
    pub fn publish(&self, event: ScoreEvent) {
        let _ = self.tx.send(event);
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ScoreEvent> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

/// GET /events — SSE endpoint the scoreboard page listens on.
pub async fn event_stream(bus: Data<EventBus>) -> impl Responder {
    let rx = bus.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let json = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok::<_, actix_web::Error>(web::Bytes::from(format!(
                "data: {json}\n\n"
            ))))
        }
        Err(e) => {
            tracing::warn!("SSE broadcast receive error: {e}");
            None
        }
    });

    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream)
}
