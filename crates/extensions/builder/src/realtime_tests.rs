use super::*;
use parking_lot::Mutex;
use pagebuilder_protocols::error::StateError;
use pagebuilder_protocols::{RealtimeEvent, RealtimeHandler};
use serde_json::json;

/// Channel that records handlers so tests can call them directly.
#[derive(Default)]
struct RecordingChannel {
    handlers: Mutex<Vec<(String, RealtimeHandler)>>,
}

impl RecordingChannel {
    fn dispatch(&self, event: RealtimeEvent) -> Result<(), RealtimeError> {
        let handlers: Vec<RealtimeHandler> = self
            .handlers
            .lock()
            .iter()
            .filter(|(event_type, _)| *event_type == event.event_type)
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(&event)?;
        }
        Ok(())
    }
}

impl RealtimeChannel for RecordingChannel {
    fn register_event(
        &self,
        event_type: &str,
        handler: RealtimeHandler,
    ) -> Result<(), RealtimeError> {
        self.handlers.lock().push((event_type.to_string(), handler));
        Ok(())
    }

    fn event_types(&self) -> Vec<String> {
        self.handlers
            .lock()
            .iter()
            .map(|(event_type, _)| event_type.clone())
            .collect()
    }
}

fn setup() -> (RecordingChannel, Arc<PageStore>, Arc<ElementStore>) {
    let channel = RecordingChannel::default();
    let pages = Arc::new(PageStore::new());
    let elements = Arc::new(ElementStore::new());
    register_realtime_events(&channel, pages.clone(), elements.clone()).unwrap();
    (channel, pages, elements)
}

fn page_created(id: u64) -> RealtimeEvent {
    RealtimeEvent::new(
        "page_created",
        json!({"page": {"id": id, "builder_id": 1, "name": "Home", "path": "/"}}),
    )
}

fn element_created(id: u64, page_id: u64) -> RealtimeEvent {
    RealtimeEvent::new(
        "element_created",
        json!({"element": {"id": id, "page_id": page_id, "type": "heading"}}),
    )
}

#[test]
fn test_registers_every_builder_event() {
    let (channel, _, _) = setup();
    assert_eq!(channel.event_types(), BUILDER_EVENTS.to_vec());
}

#[test]
fn test_page_lifecycle() {
    let (channel, pages, _) = setup();
    channel.dispatch(page_created(1)).unwrap();
    assert_eq!(pages.get(1).unwrap().name, "Home");

    channel
        .dispatch(RealtimeEvent::new(
            "page_updated",
            json!({"page_id": 1, "values": {"name": "Start"}}),
        ))
        .unwrap();
    assert_eq!(pages.get(1).unwrap().name, "Start");

    channel
        .dispatch(RealtimeEvent::new("page_deleted", json!({"page_id": 1})))
        .unwrap();
    assert!(pages.is_empty());
}

#[test]
fn test_page_deleted_cascades_to_elements() {
    let (channel, _, elements) = setup();
    channel.dispatch(page_created(1)).unwrap();
    channel.dispatch(element_created(10, 1)).unwrap();
    channel.dispatch(element_created(11, 1)).unwrap();
    assert_eq!(elements.len(), 2);

    channel
        .dispatch(RealtimeEvent::new("page_deleted", json!({"page_id": 1})))
        .unwrap();
    assert!(elements.is_empty());
}

#[test]
fn test_element_lifecycle() {
    let (channel, _, elements) = setup();
    channel.dispatch(element_created(10, 1)).unwrap();
    channel
        .dispatch(RealtimeEvent::new(
            "element_updated",
            json!({"element_id": 10, "values": {"value": "Hello"}}),
        ))
        .unwrap();
    assert_eq!(elements.get(10).unwrap().values["value"], "Hello");

    channel
        .dispatch(RealtimeEvent::new(
            "element_deleted",
            json!({"element_id": 10}),
        ))
        .unwrap();
    assert!(elements.get(10).is_none());
}

#[test]
fn test_unknown_record_is_a_state_error() {
    let (channel, _, _) = setup();
    let result = channel.dispatch(RealtimeEvent::new(
        "element_deleted",
        json!({"element_id": 99}),
    ));
    assert_eq!(
        result,
        Err(RealtimeError::State(StateError::RecordNotFound {
            kind: "Element",
            id: 99
        }))
    );
}

#[test]
fn test_malformed_payload() {
    let (channel, pages, _) = setup();
    let result = channel.dispatch(RealtimeEvent::new("page_created", json!({"page": 3})));
    assert!(matches!(result, Err(RealtimeError::InvalidEvent(_))));
    assert!(pages.is_empty());

    let result = channel.dispatch(RealtimeEvent::new("page_deleted", json!({})));
    assert!(matches!(result, Err(RealtimeError::InvalidEvent(_))));
}
