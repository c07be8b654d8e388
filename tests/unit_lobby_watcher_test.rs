use async_trait::async_trait;
use leaguedesk::core::LeagueDeskError;
use leaguedesk::core::events::ClientEvent;
use leaguedesk::core::lcu::{LcuGateway, LcuReader};
use leaguedesk::core::tasks::lobby_watcher::LobbyWatcher;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;

/// A gateway that replays a scripted sequence of payloads per endpoint; once
/// a sequence is exhausted its last entry repeats forever.
#[derive(Default)]
struct ScriptedGateway {
    lobby: Mutex<VecDeque<Option<String>>>,
    ready_check: Mutex<VecDeque<Option<String>>>,
    lobby_calls: AtomicUsize,
}

impl ScriptedGateway {
    fn new(
        lobby: impl IntoIterator<Item = Option<&'static str>>,
        ready_check: impl IntoIterator<Item = Option<&'static str>>,
    ) -> Arc<Self> {
        let to_queue = |items: &mut dyn Iterator<Item = Option<&'static str>>| {
            items
                .map(|payload| payload.map(str::to_string))
                .collect::<VecDeque<_>>()
        };
        Arc::new(Self {
            lobby: Mutex::new(to_queue(&mut lobby.into_iter())),
            ready_check: Mutex::new(to_queue(&mut ready_check.into_iter())),
            lobby_calls: AtomicUsize::new(0),
        })
    }

    fn next(queue: &Mutex<VecDeque<Option<String>>>) -> Option<String> {
        let mut queue = queue.lock().unwrap();
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap_or(None)
        }
    }
}

#[async_trait]
impl LcuGateway for ScriptedGateway {
    async fn lobby_json(&self) -> Option<String> {
        self.lobby_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.lobby)
    }

    async fn ready_check_json(&self) -> Option<String> {
        Self::next(&self.ready_check)
    }

    async fn champ_select_session_json(&self) -> Option<String> {
        None
    }

    async fn current_summoner_json(&self) -> Option<String> {
        None
    }

    async fn gameflow_session_json(&self) -> Option<String> {
        None
    }

    async fn search_state_json(&self) -> Option<String> {
        None
    }

    async fn accept_ready_check(&self) -> bool {
        false
    }

    async fn decline_ready_check(&self) -> bool {
        false
    }
}

/// Runs a watcher over the scripted gateway for `run_for`, then shuts it down
/// and returns every event that was published plus the loop's exit result.
async fn run_watcher(
    gateway: Arc<ScriptedGateway>,
    tick: Duration,
    run_for: Duration,
) -> (Vec<ClientEvent>, Result<(), LeagueDeskError>) {
    let watcher = LobbyWatcher::with_interval(LcuReader::new(gateway), tick);
    let mut events = watcher.subscribe();

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(watcher.run(shutdown_rx));

    tokio::time::sleep(run_for).await;
    shutdown_tx.send(()).unwrap();
    let result = handle.await.unwrap();

    let mut collected = Vec::new();
    while let Ok(event) = events.try_recv() {
        collected.push(event);
    }
    (collected, result)
}

fn lobby_events(events: &[ClientEvent]) -> Vec<&ClientEvent> {
    events
        .iter()
        .filter(|event| matches!(event, ClientEvent::LobbyChanged(_)))
        .collect()
}

fn ready_check_events(events: &[ClientEvent]) -> Vec<&ClientEvent> {
    events
        .iter()
        .filter(|event| matches!(event, ClientEvent::ReadyCheckChanged(_)))
        .collect()
}

#[tokio::test]
async fn test_stable_lobby_notifies_once() {
    let gateway = ScriptedGateway::new(
        [Some("{}")],
        [Some(r#"{"state":"InProgress"}"#)],
    );

    let (events, _) = run_watcher(
        gateway.clone(),
        Duration::from_millis(20),
        Duration::from_millis(200),
    )
    .await;

    // Several ticks saw the same lobby; only the appearance is a transition.
    assert!(gateway.lobby_calls.load(Ordering::SeqCst) >= 2);
    assert_eq!(lobby_events(&events).len(), 1);
}

#[tokio::test]
async fn test_lobby_appearing_notifies_with_snapshot() {
    let gateway = ScriptedGateway::new(
        [None, Some(r#"{"partyId":"party-123"}"#)],
        [None],
    );

    let (events, _) = run_watcher(
        gateway,
        Duration::from_millis(20),
        Duration::from_millis(200),
    )
    .await;

    let lobby_events = lobby_events(&events);
    assert_eq!(lobby_events.len(), 1);
    match lobby_events[0] {
        ClientEvent::LobbyChanged(Some(lobby)) => {
            assert_eq!(lobby.party_id.as_deref(), Some("party-123"));
        }
        other => panic!("expected a present lobby snapshot, got {other:?}"),
    }
}

#[tokio::test]
async fn test_absent_lobby_never_notifies() {
    let gateway = ScriptedGateway::new([None], [None]);

    let (events, _) = run_watcher(
        gateway.clone(),
        Duration::from_millis(20),
        Duration::from_millis(200),
    )
    .await;

    assert!(gateway.lobby_calls.load(Ordering::SeqCst) >= 2);
    assert!(lobby_events(&events).is_empty());
}

#[tokio::test]
async fn test_lobby_disappearing_is_a_transition() {
    let gateway = ScriptedGateway::new([Some("{}"), None], [None]);

    let (events, _) = run_watcher(
        gateway,
        Duration::from_millis(20),
        Duration::from_millis(200),
    )
    .await;

    let lobby_events = lobby_events(&events);
    assert_eq!(lobby_events.len(), 2);
    assert!(matches!(lobby_events[0], ClientEvent::LobbyChanged(Some(_))));
    assert!(matches!(lobby_events[1], ClientEvent::LobbyChanged(None)));
}

#[tokio::test]
async fn test_lobby_field_change_notifies_again() {
    let gateway = ScriptedGateway::new(
        [
            Some(r#"{"canStartActivity":false}"#),
            Some(r#"{"canStartActivity":true}"#),
        ],
        [None],
    );

    let (events, _) = run_watcher(
        gateway,
        Duration::from_millis(20),
        Duration::from_millis(200),
    )
    .await;

    assert_eq!(lobby_events(&events).len(), 2);
}

#[tokio::test]
async fn test_ready_check_transitions_publish_nothing() {
    // InProgress -> Matched -> InProgress across ticks: the watcher diffs the
    // state but, matching the long-standing client behavior, publishes no
    // ReadyCheckChanged events.
    let gateway = ScriptedGateway::new(
        [Some("{}")],
        [
            Some(r#"{"state":"InProgress"}"#),
            Some(r#"{"state":"Matched"}"#),
            Some(r#"{"state":"InProgress"}"#),
        ],
    );

    let (events, _) = run_watcher(
        gateway,
        Duration::from_millis(20),
        Duration::from_millis(200),
    )
    .await;

    assert!(ready_check_events(&events).is_empty());
    assert_eq!(lobby_events(&events).len(), 1);
}

#[tokio::test]
async fn test_cancellation_unwinds_run() {
    let gateway = ScriptedGateway::new(
        [Some("{}")],
        [Some(r#"{"state":"InProgress"}"#)],
    );

    // Default 500 ms cadence; cancel just past the first tick boundary.
    let watcher = LobbyWatcher::new(LcuReader::new(gateway.clone()));
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(watcher.run(shutdown_rx));

    tokio::time::sleep(Duration::from_millis(600)).await;
    shutdown_tx.send(()).unwrap();
    let result = handle.await.unwrap();

    assert!(matches!(result, Err(LeagueDeskError::Cancelled)));
    assert!(gateway.lobby_calls.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn test_event_stream_yields_lobby_transition() {
    let gateway = ScriptedGateway::new([Some("{}")], [None]);

    let watcher = LobbyWatcher::with_interval(
        LcuReader::new(gateway),
        Duration::from_millis(20),
    );
    let mut stream = watcher.event_stream();

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let handle = tokio::spawn(watcher.run(shutdown_rx));

    let first = tokio::time::timeout(Duration::from_secs(1), stream.next())
        .await
        .expect("stream produced no event in time")
        .expect("stream ended unexpectedly")
        .expect("stream receiver lagged");
    assert!(matches!(first, ClientEvent::LobbyChanged(Some(_))));

    shutdown_tx.send(()).unwrap();
    let result = handle.await.unwrap();
    assert!(matches!(result, Err(LeagueDeskError::Cancelled)));
}
