mod common;

use common::{test_client, unreachable_endpoint, MockLightServer, MockResponse, KITCHEN_AND_HALL};
use lightboard::light::Endpoint;
use lightboard::ui::app::App;
use lightboard::ui::events::{AppEvent, EventHandler};
use lightboard::ui::runtime::run_headless;
use std::time::Duration;
use tokio::runtime::Handle;

/// Block until the fetch outcome arrives and feed it to the app.
fn deliver_fetch_result(app: &mut App, events: &EventHandler) {
    match events.next(Duration::from_secs(5)) {
        Ok(AppEvent::LightsFetched(result)) => app.on_lights_fetched(result),
        Ok(other) => panic!("Unexpected event: {other:?}"),
        Err(err) => panic!("No fetch result: {err}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn start_loads_lights_through_event_channel() {
    let server = MockLightServer::start().await;
    server
        .enqueue_response(MockResponse::json(KITCHEN_AND_HALL))
        .await;

    let client = test_client(&server.base_url());
    let mut app = App::new(client.endpoint().clone());
    let events = EventHandler::channel();

    assert!(app.start(client, &Handle::current(), events.sender()));
    assert_eq!(app.count_label(), "Lights: 0");

    tokio::task::block_in_place(|| deliver_fetch_result(&mut app, &events));

    assert_eq!(app.count_label(), "Lights: 2");
    let keys: Vec<String> = app.light_list().keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["1", "2"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn start_issues_exactly_one_fetch() {
    let server = MockLightServer::start().await;
    server
        .enqueue_response(MockResponse::json(KITCHEN_AND_HALL))
        .await;

    let client = test_client(&server.base_url());
    let mut app = App::new(client.endpoint().clone());
    let events = EventHandler::channel();

    assert!(app.start(client.clone(), &Handle::current(), events.sender()));
    assert!(!app.start(client.clone(), &Handle::current(), events.sender()));

    tokio::task::block_in_place(|| deliver_fetch_result(&mut app, &events));
    assert!(!app.start(client, &Handle::current(), events.sender()));

    assert_eq!(server.captured_requests().await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_error_leaves_label_at_zero() {
    let server = MockLightServer::start().await;
    server.enqueue_response(MockResponse::error(500, "down")).await;

    let client = test_client(&server.base_url());
    let mut app = App::new(client.endpoint().clone());
    let events = EventHandler::channel();
    app.start(client, &Handle::current(), events.sender());

    tokio::task::block_in_place(|| deliver_fetch_result(&mut app, &events));

    assert_eq!(app.count_label(), "Lights: 0");
    assert_eq!(app.light_list().items().count(), 0);
    assert!(app.lights_state().failure().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn network_error_leaves_label_at_zero() {
    let client = test_client(&unreachable_endpoint());
    let mut app = App::new(client.endpoint().clone());
    let events = EventHandler::channel();
    app.start(client, &Handle::current(), events.sender());

    tokio::task::block_in_place(|| deliver_fetch_result(&mut app, &events));

    assert_eq!(app.count_label(), "Lights: 0");
    assert!(app.light_list().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn teardown_aborts_pending_fetch() {
    let server = MockLightServer::start().await;
    server
        .enqueue_response(MockResponse::json(KITCHEN_AND_HALL).with_delay(1_000))
        .await;

    let client = test_client(&server.base_url());
    let mut app = App::new(client.endpoint().clone());
    let events = EventHandler::channel();
    app.start(client, &Handle::current(), events.sender());
    app.teardown();

    let next = tokio::task::block_in_place(|| events.next(Duration::from_millis(1_500)));
    assert!(next.is_err(), "aborted fetch must not deliver a result");
    assert!(app.lights_state().is_awaiting());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn headless_run_renders_loaded_list() {
    let server = MockLightServer::start().await;
    server
        .enqueue_response(MockResponse::json(KITCHEN_AND_HALL))
        .await;

    let client = test_client(&server.base_url());
    let mut app = App::new(client.endpoint().clone());
    let output =
        tokio::task::block_in_place(|| run_headless(&mut app, client, &Handle::current()));

    assert_eq!(output, "Lights: 2\n- 1: Kitchen\n- 2: Hall\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn headless_run_with_empty_endpoint_shows_zero() {
    let client = test_client("");
    let mut app = App::new(Endpoint::default());
    let output =
        tokio::task::block_in_place(|| run_headless(&mut app, client, &Handle::current()));

    assert_eq!(output, "Lights: 0\n");
}

#[test]
fn headless_run_returns_when_runtime_stops_mid_fetch() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();
    let server = rt.block_on(async {
        let server = MockLightServer::start().await;
        server
            .enqueue_response(MockResponse::json(KITCHEN_AND_HALL).with_delay(5_000))
            .await;
        server
    });

    let client = test_client(&server.base_url());
    let mut app = App::new(client.endpoint().clone());
    let handle = rt.handle().clone();
    let (done_tx, done_rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let output = run_headless(&mut app, client, &handle);
        let _ = done_tx.send((output, app.lights_state().failure().is_some()));
    });

    std::thread::sleep(Duration::from_millis(200));
    rt.shutdown_background();

    let (output, failed) = done_rx
        .recv_timeout(Duration::from_secs(3))
        .expect("headless run must return once the fetch task is gone");
    assert_eq!(output, "Lights: 0\n");
    assert!(failed);
    drop(server);
}
