//! End-to-end seeding flow
//!
//! Drives the assembled stack against a mock HTTP server and a tempdir
//! data directory; each `App` stands in for one application launch.

use littlelemon::{App, AppConfig};
use tempfile::TempDir;

const MENU_BODY: &str = r#"{
    "menu": [
        {"id": 1, "title": "Greek Salad", "description": "Crispy lettuce.", "price": "10", "image": "https://example.com/1.jpg", "category": "starters"},
        {"id": 2, "title": "Lemon Desert", "description": "Traditional.", "price": 4.99, "image": "https://example.com/2.jpg", "category": "desserts"},
        {"id": 3, "title": "Grilled Fish", "description": "With lemon.", "price": "19.99", "image": "https://example.com/3.jpg", "category": "mains"}
    ]
}"#;

fn config(server: &mockito::ServerGuard, dir: &TempDir) -> AppConfig {
    AppConfig {
        menu_endpoint: format!("{}/menu.json", server.url()),
        data_dir: Some(dir.path().to_path_buf()),
        fetch_timeout_secs: Some(5),
    }
}

#[tokio::test]
async fn first_launch_seeds_and_later_launches_skip_the_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/menu.json")
        .with_status(200)
        .with_header("content-type", "text/plain; charset=utf-8")
        .with_body(MENU_BODY)
        .expect(1)
        .create_async()
        .await;
    let dir = TempDir::new().unwrap();

    // First launch: empty store, one fetch.
    {
        let app = App::init(config(&server, &dir)).unwrap();
        app.start().unwrap().await.unwrap();

        let view = app.menu_view();
        assert_eq!(view.visible().len(), 3);
    }

    // Second launch over the same data directory: no fetch at all.
    {
        let app = App::init(config(&server, &dir)).unwrap();
        app.start().unwrap().await.unwrap();

        assert_eq!(app.menu_view().visible().len(), 3);
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn failed_fetch_leaves_the_menu_empty_until_the_next_launch() {
    let mut server = mockito::Server::new_async().await;
    let failing = server
        .mock("GET", "/menu.json")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let dir = TempDir::new().unwrap();

    // First launch: the fetch fails, the app keeps running with an empty
    // menu.
    {
        let app = App::init(config(&server, &dir)).unwrap();
        app.start().unwrap().await.unwrap();

        assert!(app.menu_view().visible().is_empty());
    }
    failing.assert_async().await;
    failing.remove_async().await;

    // Next launch: the store is still empty, so seeding retries and
    // succeeds.
    server
        .mock("GET", "/menu.json")
        .with_status(200)
        .with_body(MENU_BODY)
        .create_async()
        .await;

    let app = App::init(config(&server, &dir)).unwrap();
    app.start().unwrap().await.unwrap();

    assert_eq!(app.menu_view().visible().len(), 3);
}

#[tokio::test]
async fn start_spawns_the_seeding_task_at_most_once() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/menu.json")
        .with_status(200)
        .with_body(MENU_BODY)
        .expect(1)
        .create_async()
        .await;
    let dir = TempDir::new().unwrap();

    let app = App::init(config(&server, &dir)).unwrap();
    let handle = app.start();
    assert!(handle.is_some());
    assert!(app.start().is_none());

    handle.unwrap().await.unwrap();
}

#[tokio::test]
async fn observers_see_the_seeded_snapshot_arrive() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/menu.json")
        .with_status(200)
        .with_body(MENU_BODY)
        .create_async()
        .await;
    let dir = TempDir::new().unwrap();

    let app = App::init(config(&server, &dir)).unwrap();
    let mut view = app.menu_view();
    assert!(view.visible().is_empty());

    let handle = app.start().unwrap();
    view.changed().await.unwrap();

    assert_eq!(view.visible().len(), 3);
    handle.await.unwrap();
}

#[tokio::test]
async fn search_and_category_compose_over_the_seeded_menu() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/menu.json")
        .with_status(200)
        .with_body(MENU_BODY)
        .create_async()
        .await;
    let dir = TempDir::new().unwrap();

    let app = App::init(config(&server, &dir)).unwrap();
    app.start().unwrap().await.unwrap();

    let mut view = app.menu_view();

    view.toggle_category("Desserts");
    let titles: Vec<String> = view.visible().into_iter().map(|i| i.title).collect();
    assert_eq!(titles, vec!["Lemon Desert"]);

    // Search wins over the active category.
    view.set_search_phrase("gr");
    assert_eq!(view.visible().len(), 2);

    view.set_search_phrase("");
    view.toggle_category("Desserts");
    assert_eq!(view.visible().len(), 3);
}
