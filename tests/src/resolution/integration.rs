use ipresolve_core::Error;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support::{self, device_path, interface_path};

#[tokio::test]
async fn line_with_single_address() {
    let server = support::inventory().await;
    let resolver = support::authenticated_resolver(&server).await;

    let out = resolver.process_line("connect to 10.0.0.1 now").await;

    assert_eq!(out, "connect to switch-a now");
}

#[tokio::test]
async fn every_occurrence_is_replaced() {
    let server = support::inventory().await;
    let resolver = support::authenticated_resolver(&server).await;

    let out = resolver.process_line("10.0.0.1 and 10.0.0.1").await;

    assert_eq!(out, "switch-a and switch-a");
}

#[tokio::test]
async fn invalid_address_untouched_and_never_queried() {
    let server = support::inventory().await;
    let resolver = support::authenticated_resolver(&server).await;
    let line = "peer 300.300.300.300 unreachable";

    let out = resolver.process_line(line).await;

    assert_eq!(out, line);
    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() == "POST"));
}

#[tokio::test]
async fn object_response_means_not_found() {
    let server = support::controller().await;
    support::mount_unknown_interface(&server, "10.9.9.9").await;
    Mock::given(method("GET"))
        .and(path(device_path("dev-a")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let resolver = support::authenticated_resolver(&server).await;

    assert_eq!(resolver.lookup_hostname("10.9.9.9").await.unwrap(), None);
    assert_eq!(resolver.process_line("host 10.9.9.9 down").await, "host 10.9.9.9 down");
}

#[tokio::test]
async fn first_interface_wins() {
    let server = support::controller().await;
    support::mount_interfaces(&server, "10.1.1.1", &["dev-first", "dev-second"]).await;
    support::mount_device(&server, "dev-first", "core-1").await;
    Mock::given(method("GET"))
        .and(path(device_path("dev-second")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let resolver = support::authenticated_resolver(&server).await;

    assert_eq!(resolver.resolve("10.1.1.1").await.as_deref(), Some("core-1"));
}

#[tokio::test]
async fn empty_interface_list_means_not_found() {
    let server = support::controller().await;
    support::mount_interfaces(&server, "10.1.1.2", &[]).await;
    let resolver = support::authenticated_resolver(&server).await;

    assert_eq!(resolver.lookup_hostname("10.1.1.2").await.unwrap(), None);
}

#[tokio::test]
async fn device_failure_counts_as_miss() {
    let server = support::controller().await;
    support::mount_interfaces(&server, "10.2.2.2", &["dev-broken"]).await;
    Mock::given(method("GET"))
        .and(path(device_path("dev-broken")))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Internal Server Error</h1>"))
        .mount(&server)
        .await;
    let resolver = support::authenticated_resolver(&server).await;

    let err = resolver.lookup_hostname("10.2.2.2").await.unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));

    assert_eq!(resolver.resolve("10.2.2.2").await, None);
    assert_eq!(resolver.process_line("via 10.2.2.2").await, "via 10.2.2.2");
}

#[tokio::test]
async fn device_without_hostname_is_a_miss() {
    let server = support::controller().await;
    support::mount_interfaces(&server, "10.3.3.3", &["dev-anon"]).await;
    Mock::given(method("GET"))
        .and(path(device_path("dev-anon")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "id": "dev-anon", "hostname": null }
        })))
        .mount(&server)
        .await;
    let resolver = support::authenticated_resolver(&server).await;

    assert_eq!(resolver.lookup_hostname("10.3.3.3").await.unwrap(), None);
}

#[tokio::test]
async fn repeated_addresses_are_looked_up_each_time() {
    let server = support::controller().await;
    Mock::given(method("GET"))
        .and(path(interface_path("10.4.4.4")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{ "deviceId": "dev-r" }]
        })))
        .expect(2)
        .mount(&server)
        .await;
    support::mount_device(&server, "dev-r", "edge-r").await;
    let resolver = support::authenticated_resolver(&server).await;

    let out = resolver.process_line("10.4.4.4 10.4.4.4").await;

    assert_eq!(out, "edge-r edge-r");
}

#[tokio::test]
async fn text_keeps_line_structure() {
    let server = support::inventory().await;
    support::mount_unknown_interface(&server, "10.9.9.9").await;
    let resolver = support::authenticated_resolver(&server).await;
    let text = "%LINK-3-UPDOWN: 10.0.0.1 up\n\nneighbor 10.0.0.2 via 10.9.9.9\nversion 17.9.4\n";

    let out = resolver.process_text(text).await;

    assert_eq!(
        out,
        "%LINK-3-UPDOWN: switch-a up\n\nneighbor router-b via 10.9.9.9\nversion 17.9.4\n"
    );
}

#[tokio::test]
async fn resolving_twice_changes_nothing_more() {
    let server = support::inventory().await;
    let resolver = support::authenticated_resolver(&server).await;

    let once = resolver.process_text("a 10.0.0.1\nb 10.0.0.2").await;
    let twice = resolver.process_text(&once).await;

    assert_eq!(once, twice);
}
