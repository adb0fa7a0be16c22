use std::time::Duration;

use httpmock::prelude::*;
use scamshield::pipeline::redirects::trace_redirects;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_millis(2000))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn direct_response_yields_single_entry_chain() {
    let server = MockServer::start();
    let _ok = server.mock(|when, then| {
        when.method(HEAD).path("/landing");
        then.status(200);
    });

    let start = format!("{}/landing", server.base_url());
    let chain = trace_redirects(&client(), &start, 5).await;
    assert_eq!(chain, vec![start]);
}

#[tokio::test]
async fn three_hops_produce_four_entries() {
    let server = MockServer::start();
    let _a = server.mock(|when, then| {
        when.method(HEAD).path("/a");
        then.status(301).header("Location", "/b");
    });
    let _b = server.mock(|when, then| {
        when.method(HEAD).path("/b");
        then.status(302).header("Location", "/c");
    });
    let _c = server.mock(|when, then| {
        when.method(HEAD).path("/c");
        then.status(307).header("Location", "/final");
    });
    let _final = server.mock(|when, then| {
        when.method(HEAD).path("/final");
        then.status(200);
    });

    let base = server.base_url();
    let chain = trace_redirects(&client(), &format!("{base}/a"), 5).await;
    assert_eq!(
        chain,
        vec![
            format!("{base}/a"),
            format!("{base}/b"),
            format!("{base}/c"),
            format!("{base}/final"),
        ]
    );
}

#[tokio::test]
async fn relative_location_is_resolved_against_current_hop() {
    let server = MockServer::start();
    let _a = server.mock(|when, then| {
        when.method(HEAD).path("/deep/a");
        then.status(302).header("Location", "b");
    });
    let _b = server.mock(|when, then| {
        when.method(HEAD).path("/deep/b");
        then.status(200);
    });

    let base = server.base_url();
    let chain = trace_redirects(&client(), &format!("{base}/deep/a"), 5).await;
    assert_eq!(chain[1], format!("{base}/deep/b"));
}

#[tokio::test]
async fn endless_loop_is_truncated_to_hop_cap() {
    let server = MockServer::start();
    let _ping = server.mock(|when, then| {
        when.method(HEAD).path("/ping");
        then.status(302).header("Location", "/pong");
    });
    let _pong = server.mock(|when, then| {
        when.method(HEAD).path("/pong");
        then.status(302).header("Location", "/ping");
    });

    let chain = trace_redirects(&client(), &format!("{}/ping", server.base_url()), 5).await;
    assert_eq!(chain.len(), 5);
}

#[tokio::test]
async fn missing_location_header_stops_the_walk() {
    let server = MockServer::start();
    let _bare = server.mock(|when, then| {
        when.method(HEAD).path("/bare");
        then.status(302);
    });

    let start = format!("{}/bare", server.base_url());
    let chain = trace_redirects(&client(), &start, 5).await;
    assert_eq!(chain, vec![start]);
}

#[tokio::test]
async fn transport_error_returns_partial_chain() {
    // nothing listens on this port; the first hop fails and the chain
    // still contains the starting URL
    let chain = trace_redirects(&client(), "http://127.0.0.1:9/start", 5).await;
    assert_eq!(chain, vec!["http://127.0.0.1:9/start".to_string()]);
}

#[tokio::test]
async fn unparseable_start_returns_partial_chain() {
    let chain = trace_redirects(&client(), "http://not a url at all", 5).await;
    assert_eq!(chain.len(), 1);
}
