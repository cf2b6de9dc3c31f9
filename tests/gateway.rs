//! End-to-end tests against a running gateway.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

use common::SECRET;
use edge_gate::edge::Credential;
use edge_gate::http::check_reachability;

#[tokio::test]
async fn test_origin_requires_credential() {
    let site = tempfile::tempdir().unwrap();
    common::write_site(site.path());
    let gateway = common::start_gateway(common::config_for(site.path())).await;
    let client = common::client();

    let res = client.get(gateway.url("/docs/")).send().await.expect("Gateway unreachable");
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(res.headers()[WWW_AUTHENTICATE], "Basic");
    assert_eq!(res.text().await.unwrap(), "");

    let res = client
        .get(gateway.url("/docs/"))
        .header(AUTHORIZATION, "Basic d3Jvbmc6cGFzcw==")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn test_reachability_report() {
    let site = tempfile::tempdir().unwrap();
    common::write_site(site.path());
    let gateway = common::start_gateway(common::config_for(site.path())).await;
    let client = common::client();

    let report = check_reachability(&client, &gateway.url("/docs/"), None).await.unwrap();
    assert_eq!(report.status, StatusCode::UNAUTHORIZED);
    assert_eq!(report.challenge.as_deref(), Some("Basic"));
    assert_eq!(report.to_string(), "Status: 401 Unauthorized\nWWW-Authenticate: Basic");

    let credential = Credential::basic("id", "pass");
    let report = check_reachability(&client, &gateway.url("/docs/"), Some(&credential))
        .await
        .unwrap();
    assert_eq!(report.status, StatusCode::OK);
    assert_eq!(report.challenge, None);
    assert_eq!(report.to_string(), "Status: 200 OK");

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn test_default_documents_served() {
    let site = tempfile::tempdir().unwrap();
    common::write_site(site.path());
    let gateway = common::start_gateway(common::config_for(site.path())).await;
    let client = common::client();

    let cases = [
        ("/", "home"),
        ("/docs/", "docs"),
        ("/about", "about"),
        ("/about?tab=team", "about"),
        ("/app.js", "console.log(1);"),
        ("/index.html", "home"),
    ];
    for (path, expected) in cases {
        let res = client
            .get(gateway.url(path))
            .header(AUTHORIZATION, SECRET)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(res.text().await.unwrap(), expected, "{path}");
    }

    // Dotted directory names are taken as file references and not rewritten.
    let res = client
        .get(gateway.url("/v1.2/guide"))
        .header(AUTHORIZATION, SECRET)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn test_invoke_follows_event_contract() {
    let site = tempfile::tempdir().unwrap();
    let gateway = common::start_gateway(common::config_for(site.path())).await;
    let client = common::client();

    let denied: Value = client
        .post(gateway.url("/_edge/invoke"))
        .json(&json!({ "request": { "uri": "/", "headers": {} } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        denied,
        json!({
            "statusCode": 401,
            "statusDescription": "Unauthorized",
            "headers": { "www-authenticate": { "value": "Basic" } }
        })
    );

    let allowed: Value = client
        .post(gateway.url("/_edge/invoke"))
        .json(&json!({
            "request": {
                "method": "GET",
                "uri": "/about",
                "headers": { "Authorization": { "value": SECRET } }
            }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(allowed["uri"], "/about/index.html");
    assert_eq!(allowed["method"], "GET");
    assert_eq!(allowed["headers"]["authorization"]["value"], SECRET);

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn test_static_handlers_open() {
    let site = tempfile::tempdir().unwrap();
    let mut config = common::config_for(site.path());
    config.cookie.policy = Some("cG9saWN5".into());
    config.cookie.key_pair = Some("APKAEXAMPLE".into());
    let gateway = common::start_gateway(config).await;
    let client = common::client();

    let res = client
        .request(reqwest::Method::OPTIONS, gateway.url("/_edge/cors"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "https://app.example.com");
    assert_eq!(res.headers()["access-control-allow-credentials"], "true");
    assert!(res.headers().get("access-control-allow-headers").is_none());

    let res = client.get(gateway.url("/_edge/apply-cookie")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");
    let grant: Value = res.json().await.unwrap();
    assert_eq!(grant, json!({ "policy": "cG9saWN5", "keyPair": "APKAEXAMPLE" }));

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn test_reload_swaps_credential() {
    let site = tempfile::tempdir().unwrap();
    common::write_site(site.path());
    let config = common::config_for(site.path());
    let gateway = common::start_gateway(config.clone()).await;
    let client = common::client();

    let mut rotated = config;
    rotated.filter.credential = None;
    rotated.filter.username = Some("ops".into());
    rotated.filter.password = Some("rotated".into());
    gateway.config_updates.send(rotated).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = client
        .get(gateway.url("/"))
        .header(AUTHORIZATION, SECRET)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(gateway.url("/"))
        .basic_auth("ops", Some("rotated"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // A config without a credential is rejected; the last valid one stays.
    gateway.config_updates.send(common::config_for(site.path())).unwrap();
    let mut broken = common::config_for(site.path());
    broken.filter.credential = None;
    gateway.config_updates.send(broken).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = client
        .get(gateway.url("/"))
        .header(AUTHORIZATION, SECRET)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    gateway.shutdown.trigger();
}

#[tokio::test]
async fn test_concurrent_requests_independent() {
    let site = tempfile::tempdir().unwrap();
    common::write_site(site.path());
    let gateway = common::start_gateway(common::config_for(site.path())).await;
    let client = common::client();

    let mut tasks = Vec::new();
    for i in 0..40 {
        let client = client.clone();
        let url = gateway.url("/docs/");
        tasks.push(tokio::spawn(async move {
            let mut req = client.get(url);
            if i % 2 == 0 {
                req = req.header(AUTHORIZATION, SECRET);
            }
            (i, req.send().await.unwrap().status())
        }));
    }

    for task in tasks {
        let (i, status) = task.await.unwrap();
        let expected = if i % 2 == 0 { StatusCode::OK } else { StatusCode::UNAUTHORIZED };
        assert_eq!(status, expected, "request {i}");
    }

    gateway.shutdown.trigger();
}
