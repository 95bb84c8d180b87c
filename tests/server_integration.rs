use axum_test::TestServer;
use grassroots_app::AppState;
use grassroots_app::chain::{ChainClient, JsonRpc, SignatureProvider};
use grassroots_app::model::User;
use grassroots_app::server::router;

fn test_server(signer: SignatureProvider) -> TestServer {
    let chain = ChainClient {
        rpc: JsonRpc::new("http://127.0.0.1:8888").unwrap(),
        signer,
    };
    let state = AppState::new(chain, User::new("X", "http://img"));
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_index_renders_page() {
    let server = test_server(SignatureProvider::empty());

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"class="App""#), "{html}");
    assert!(html.contains(r#"<span class="userName">X</span>"#), "{html}");
    assert!(html.contains("http://img"), "{html}");
    assert!(html.contains("craig.tf"), "{html}");
}

#[tokio::test]
async fn test_profile_returns_configured_user() {
    let server = test_server(SignatureProvider::empty());

    let response = server.get("/api/profile").await;
    response.assert_status_ok();
    response.assert_json(&User::new("X", "http://img"));
}

#[tokio::test]
async fn test_health_never_exposes_keys() {
    let key = "5KQwrPbwdL6PhXujxW37FSSQZ1JiwsST4cqQzDeyXtP79zkvFD3";
    let server = test_server(SignatureProvider::new([key]).unwrap());

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["signing_keys"], 1);
    assert_eq!(body["rpc_endpoint"], "http://127.0.0.1:8888/");
    assert!(!response.text().contains(key));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = test_server(SignatureProvider::empty());

    let response = server.get("/does-not-exist").await;
    response.assert_status_not_found();
}
