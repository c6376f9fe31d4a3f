use aidbox_client::{
    error::{ErrorClass, ErrorKind},
    format::WireFormat,
    AidboxClient, LicenseApi,
};
use aidbox_models::{
    id::LicenseId,
    license::License,
    rpc::{LicenseResult, RpcRequest, RpcResponse},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

const ISSUED: &str = r"
result:
  license:
    id: lic-1
    name: acme
    product: aidbox
    type: standard
    status: active
    maxInstances: 5
    offline: false
    creator: {id: user-1, resourceType: User}
    project: {id: proj-1, resourceType: Project}
  jwt: abc.def.ghi
";

#[derive(Clone, Debug)]
struct Recorded {
    headers: HeaderMap,
    body: Vec<u8>,
}

#[derive(Clone)]
enum Reply {
    Canned(StatusCode, String),
    Echo(WireFormat),
}

#[derive(Clone)]
struct Endpoint {
    reply: Reply,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

async fn handle(
    State(endpoint): State<Endpoint>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    endpoint.requests.lock().unwrap().push(Recorded {
        headers,
        body: body.to_vec(),
    });
    match endpoint.reply {
        Reply::Canned(status, body) => (status, body),
        Reply::Echo(format) => {
            let request = format
                .decode::<RpcRequest<BTreeMap<String, String>>>(&body)
                .unwrap();
            let license = License {
                id: LicenseId::new("lic-echo"),
                name: request.params["name"].clone(),
                product: request.params["product"].clone(),
                kind: request.params["type"].clone(),
                ..License::default()
            };
            let response = RpcResponse {
                result: LicenseResult {
                    license,
                    jwt: "echo.jwt".into(),
                },
            };
            let bytes = format.encode(&response).unwrap();
            (StatusCode::OK, String::from_utf8(bytes).unwrap())
        }
    }
}

async fn spawn(reply: Reply) -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let endpoint = Endpoint {
        reply,
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/rpc", post(handle))
        .with_state(endpoint);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/rpc"), requests)
}

fn params(recorded: &Recorded) -> RpcRequest<BTreeMap<String, String>> {
    serde_yaml::from_slice(&recorded.body).unwrap()
}

#[tokio::test]
async fn issue_echoes_input() {
    let (endpoint, requests) = spawn(Reply::Echo(WireFormat::Yaml)).await;
    let client = AidboxClient::new(&endpoint, "secret");

    let response = client
        .issue_license("acme", "aidbox", "standard")
        .await
        .unwrap();
    assert_eq!(response.license.name, "acme");
    assert_eq!(response.license.product, "aidbox");
    assert_eq!(response.license.kind, "standard");
    assert_eq!(response.jwt, "echo.jwt");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].headers[header::CONTENT_TYPE], "text/yaml");
    assert_eq!(requests[0].headers[header::ACCEPT], "text/yaml");
    let request = params(&requests[0]);
    assert_eq!(request.method, "portal.portal/issue-license");
    assert_eq!(request.params["token"], "secret");
    assert_eq!(request.params["name"], "acme");
}

#[tokio::test]
async fn issue_decodes_full_envelope() {
    let (endpoint, _) = spawn(Reply::Canned(StatusCode::OK, ISSUED.into())).await;
    let client = AidboxClient::new(&endpoint, "secret");

    let response = client
        .issue_license("acme", "aidbox", "standard")
        .await
        .unwrap();
    assert_eq!(response.license.id, LicenseId::new("lic-1"));
    assert_eq!(response.license.status, "active");
    assert_eq!(response.license.max_instances, 5);
    assert_eq!(response.license.creator.id, "user-1");
    assert_eq!(response.license.project.resource_type, "Project");
    assert_eq!(response.jwt, "abc.def.ghi");
}

#[tokio::test]
async fn non_ok_status_is_a_protocol_error() {
    let (endpoint, _) = spawn(Reply::Canned(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal error".into(),
    ))
    .await;
    let client = AidboxClient::new(&endpoint, "secret");
    let id = LicenseId::new("lic-1");

    let errors = vec![
        client
            .issue_license("acme", "aidbox", "standard")
            .await
            .unwrap_err(),
        client.get_license(&id).await.unwrap_err(),
        client.delete_license(&id).await.unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.class(), ErrorClass::Protocol);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.body(), Some(&b"internal error"[..]));
        let message = err.to_string();
        assert!(message.contains("500"), "{message}");
        assert!(message.contains("internal error"), "{message}");
    }
}

#[tokio::test]
async fn success_status_other_than_ok_is_rejected() {
    let (endpoint, _) = spawn(Reply::Canned(StatusCode::CREATED, ISSUED.into())).await;
    let client = AidboxClient::new(&endpoint, "secret");

    let err = client
        .get_license(&LicenseId::new("lic-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Response { status, .. } if *status == StatusCode::CREATED
    ));
}

#[tokio::test]
async fn malformed_body_is_a_protocol_error() {
    for body in ["<html>oops</html>", "result: [1, 2", "", "result:\n  jwt: abc\n"] {
        let (endpoint, _) = spawn(Reply::Canned(StatusCode::OK, body.into())).await;
        let client = AidboxClient::new(&endpoint, "secret");

        let err = client
            .get_license(&LicenseId::new("lic-1"))
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::Protocol, "{body:?}");
        assert!(matches!(err.kind(), ErrorKind::Deserialize { .. }));
        assert_eq!(err.body(), Some(body.as_bytes()));
    }
}

#[tokio::test]
async fn delete_sends_one_remove_request() {
    let (endpoint, requests) = spawn(Reply::Canned(StatusCode::OK, "ok".into())).await;
    let client = AidboxClient::new(&endpoint, "secret");

    client
        .delete_license(&LicenseId::new("lic-9"))
        .await
        .unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = params(&requests[0]);
    assert_eq!(request.method, "portal.portal/remove-license");
    assert_eq!(request.params.len(), 2);
    assert_eq!(request.params["id"], "lic-9");
    assert_eq!(request.params["token"], "secret");
}

#[tokio::test]
async fn json_format() {
    let (endpoint, requests) = spawn(Reply::Echo(WireFormat::Json)).await;
    let client = AidboxClient::with_format(&endpoint, "secret", WireFormat::Json);

    let response = client.issue_license("acme", "aidbox", "trial").await.unwrap();
    assert_eq!(response.license.kind, "trial");

    let requests = requests.lock().unwrap();
    assert_eq!(requests[0].headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(requests[0].headers[header::ACCEPT], "application/json");
    let request =
        serde_json::from_slice::<RpcRequest<BTreeMap<String, String>>>(&requests[0].body).unwrap();
    assert_eq!(request.method, "portal.portal/issue-license");
}

#[tokio::test]
async fn through_the_capability_trait() {
    let (endpoint, requests) = spawn(Reply::Canned(StatusCode::OK, ISSUED.into())).await;
    let api: Arc<dyn LicenseApi> = Arc::new(AidboxClient::new(&endpoint, "secret"));

    let response = api.get_license(&LicenseId::new("lic-1")).await.unwrap();
    assert_eq!(response.license.name, "acme");

    let request = params(&requests.lock().unwrap()[0]);
    assert_eq!(request.method, "portal.portal/get-license");
    assert_eq!(request.params["id"], "lic-1");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = AidboxClient::new(&format!("http://{addr}/rpc"), "secret");

    let err = client
        .get_license(&LicenseId::new("lic-1"))
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Transport);
    assert!(matches!(err.kind(), ErrorKind::Sending));
    assert_eq!(err.method(), "portal.portal/get-license");
}

#[tokio::test]
async fn invalid_endpoint_is_a_transport_error() {
    let client = AidboxClient::new("not a uri", "secret");

    let err = client
        .delete_license(&LicenseId::new("lic-1"))
        .await
        .unwrap_err();
    assert_eq!(err.class(), ErrorClass::Transport);
    assert!(matches!(err.kind(), ErrorKind::BuildingRequest));
}
