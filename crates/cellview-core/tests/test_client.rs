#[allow(dead_code)]
mod common;

use cellview_core::client::{HttpBackend, ImageBackend};
use cellview_core::error::CellviewError;
use cellview_core::options::SimulationOptions;
use cellview_core::request::SimulationForm;

#[test]
fn test_posts_json_to_generate_endpoint() {
    let (url, server) = common::spawn_stub(200, &common::image_response_body(1, 1));
    let backend = HttpBackend::new(url);
    let request = SimulationForm::from_options(&SimulationOptions::builtin()).to_request();

    let response = backend.generate(&request).unwrap();
    assert!(response.image_data.starts_with("data:image/png;base64,"));

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /generate_image HTTP/1.1");
    assert_eq!(captured.header("content-type"), Some("application/json"));

    let body: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(body["rule"], "18");
    assert_eq!(body["init_method"], "random");
    assert_eq!(body["print_method"], "png");
    assert_eq!(body["density"], "0.5");
    assert_eq!(body["cell_space"], "100");
}

#[test]
fn test_large_response_body_is_read_whole() {
    // Larger than the 10 MB cap of a buffered string read.
    let payload = "A".repeat(12 * 1024 * 1024);
    let body = format!("{{\"image_data\":\"data:,{payload}\"}}");
    let (url, server) = common::spawn_stub(200, &body);

    let response = HttpBackend::new(url)
        .generate(&SimulationForm::default().to_request())
        .unwrap();
    server.join().unwrap();

    assert_eq!(response.image_data.len(), "data:,".len() + payload.len());
    assert!(response.image_data.ends_with("AAAA"));
}

#[test]
fn test_server_error_status_is_failure() {
    let (url, server) = common::spawn_stub(500, "{\"detail\":\"boom\"}");
    let backend = HttpBackend::new(url);
    let err = backend
        .generate(&SimulationForm::default().to_request())
        .unwrap_err();
    server.join().unwrap();

    match err {
        CellviewError::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("boom"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_client_error_status_is_failure() {
    let (url, server) = common::spawn_stub(422, "{}");
    let err = HttpBackend::new(url)
        .generate(&SimulationForm::default().to_request())
        .unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, CellviewError::HttpStatus { status: 422, .. }));
    assert_eq!(err.to_string(), "HTTP error! status: 422");
}

#[test]
fn test_malformed_success_body_is_json_error() {
    let (url, server) = common::spawn_stub(200, "{\"unexpected\":true}");
    let err = HttpBackend::new(url)
        .generate(&SimulationForm::default().to_request())
        .unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, CellviewError::Json(_)));
}

#[test]
fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = HttpBackend::new(format!("http://127.0.0.1:{port}"))
        .generate(&SimulationForm::default().to_request())
        .unwrap_err();
    assert!(matches!(err, CellviewError::Transport(_)));
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let backend = HttpBackend::new("http://example.test:8000/");
    assert_eq!(backend.endpoint(), "http://example.test:8000/generate_image");
}
