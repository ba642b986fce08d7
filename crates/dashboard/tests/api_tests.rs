// ═══════════════════════════════════════════════════════════════════
// HTTP Client Tests — HttpPortfolioApi against a wiremock server.
// ═══════════════════════════════════════════════════════════════════

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use carbon_desk_core::errors::CoreError;
use carbon_desk_dashboard::api::{HttpPortfolioApi, PortfolioApi};
use carbon_desk_dashboard::filter::StatusFilter;

#[tokio::test]
async fn fetch_positions_decodes_the_camel_case_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "6f2f9a36-9c2e-4a4e-8cf5-2f5cf2a2a111",
                "projectName": "Forest Restoration",
                "tonnes": 100.0,
                "pricePerTonne": 10.0,
                "status": "available",
                "vintage": 2022
            },
            {
                "id": "6f2f9a36-9c2e-4a4e-8cf5-2f5cf2a2a222",
                "projectName": "Wind Farm",
                "tonnes": 50.0,
                "pricePerTonne": 20.0,
                "status": "retired",
                "vintage": 2021
            }
        ])))
        .mount(&server)
        .await;

    let api = HttpPortfolioApi::new(server.uri());
    let positions = api.fetch_positions().await.unwrap();

    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].project_name, "Forest Restoration");
    assert!((positions[1].price_per_tonne - 20.0).abs() < 1e-9);
    assert_eq!(positions[1].status.to_string(), "retired");
}

#[tokio::test]
async fn fetch_summary_decodes_a_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalTonnes": 150.0,
            "totalValue": 2000.0,
            "averagePricePerTonne": 13.333333333333334
        })))
        .mount(&server)
        .await;

    let api = HttpPortfolioApi::new(server.uri());
    let summary = api.fetch_summary(StatusFilter::All).await.unwrap();

    assert!((summary.total_tonnes - 150.0).abs() < 1e-9);
    assert!((summary.total_value - 2000.0).abs() < 1e-9);
    assert!((summary.average_price_per_tonne - 13.33).abs() < 0.01);
}

#[tokio::test]
async fn fetch_summary_sends_the_status_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio/summary"))
        .and(query_param("status", "retired"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalTonnes": 50.0,
            "totalValue": 1000.0,
            "averagePricePerTonne": 20.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpPortfolioApi::new(server.uri());
    let summary = api.fetch_summary(StatusFilter::Retired).await.unwrap();

    assert!((summary.total_tonnes - 50.0).abs() < 1e-9);
    assert!((summary.average_price_per_tonne - 20.0).abs() < 1e-9);
}

#[tokio::test]
async fn fetch_summary_maps_a_structured_400_into_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio/summary"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Invalid status parameter",
            "message": "Status must be one of: available, retired"
        })))
        .mount(&server)
        .await;

    let api = HttpPortfolioApi::new(server.uri());
    let err = api.fetch_summary(StatusFilter::All).await.unwrap_err();

    match err {
        CoreError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Invalid status parameter"));
            assert!(message.contains("available"));
            assert!(message.contains("retired"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_summary_maps_transport_failure_into_a_network_error() {
    // Nothing is listening on this port.
    let api = HttpPortfolioApi::new("http://127.0.0.1:1");
    let err = api.fetch_summary(StatusFilter::All).await.unwrap_err();

    assert!(matches!(err, CoreError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn null_average_from_an_empty_filtered_set_decodes_as_nan() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/portfolio/summary"))
        .and(query_param("status", "retired"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalTonnes": 0.0,
            "totalValue": 0.0,
            "averagePricePerTonne": null
        })))
        .mount(&server)
        .await;

    let api = HttpPortfolioApi::new(server.uri());
    let summary = api.fetch_summary(StatusFilter::Retired).await.unwrap();

    assert_eq!(summary.total_tonnes, 0.0);
    assert!(summary.average_price_per_tonne.is_nan());
}
