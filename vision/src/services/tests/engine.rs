//! Tests for the fallback orchestration engine

use crate::engine::AnalysisEngine;
use crate::error::VisionError;
use crate::services::SyntheticProvider;
use crate::traits::MockAnalysisProvider;
use shared::{AnalysisRequest, ProductAnalysisResponse, ProviderFailure, ValidationError};

fn request(refs: &[&str], product_id: Option<&str>) -> AnalysisRequest {
    AnalysisRequest {
        image_refs: refs.iter().map(|r| r.to_string()).collect(),
        product_id: product_id.map(|p| p.to_string()),
    }
}

fn canned_response() -> ProductAnalysisResponse {
    SyntheticProvider::generate(&["http://x/canned.jpg".to_string()])
}

#[tokio::test]
async fn test_primary_success_passes_through() {
    let mut primary = MockAnalysisProvider::new();
    primary.expect_name().return_const("primary");
    let canned = canned_response();
    let expected = canned.clone();
    primary
        .expect_analyze()
        .times(1)
        .returning(move |_| Ok(canned.clone()));

    let engine = AnalysisEngine::new(Box::new(primary));
    let response = engine
        .analyze(&request(&["http://x/a.jpg"], None))
        .await
        .unwrap();

    assert_eq!(response, expected);
}

#[tokio::test]
async fn test_every_failure_kind_triggers_fallback() {
    let failures = vec![
        ProviderFailure::AuthMissing,
        ProviderFailure::TransportFailure("connection refused".to_string()),
        ProviderFailure::Timeout,
        ProviderFailure::MalformedResponse("no content in reply".to_string()),
        ProviderFailure::SchemaViolation("gender_expression out of range".to_string()),
    ];

    for failure in failures {
        let mut primary = MockAnalysisProvider::new();
        primary.expect_name().return_const("primary");
        let kind = failure.clone();
        primary
            .expect_analyze()
            .times(1)
            .returning(move |_| Err(kind.clone()));

        let engine = AnalysisEngine::new(Box::new(primary));
        let req = request(&["http://x/a.jpg"], Some("sku-42"));
        let response = engine.analyze(&req).await.unwrap();

        response.validate().unwrap();
        assert_eq!(response.product_id.as_deref(), Some("sku-42"));

        // The fallback output is the deterministic synthetic response for
        // these refs, regardless of which failure kind triggered it.
        let synthetic = SyntheticProvider::generate(&req.image_refs);
        assert_eq!(
            response.continuous_dimensions,
            synthetic.continuous_dimensions
        );
        assert_eq!(response.discrete_attributes, synthetic.discrete_attributes);
    }
}

#[tokio::test]
async fn test_empty_refs_rejected_before_primary() {
    let mut primary = MockAnalysisProvider::new();
    primary.expect_analyze().times(0);

    let engine = AnalysisEngine::new(Box::new(primary));
    let result = engine.analyze(&request(&[], None)).await;

    assert!(matches!(
        result,
        Err(VisionError::Validation(ValidationError::EmptyInput))
    ));
}

#[tokio::test]
async fn test_malformed_reference_rejected_before_primary() {
    let mut primary = MockAnalysisProvider::new();
    primary.expect_analyze().times(0);

    let engine = AnalysisEngine::new(Box::new(primary));
    let result = engine
        .analyze(&request(&["http://x/a.jpg", "not a url"], None))
        .await;

    match result {
        Err(VisionError::Validation(ValidationError::MalformedReference { index, .. })) => {
            assert_eq!(index, 1);
        }
        other => panic!("expected MalformedReference, got {other:?}"),
    }
}

#[tokio::test]
async fn test_product_id_passthrough_on_primary_path() {
    let mut primary = MockAnalysisProvider::new();
    primary.expect_name().return_const("primary");
    let canned = canned_response();
    primary
        .expect_analyze()
        .times(1)
        .returning(move |_| Ok(canned.clone()));

    let engine = AnalysisEngine::new(Box::new(primary));
    let response = engine
        .analyze(&request(&["http://x/a.jpg"], Some("sku-42")))
        .await
        .unwrap();

    assert_eq!(response.product_id.as_deref(), Some("sku-42"));
}

#[tokio::test]
async fn test_missing_product_id_left_unset() {
    let engine = AnalysisEngine::new(Box::new(SyntheticProvider::new()));
    let response = engine
        .analyze(&request(&["http://x/a.jpg"], None))
        .await
        .unwrap();

    assert_eq!(response.product_id, None);
}
