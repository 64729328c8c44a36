// Tests for HTTP handlers
// Handlers are called directly with extractor values; routing is covered by router construction

use super::*;
use crate::config::Config;
use crate::service::load_engine;
use tempfile::TempDir;

fn ready_service(temp_dir: &TempDir) -> Arc<ConversionService> {
    let config = Config {
        corrections_path: Some(temp_dir.path().join("corrections.json")),
        ..Config::default()
    };
    let engine = load_engine(&config).unwrap();
    Arc::new(ConversionService::with_engine(config, engine))
}

fn pending_service() -> Arc<ConversionService> {
    Arc::new(ConversionService::new(Config::default()))
}

#[tokio::test]
async fn test_convert_text_and_data() {
    let temp_dir = TempDir::new().unwrap();
    let service = ready_service(&temp_dir);

    let Json(response) = convert(
        State(service.clone()),
        Ok(Json(json!({"text": "The organization will analyze the color data."}))),
    )
    .await
    .unwrap();
    assert_eq!(
        response,
        json!({"converted": "The organisation will analyse the colour data."})
    );

    let Json(response) = convert(
        State(service),
        Ok(Json(json!({"data": {"tags": ["organize", "customize", "finalize"]}}))),
    )
    .await
    .unwrap();
    assert_eq!(
        response,
        json!({"converted": {"tags": ["organise", "customise", "finalise"]}})
    );
}

#[tokio::test]
async fn test_convert_rejects_non_string_text() {
    let temp_dir = TempDir::new().unwrap();
    let service = ready_service(&temp_dir);

    let error = convert(State(service), Ok(Json(json!({"text": 12}))))
        .await
        .unwrap_err();
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert_before_initialization_is_unavailable() {
    let error = convert(State(pending_service()), Ok(Json(json!({"text": "color"}))))
        .await
        .unwrap_err();
    assert_eq!(error, ApiError::Convert(ConvertError::NotInitialized));
    assert_eq!(error.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_health_reflects_status() {
    let temp_dir = TempDir::new().unwrap();
    let ready = health(State(ready_service(&temp_dir))).await.into_response();
    assert_eq!(ready.status(), StatusCode::OK);

    let pending = health(State(pending_service())).await.into_response();
    assert_eq!(pending.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_corrections_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let service = ready_service(&temp_dir);

    let Json(added) = add_corrections(
        State(service.clone()),
        Ok(Json(json!({"sidewalk": "footpath"}))),
    )
    .await
    .unwrap();
    assert_eq!(added, json!({"added": 1}));
    assert!(temp_dir.path().join("corrections.json").exists());

    let Json(converted) = convert(
        State(service.clone()),
        Ok(Json(json!({"text": "Walk on the sidewalk"}))),
    )
    .await
    .unwrap();
    assert_eq!(converted, json!({"converted": "Walk on the footpath"}));

    let Json(listed) = list_corrections(State(service.clone())).await.unwrap();
    assert_eq!(listed, json!({"sidewalk": "footpath"}));

    let status = remove_correction(State(service.clone()), Path("sidewalk".to_string()))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let missing = remove_correction(State(service.clone()), Path("sidewalk".to_string()))
        .await
        .unwrap_err();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    clear_corrections(State(service)).await.unwrap();
}

#[tokio::test]
async fn test_custom_mappings_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let service = ready_service(&temp_dir);

    add_custom_mappings(State(service.clone()), Ok(Json(json!({"zip": "X", "zip code": "nope"}))))
        .await
        .unwrap();
    let Json(listed) = list_custom_mappings(State(service.clone())).await.unwrap();
    assert_eq!(listed, json!({"zip": "X", "zip code": "nope"}));

    // Built-in phrase map already turned "zip code" into "postcode"
    assert_eq!(service.convert("zip code and zip").unwrap(), "postcode and X");

    remove_custom_mapping(State(service.clone()), Path("zip".to_string()))
        .await
        .unwrap();
    clear_custom_mappings(State(service.clone())).await.unwrap();
    let Json(listed) = list_custom_mappings(State(service)).await.unwrap();
    assert_eq!(listed, json!({}));
}

#[tokio::test]
async fn test_mapping_body_validation() {
    let temp_dir = TempDir::new().unwrap();
    let service = ready_service(&temp_dir);

    let error = add_custom_mappings(State(service.clone()), Ok(Json(json!({"zip": 5}))))
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::BadRequest(_)));

    let error = add_custom_mappings(State(service.clone()), Ok(Json(json!(["zip"]))))
        .await
        .unwrap_err();
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);

    let error = add_custom_mappings(State(service), Ok(Json(json!({" ": "x"}))))
        .await
        .unwrap_err();
    assert_eq!(error, ApiError::Store(StoreError::EmptyPhrase));
}

#[test]
fn test_persistence_error_maps_to_server_error() {
    let error = ApiError::Store(StoreError::PersistenceError("disk full".to_string()));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_help_lists_convert_endpoint() {
    let Json(body) = help().await;
    assert!(body["endpoints"]["POST /convert"].is_string());
}

#[test]
fn test_router_builds() {
    let _ = crate::server::router(pending_service());
}
