//! In-memory JSON resource server for the `/items` collection.

use api_types::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};

pub use collection::Collection;
pub use server::{router, run_with_listener, spawn_with_listener};

mod collection;
mod items;
mod server;

pub enum ServerError {
    /// No item with this identifier, as written in the request path.
    NotFound(String),
    IdsExhausted,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::NotFound(id) => (StatusCode::NOT_FOUND, format!("item {id} not found")),
            ServerError::IdsExhausted => (
                StatusCode::INSUFFICIENT_STORAGE,
                "no item ids left".to_string(),
            ),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api_types::item::{Item, ItemId};
    use axum::{
        Router,
        body::Body,
        http::{Request, header},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        router(Arc::new(Collection::new()))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = ServerError::NotFound("1".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn exhausted_ids_map_to_507() {
        let res = ServerError::IdsExhausted.into_response();
        assert_eq!(res.status(), StatusCode::INSUFFICIENT_STORAGE);
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let res = app()
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let items: Vec<Item> = body_json(res).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn create_returns_201_with_assigned_id() {
        let res = app()
            .oneshot(json_request(
                "POST",
                "/items",
                serde_json::json!({"name": "A", "description": "a"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let item: Item = body_json(res).await;
        assert_eq!(item.id, ItemId::Number(1));
        assert_eq!(item.name, "A");
    }

    #[tokio::test]
    async fn replace_then_delete_round_trip() {
        let app = app();

        let res = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/items",
                serde_json::json!({"name": "A", "description": "a"}),
            ))
            .await
            .unwrap();
        let created: Item = body_json(res).await;

        let res = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/items/{}", created.id),
                serde_json::json!({"name": "A2", "description": "a"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let updated: Item = body_json(res).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "A2");

        let res = app
            .clone()
            .oneshot(
                Request::delete(format!("/items/{}", created.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let items: Vec<Item> = body_json(res).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn unknown_id_returns_404_with_error_body() {
        let res = app()
            .oneshot(json_request(
                "PUT",
                "/items/99",
                serde_json::json!({"name": "x", "description": "y"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = body_json(res).await;
        assert_eq!(body.error, "item 99 not found");

        let res = app()
            .oneshot(Request::delete("/items/99").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let res = app()
            .oneshot(json_request(
                "POST",
                "/items",
                serde_json::json!({"name": "only name"}),
            ))
            .await
            .unwrap();
        assert!(res.status().is_client_error());
    }

    #[tokio::test]
    async fn seeded_string_ids_can_be_replaced_and_deleted() {
        let seeded: Vec<Item> =
            serde_json::from_str(r#"[{"id":"1","name":"A","description":"a"}]"#).unwrap();
        let app = router(Arc::new(Collection::with_items(seeded)));

        let res = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/items/1",
                serde_json::json!({"name": "A2", "description": "a"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let updated: Item = body_json(res).await;
        assert_eq!(updated.id, ItemId::Text("1".to_string()));
        assert_eq!(updated.name, "A2");

        let res = app
            .clone()
            .oneshot(Request::delete("/items/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = app
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let items: Vec<Item> = body_json(res).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn create_is_refused_when_ids_are_exhausted() {
        let app = router(Arc::new(Collection::with_items(vec![Item {
            id: ItemId::Number(u64::MAX),
            name: "A".to_string(),
            description: "a".to_string(),
        }])));

        let res = app
            .oneshot(json_request(
                "POST",
                "/items",
                serde_json::json!({"name": "B", "description": "b"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INSUFFICIENT_STORAGE);
    }
}
