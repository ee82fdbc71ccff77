//! Team CRUD endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::{Team, TeamFields, TeamId};

/// Response body for a created team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedTeamResponse {
    pub id: TeamId,
    pub message: String,
}

/// Response body for a deleted team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeletedTeamResponse {
    pub deleted: bool,
    pub id: TeamId,
}

/// Create the teams router
pub fn create_teams_router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{team_id}",
            get(get_team).put(update_team).delete(delete_team),
        )
}

/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    debug!("Listing teams");

    let teams = state.team_service.list().await?;
    Ok(Json(teams))
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(fields): Json<TeamFields>,
) -> Result<(StatusCode, Json<CreatedTeamResponse>), ApiError> {
    debug!(name = ?fields.name, "Creating team");

    let id = state.team_service.create(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedTeamResponse {
            id,
            message: "Team added successfully".to_string(),
        }),
    ))
}

/// GET /teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<Team>, ApiError> {
    debug!(team_id = %team_id, "Getting team");

    let team = state.team_service.get(&team_id).await?;
    Ok(Json(team))
}

/// PUT /teams/{team_id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(fields): Json<TeamFields>,
) -> Result<Json<Team>, ApiError> {
    debug!(team_id = %team_id, "Updating team");

    let team = state.team_service.update(&team_id, fields).await?;
    Ok(Json(team))
}

/// DELETE /teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<DeletedTeamResponse>, ApiError> {
    debug!(team_id = %team_id, "Deleting team");

    let id = state.team_service.delete(&team_id).await?;
    Ok(Json(DeletedTeamResponse { deleted: true, id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::SqliteConfig;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn create_app() -> Router {
        let state = crate::create_app_state(&SqliteConfig::in_memory())
            .await
            .unwrap();
        create_teams_router().with_state(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_lifecycle_scenario() {
        let app = create_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "Lions", "coach": "Sam", "city": "Denver"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 1);

        let (status, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": 1, "name": "Lions", "coach": "Sam", "city": "Denver"}])
        );

        let (status, _) = send(
            &app,
            Method::PUT,
            "/teams/1",
            Some(json!({"name": "Lions", "coach": "Pat", "city": "Denver"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body[0]["coach"], "Pat");

        let (status, body) = send(&app, Method::DELETE, "/teams/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"deleted": true, "id": 1}));

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_missing_name_is_bad_request() {
        let app = create_app().await;

        let (status, body) = send(&app, Method::POST, "/teams", Some(json!({"coach": "Sam"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["type"], "invalid_request_error");

        let (status, _) = send(&app, Method::POST, "/teams", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::POST, "/teams", Some(json!({"name": null}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_update_replaces_fields_wholesale() {
        let app = create_app().await;
        send(
            &app,
            Method::POST,
            "/teams",
            Some(json!({"name": "Lions", "coach": "Sam", "city": "Denver"})),
        )
        .await;

        let (status, body) = send(&app, Method::PUT, "/teams/1", Some(json!({"name": "Cubs"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 1, "name": "Cubs", "coach": null, "city": null}));

        let (_, body) = send(&app, Method::GET, "/teams/1", None).await;
        assert_eq!(body, json!({"id": 1, "name": "Cubs", "coach": null, "city": null}));
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let app = create_app().await;
        send(&app, Method::POST, "/teams", Some(json!({"name": "Lions"}))).await;

        let (status, body) = send(&app, Method::PUT, "/teams/7", Some(json!({"name": "X"}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["type"], "not_found_error");

        let (status, _) = send(&app, Method::DELETE, "/teams/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body, json!([{"id": 1, "name": "Lions", "coach": null, "city": null}]));
    }

    #[tokio::test]
    async fn test_repeat_delete_is_not_found() {
        let app = create_app().await;
        send(&app, Method::POST, "/teams", Some(json!({"name": "Lions"}))).await;

        let (status, _) = send(&app, Method::DELETE, "/teams/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::DELETE, "/teams/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ids_increase_after_delete() {
        let app = create_app().await;

        let (_, first) = send(&app, Method::POST, "/teams", Some(json!({"name": "A"}))).await;
        let (_, second) = send(&app, Method::POST, "/teams", Some(json!({"name": "B"}))).await;
        send(&app, Method::DELETE, "/teams/2", None).await;
        let (_, third) = send(&app, Method::POST, "/teams", Some(json!({"name": "C"}))).await;

        assert_eq!(first["id"], 1);
        assert_eq!(second["id"], 2);
        assert_eq!(third["id"], 3);
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let app = create_app().await;

        let (status, body) = send(&app, Method::DELETE, "/teams/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["param"], "id");
    }

    #[tokio::test]
    async fn test_non_string_name_is_bad_request() {
        let app = create_app().await;

        let (status, body) = send(&app, Method::POST, "/teams", Some(json!({"name": 123}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "json_parse_error");

        send(&app, Method::POST, "/teams", Some(json!({"name": "Lions"}))).await;
        let (status, _) = send(&app, Method::PUT, "/teams/1", Some(json!({"name": ["x"]}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, Method::GET, "/teams", None).await;
        assert_eq!(body[0]["name"], "Lions");
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let app = create_app().await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/teams")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "json_parse_error");
    }
}
