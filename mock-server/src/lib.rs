use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Incoming comment payload for POST and PUT. A client-supplied `id` is
/// ignored: the server owns id assignment.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Stored user. `address` and `company` are passed through as raw JSON so
/// the server stays agnostic to their internal shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<serde_json::Value>,
}

/// Incoming user payload for POST and PUT.
#[derive(Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Option<serde_json::Value>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<serde_json::Value>,
}

#[derive(Default)]
pub struct Store {
    comments: HashMap<i64, Comment>,
    users: HashMap<i64, User>,
    next_comment_id: i64,
    next_user_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/{id}", get(get_comment).put(update_comment))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    let store = db.read().await;
    let mut comments: Vec<Comment> = store.comments.values().cloned().collect();
    comments.sort_by_key(|c| c.id);
    Json(comments)
}

async fn create_comment(
    State(db): State<Db>,
    Json(input): Json<CommentPayload>,
) -> (StatusCode, Json<Comment>) {
    let mut store = db.write().await;
    store.next_comment_id += 1;
    let comment = Comment {
        id: store.next_comment_id,
        post_id: input.post_id,
        name: input.name,
        email: input.email,
        body: input.body,
    };
    store.comments.insert(comment.id, comment.clone());
    tracing::debug!("created comment {}", comment.id);
    (StatusCode::CREATED, Json(comment))
}

async fn get_comment(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Comment>, StatusCode> {
    let store = db.read().await;
    store
        .comments
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<CommentPayload>,
) -> Result<Json<Comment>, StatusCode> {
    let mut store = db.write().await;
    if !store.comments.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    // PUT replaces the stored resource; the id always comes from the path.
    let comment = Comment {
        id,
        post_id: input.post_id,
        name: input.name,
        email: input.email,
        body: input.body,
    };
    store.comments.insert(id, comment.clone());
    tracing::debug!("updated comment {id}");
    Ok(Json(comment))
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    let mut users: Vec<User> = store.users.values().cloned().collect();
    users.sort_by_key(|u| u.id);
    Json(users)
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserPayload>,
) -> (StatusCode, Json<User>) {
    let mut store = db.write().await;
    store.next_user_id += 1;
    let user = User {
        id: store.next_user_id,
        name: input.name,
        username: input.username,
        email: input.email,
        address: input.address,
        phone: input.phone,
        website: input.website,
        company: input.company,
    };
    store.users.insert(user.id, user.clone());
    tracing::debug!("created user {}", user.id);
    (StatusCode::CREATED, Json(user))
}

async fn get_user(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store
        .users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UserPayload>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    if !store.users.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let user = User {
        id,
        name: input.name,
        username: input.username,
        email: input.email,
        address: input.address,
        phone: input.phone,
        website: input.website,
        company: input.company,
    };
    store.users.insert(id, user.clone());
    tracing::debug!("updated user {id}");
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_serializes_with_camel_case_post_id() {
        let comment = Comment {
            id: 1,
            post_id: 9,
            name: "t".to_string(),
            email: "t@x.io".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["postId"], 9);
        assert!(json.get("post_id").is_none());
    }

    #[test]
    fn comment_payload_rejects_missing_email() {
        let result: Result<CommentPayload, _> =
            serde_json::from_str(r#"{"postId":1,"name":"n","body":"b"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn comment_payload_ignores_client_supplied_id() {
        let input: CommentPayload = serde_json::from_str(
            r#"{"id":99,"postId":1,"name":"n","email":"e@x.io","body":"b"}"#,
        )
        .unwrap();
        assert_eq!(input.post_id, 1);
    }

    #[test]
    fn user_payload_accepts_minimal_fields() {
        let input: UserPayload =
            serde_json::from_str(r#"{"name":"n","username":"u","email":"e@x.io"}"#).unwrap();
        assert!(input.address.is_none());
        assert!(input.phone.is_none());
        assert!(input.company.is_none());
    }

    #[test]
    fn user_omits_empty_optionals_when_serialized() {
        let user = User {
            id: 1,
            name: "n".to_string(),
            username: "u".to_string(),
            email: "e@x.io".to_string(),
            address: None,
            phone: None,
            website: None,
            company: None,
        };
        let json = serde_json::to_value(&user).unwrap();
        for field in ["address", "phone", "website", "company"] {
            assert!(json.get(field).is_none(), "{field} should be omitted");
        }
    }

    #[test]
    fn user_passes_nested_objects_through_untouched() {
        let raw = r#"{"name":"n","username":"u","email":"e@x.io",
            "address":{"street":"Kulas Light","geo":{"lat":"-37.3159","lng":"81.1496"}}}"#;
        let input: UserPayload = serde_json::from_str(raw).unwrap();
        let address = input.address.unwrap();
        assert_eq!(address["geo"]["lat"], "-37.3159");
    }
}
