//! In-memory post API server.
//!
//! Mirrors the production backend's contract: integer ids assigned from an
//! autoincrementing counter starting at 1, plain 200 responses for every
//! success (including create and delete), and FastAPI-shaped bodies for
//! the delete confirmation and the 404 case. Backs the workspace's
//! integration tests and doubles as a local development server.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub type PostId = i64;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
}

/// Posts keyed by id. BTreeMap keeps list responses in id order, like the
/// reference backend's table scan.
#[derive(Default)]
pub struct Store {
    next_id: PostId,
    posts: BTreeMap<PostId, Post>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/", get(home))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Post not found"})))
}

async fn home() -> Json<Value> {
    Json(json!({"message": "Post API Server"}))
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(State(db): State<Db>, Json(input): Json<CreatePost>) -> Json<Post> {
    let mut store = db.write().await;
    store.next_id += 1;
    let post = Post {
        id: store.next_id,
        title: input.title,
        content: input.content,
    };
    store.posts.insert(post.id, post.clone());
    Json(post)
}

async fn get_post(
    State(db): State<Db>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, (StatusCode, Json<Value>)> {
    let store = db.read().await;
    store.posts.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<PostId>,
    Json(input): Json<UpdatePost>,
) -> Result<Json<Post>, (StatusCode, Json<Value>)> {
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or_else(not_found)?;
    post.title = input.title;
    post.content = input.content;
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<PostId>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut store = db.write().await;
    store
        .posts
        .remove(&id)
        .map(|_| Json(json!({"message": "Post deleted successfully"})))
        .ok_or_else(not_found)
}
