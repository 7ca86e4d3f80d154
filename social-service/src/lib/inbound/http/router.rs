use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::current_user::current_user;
use super::handlers::auth::login::login;
use super::handlers::posts::comment_post::comment_post;
use super::handlers::posts::create_post::create_post;
use super::handlers::posts::delete_post::delete_post;
use super::handlers::posts::get_post::get_post;
use super::handlers::posts::like_post::like_post;
use super::handlers::posts::list_posts::list_posts;
use super::handlers::posts::unlike_post::unlike_post;
use super::handlers::profiles::get_my_profile::get_my_profile;
use super::handlers::profiles::upsert_profile::upsert_profile;
use super::handlers::users::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::post::service::PostService;
use crate::domain::profile::service::ProfileService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::post::PostgresPostRepository;
use crate::outbound::repositories::profile::PostgresProfileRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub post_service: Arc<PostService<PostgresPostRepository, PostgresUserRepository>>,
    pub profile_service: Arc<ProfileService<PostgresProfileRepository, PostgresUserRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    post_service: Arc<PostService<PostgresPostRepository, PostgresUserRepository>>,
    profile_service: Arc<ProfileService<PostgresProfileRepository, PostgresUserRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        post_service,
        profile_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/api/users", post(register))
        .route("/api/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_user))
        .route("/api/posts", post(create_post).get(list_posts))
        .route("/api/posts/:post_id", get(get_post).delete(delete_post))
        .route("/api/posts/:post_id/like", put(like_post))
        .route("/api/posts/:post_id/unlike", put(unlike_post))
        .route("/api/posts/:post_id/comments", post(comment_post))
        .route(
            "/api/profiles/me",
            get(get_my_profile).put(upsert_profile),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
