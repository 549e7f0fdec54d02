use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::{decode, DecodingKey, Validation};
use migration::MigratorTrait;
use serde_json::{json, Value};
use tower::Service;
use uuid::Uuid;

use server::routes::{self, auth::AuthSettings, auth::ServerState};
use service::auth::domain::TokenClaims;

const JWT_SECRET: &str = "test-secret";

/// Build the app against the real database; `None` skips the test when
/// Postgres is unreachable.
async fn build_app() -> Option<(Router, ServerState)> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    let state = ServerState {
        db,
        auth: AuthSettings {
            jwt_secret: JWT_SECRET.into(),
            refresh_secret: "test-refresh-secret".into(),
            access_ttl_secs: 1800,
            refresh_ttl_secs: 18000,
        },
    };
    let app = routes::build_router(state.clone(), tower_http::cors::CorsLayer::very_permissive());
    Some((app, state))
}

async fn seed_user(state: &ServerState, username: &str, password: &str, role: &str) {
    routes::auth::auth_service(state).register(username, password, role).await.unwrap();
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn post_json_auth(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> Value {
    let resp = app
        .clone()
        .call(post_json("/auth/login", json!({"USERNAME": username, "PASSWORD": password})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn login_returns_decodable_identity() -> anyhow::Result<()> {
    let Some((app, state)) = build_app().await else { return Ok(()) };
    let username = format!("clerk_{}", Uuid::new_v4());
    seed_user(&state, &username, "Secret123", "editor").await;

    let body = login(&app, &username, "Secret123").await;
    assert_eq!(body["statusText"], "Authenticated");
    assert_eq!(body["responseData"]["username"], username.as_str());
    assert_eq!(body["responseData"]["role"], "editor");

    let claims = decode::<TokenClaims>(
        body["token"].as_str().unwrap(),
        &DecodingKey::from_secret(JWT_SECRET.as_bytes()),
        &Validation::default(),
    )?
    .claims;
    assert_eq!(claims.sub, username);
    assert_eq!(claims.role, "editor");
    Ok(())
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() -> anyhow::Result<()> {
    let Some((app, state)) = build_app().await else { return Ok(()) };
    let username = format!("clerk_{}", Uuid::new_v4());
    seed_user(&state, &username, "Secret123", "editor").await;

    let wrong = app
        .clone()
        .call(post_json("/auth/login", json!({"USERNAME": username, "PASSWORD": "Wrong999"})))
        .await?;
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    let wrong = body_json(wrong).await;

    let missing = app
        .clone()
        .call(post_json(
            "/auth/login",
            json!({"USERNAME": format!("ghost_{}", Uuid::new_v4()), "PASSWORD": "Wrong999"}),
        ))
        .await?;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    let missing = body_json(missing).await;

    assert_eq!(wrong["statusText"], "INVALID USERNAME OR PASSWORD");
    assert_eq!(wrong["statusText"], missing["statusText"]);
    Ok(())
}

#[tokio::test]
async fn login_validates_input_fields() -> anyhow::Result<()> {
    let Some((app, _)) = build_app().await else { return Ok(()) };

    let resp = app
        .clone()
        .call(post_json("/auth/login", json!({"USERNAME": "", "PASSWORD": "Secret123"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["statusText"], "Username can not be blank");

    let resp = app
        .clone()
        .call(post_json("/auth/login", json!({"USERNAME": "someone", "PASSWORD": "abc"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn refresh_and_logout_flow() -> anyhow::Result<()> {
    let Some((app, state)) = build_app().await else { return Ok(()) };
    let username = format!("clerk_{}", Uuid::new_v4());
    seed_user(&state, &username, "Secret123", "editor").await;

    let session = login(&app, &username, "Secret123").await;
    let refresh_token = session["refreshToken"].as_str().unwrap().to_string();

    // mint a new access token
    let resp = app
        .clone()
        .call(post_json("/auth/token", json!({"refreshToken": refresh_token})))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert!(body["token"].as_str().is_some());

    // unknown token is forbidden
    let resp = app
        .clone()
        .call(post_json("/auth/token", json!({"refreshToken": "garbage"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // logout revokes, second logout is still a 200 no-op
    let resp = app
        .clone()
        .call(post_json("/auth/logout", json!({"refreshToken": refresh_token})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = app
        .clone()
        .call(post_json("/auth/token", json!({"refreshToken": refresh_token})))
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let resp = app
        .clone()
        .call(post_json("/auth/logout", json!({"refreshToken": refresh_token})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn change_password_roundtrip() -> anyhow::Result<()> {
    let Some((app, state)) = build_app().await else { return Ok(()) };
    let username = format!("clerk_{}", Uuid::new_v4());
    seed_user(&state, &username, "Secret123", "editor").await;

    let session = login(&app, &username, "Secret123").await;
    let token = session["token"].as_str().unwrap().to_string();

    // wrong old password is rejected without detail
    let resp = app
        .clone()
        .call(post_json_auth(
            "/auth/changePassword",
            &token,
            json!({"oldPassword": "Wrong999", "newPassword": "Fresh456"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .clone()
        .call(post_json_auth(
            "/auth/changePassword",
            &token,
            json!({"oldPassword": "Secret123", "newPassword": "Fresh456"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    // old password stops working, new one logs in
    let resp = app
        .clone()
        .call(post_json("/auth/login", json!({"USERNAME": username, "PASSWORD": "Secret123"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    login(&app, &username, "Fresh456").await;
    Ok(())
}

#[tokio::test]
async fn admin_password_reset_respects_roles() -> anyhow::Result<()> {
    let Some((app, state)) = build_app().await else { return Ok(()) };
    let admin = format!("root_{}", Uuid::new_v4());
    let editor = format!("clerk_{}", Uuid::new_v4());
    seed_user(&state, &admin, "RootPass1", "admin").await;
    seed_user(&state, &editor, "Secret123", "editor").await;

    let editor_token = login(&app, &editor, "Secret123").await["token"]
        .as_str()
        .unwrap()
        .to_string();
    let admin_token =
        login(&app, &admin, "RootPass1").await["token"].as_str().unwrap().to_string();

    // non-admin caller is refused
    let resp = app
        .clone()
        .call(post_json_auth(
            "/auth/changeUserPassword",
            &editor_token,
            json!({"username": editor, "oldPassword": "Secret123", "newPassword": "Fresh456"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // admin accounts cannot be targeted
    let resp = app
        .clone()
        .call(post_json_auth(
            "/auth/changeUserPassword",
            &admin_token,
            json!({"username": admin, "oldPassword": "RootPass1", "newPassword": "Fresh456"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // admin resets the editor
    let resp = app
        .clone()
        .call(post_json_auth(
            "/auth/changeUserPassword",
            &admin_token,
            json!({"username": editor, "oldPassword": "Secret123", "newPassword": "Fresh456"}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    login(&app, &editor, "Fresh456").await;
    Ok(())
}

#[tokio::test]
async fn guard_coverage_matches_inherited_surface() -> anyhow::Result<()> {
    let Some((app, _)) = build_app().await else { return Ok(()) };

    // global listing requires a token
    let resp = app
        .clone()
        .call(Request::builder().uri("/global").body(Body::empty())?)
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // parish base listing is open
    let resp = app
        .clone()
        .call(Request::builder().uri("/parish").body(Body::empty())?)
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    // an expired-format token is refused
    let resp = app
        .clone()
        .call(
            Request::builder()
                .uri("/youth")
                .header("authorization", "Bearer not-a-jwt")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    Ok(())
}
