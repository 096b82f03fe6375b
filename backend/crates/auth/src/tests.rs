//! Unit tests for auth crate

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use kernel::id::IdentityId;
    use kernel::session::SignOutListener;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::InMemoryAuthRepository;

    /// Records every sign-out it hears about
    #[derive(Default)]
    pub struct RecordingListener {
        pub signed_out: Mutex<Vec<IdentityId>>,
    }

    impl SignOutListener for RecordingListener {
        fn on_sign_out(&self, identity_id: IdentityId) {
            self.signed_out.lock().unwrap().push(identity_id);
        }
    }

    pub fn repo() -> Arc<InMemoryAuthRepository> {
        Arc::new(InMemoryAuthRepository::with_default_identities().unwrap())
    }

    pub fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::development())
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use chrono::Duration;
    use kernel::id::IdentityId;
    use kernel::session::SignOutListener;

    use super::support::{RecordingListener, config, repo};
    use crate::application::{
        CheckSessionUseCase, SignInInput, SignInUseCase, SignOutListeners, SignOutUseCase,
        session_token,
    };
    use crate::domain::entity::auth_session::AuthSession;
    use crate::domain::repository::{AuthSessionRepository, IdentityRepository};
    use crate::domain::value_object::user_name::UserName;
    use crate::error::AuthError;

    fn input(user_name: &str, password: &str) -> SignInInput {
        SignInInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_default_identities() {
        let repo = repo();
        let use_case = SignInUseCase::new(repo.clone(), repo, config());

        let user = use_case.authenticate("user", "password").await.unwrap();
        assert_eq!(user.identity_id, IdentityId::new(1));

        let admin = use_case.authenticate("admin", "admin123").await.unwrap();
        assert_eq!(admin.identity_id, IdentityId::new(2));
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_indistinguishable() {
        let repo = repo();
        let use_case = SignInUseCase::new(repo.clone(), repo, config());

        for (name, password) in [
            ("user", "wrong"),
            ("nobody", "password"),
            ("", "password"),
            ("user name", "password"),
            ("User", "password"),
            ("user", ""),
        ] {
            let err = use_case.authenticate(name, password).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials), "{name}/{password}");
            assert_eq!(err.to_string(), "Invalid username or password");
        }
    }

    #[tokio::test]
    async fn test_sign_in_creates_session() {
        let repo = repo();
        let config = config();
        let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());

        let output = use_case.execute(input("user", "password")).await.unwrap();
        assert_eq!(output.identity_id, IdentityId::new(1));
        assert_eq!(output.user_name, "user");
        assert_eq!(repo.session_count().await, 1);

        let check = CheckSessionUseCase::new(repo, config);
        let info = check.execute(&output.session_token).await.unwrap();
        assert_eq!(info.identity_id, IdentityId::new(1));
        assert_eq!(info.user_name, "user");
        assert_eq!(info.expires_at_ms, output.expires_at_ms);
    }

    #[tokio::test]
    async fn test_failed_sign_in_creates_no_session() {
        let repo = repo();
        let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config());

        assert!(use_case.execute(input("user", "nope")).await.is_err());
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_token_from_other_secret_rejected() {
        let repo = repo();
        let use_case = SignInUseCase::new(repo.clone(), repo.clone(), config());
        let output = use_case.execute(input("user", "password")).await.unwrap();

        let check = CheckSessionUseCase::new(repo, config());
        assert!(!check.is_valid(&output.session_token).await);
    }

    #[tokio::test]
    async fn test_expired_session_rejected_and_removed() {
        let repo = repo();
        let config = config();
        let identity = repo
            .find_by_user_name(&UserName::new("user").unwrap())
            .await
            .unwrap()
            .unwrap();

        let session = AuthSession::new(&identity, Duration::milliseconds(-1)).unwrap();
        repo.create(&session).await.unwrap();
        let token = session_token::issue(&config.session_secret, session.session_id);

        let check = CheckSessionUseCase::new(repo.clone(), config);
        let err = check.get_session(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::SessionInvalid));
        assert_eq!(repo.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_sign_out_notifies_listeners_once() {
        let repo = repo();
        let config = config();
        let listener = Arc::new(RecordingListener::default());
        let listeners: SignOutListeners = Arc::new([listener.clone() as Arc<dyn SignOutListener>]);

        let sign_in = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());
        let output = sign_in.execute(input("admin", "admin123")).await.unwrap();

        let sign_out = SignOutUseCase::new(repo.clone(), config.clone(), listeners);
        assert_eq!(
            sign_out.execute(&output.session_token).await.unwrap(),
            Some(IdentityId::new(2))
        );
        assert_eq!(sign_out.execute(&output.session_token).await.unwrap(), None);

        assert_eq!(*listener.signed_out.lock().unwrap(), vec![IdentityId::new(2)]);
        assert!(
            !CheckSessionUseCase::new(repo, config)
                .is_valid(&output.session_token)
                .await
        );
    }

    #[tokio::test]
    async fn test_sign_out_with_forged_token_is_rejected() {
        let repo = repo();
        let listener = Arc::new(RecordingListener::default());
        let listeners: SignOutListeners = Arc::new([listener.clone() as Arc<dyn SignOutListener>]);

        let sign_out = SignOutUseCase::new(repo, config(), listeners);
        let err = sign_out.execute("forged.token").await.unwrap_err();

        assert!(matches!(err, AuthError::SessionInvalid));
        assert!(listener.signed_out.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_sessions_for_one_identity() {
        let repo = repo();
        let config = config();
        let sign_in = SignInUseCase::new(repo.clone(), repo.clone(), config.clone());

        let first = sign_in.execute(input("user", "password")).await.unwrap();
        let second = sign_in.execute(input("user", "password")).await.unwrap();
        assert_ne!(first.session_token, second.session_token);

        let sign_out = SignOutUseCase::new(repo.clone(), config.clone(), Arc::from(Vec::new()));
        sign_out.execute(&first.session_token).await.unwrap();

        let check = CheckSessionUseCase::new(repo, config);
        assert!(!check.is_valid(&first.session_token).await);
        assert!(check.is_valid(&second.session_token).await);
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::extract::Extension;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Json, Router};
    use http_body_util::BodyExt;
    use kernel::id::IdentityId;
    use kernel::session::{CurrentIdentity, SignOutListener};
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::support::{RecordingListener, config, repo};

    use crate::application::SignOutListeners;
    use crate::application::config::AuthConfig;
    use crate::application::session_token;
    use crate::domain::entity::auth_session::AuthSession;
    use crate::domain::repository::AuthSessionRepository;
    use crate::error::{AuthError, AuthResult};
    use crate::infra::memory::InMemoryAuthRepository;
    use crate::presentation::middleware::{AuthMiddlewareState, require_auth_session};
    use crate::presentation::router::auth_router;

    struct TestApp {
        repo: Arc<InMemoryAuthRepository>,
        config: Arc<AuthConfig>,
        listener: Arc<RecordingListener>,
    }

    impl TestApp {
        fn new() -> Self {
            Self {
                repo: repo(),
                config: config(),
                listener: Arc::new(RecordingListener::default()),
            }
        }

        fn router(&self) -> Router {
            let listeners: SignOutListeners = Arc::new([self.listener.clone() as Arc<dyn SignOutListener>]);
            let protected = Router::new()
                .route(
                    "/whoami",
                    get(|Extension(current): Extension<CurrentIdentity>| async move {
                        Json(serde_json::json!({
                            "identityId": current.identity_id.get(),
                            "userName": current.user_name,
                        }))
                    }),
                )
                .route_layer(from_fn_with_state(
                    AuthMiddlewareState {
                        repo: self.repo.clone(),
                        config: self.config.clone(),
                    },
                    require_auth_session::<InMemoryAuthRepository>,
                ));

            Router::new()
                .nest(
                    "/auth",
                    auth_router(self.repo.clone(), self.config.clone(), listeners),
                )
                .nest("/protected", protected)
        }

        async fn send(&self, request: Request<Body>) -> (StatusCode, Option<String>, Option<Value>) {
            let response = self.router().oneshot(request).await.unwrap();
            let status = response.status();
            let set_cookie = response
                .headers()
                .get(header::SET_COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            (status, set_cookie, serde_json::from_slice(&bytes).ok())
        }

        async fn sign_in(&self, user_name: &str, password: &str) -> (StatusCode, Option<String>, Option<Value>) {
            let body = serde_json::json!({ "userName": user_name, "password": password });
            self.send(
                Request::builder()
                    .method("POST")
                    .uri("/auth/signin")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
        }
    }

    /// `name=value` from a Set-Cookie header
    fn cookie_pair(set_cookie: &str) -> String {
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn with_cookie(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_sets_session_cookie() {
        let app = TestApp::new();

        let (status, set_cookie, json) = app.sign_in("user", "password").await;
        let set_cookie = set_cookie.unwrap();
        let json = json.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(set_cookie.starts_with("auth_session="));
        assert!(set_cookie.contains("HttpOnly"));
        assert_eq!(json["identityId"], 1);
        assert_eq!(json["userName"], "user");
    }

    #[tokio::test]
    async fn test_sign_in_failure_is_generic() {
        let app = TestApp::new();

        let (status, set_cookie, json) = app.sign_in("user", "wrong").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(set_cookie.is_none());
        assert_eq!(json.unwrap()["detail"], "Invalid username or password");

        let (status, _, json) = app.sign_in("ghost", "password").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json.unwrap()["detail"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_protected_route_requires_session() {
        let app = TestApp::new();

        let (status, _, _) = app.send(with_cookie("GET", "/protected/whoami", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let response = app
            .router()
            .oneshot(with_cookie("GET", "/protected/whoami", Some("auth_session=garbage")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get("X-Auth-Required").unwrap(), "true");
    }

    #[tokio::test]
    async fn test_protected_route_sees_current_identity() {
        let app = TestApp::new();
        let (_, set_cookie, _) = app.sign_in("admin", "admin123").await;
        let cookie = cookie_pair(&set_cookie.unwrap());

        let (status, _, json) = app
            .send(with_cookie("GET", "/protected/whoami", Some(&cookie)))
            .await;
        let json = json.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["identityId"], 2);
        assert_eq!(json["userName"], "admin");
    }

    #[tokio::test]
    async fn test_status_and_sign_out() {
        let app = TestApp::new();
        let (_, set_cookie, _) = app.sign_in("user", "password").await;
        let cookie = cookie_pair(&set_cookie.unwrap());

        let (_, _, json) = app.send(with_cookie("GET", "/auth/status", Some(&cookie))).await;
        let json = json.unwrap();
        assert_eq!(json["authenticated"], true);
        assert_eq!(json["userName"], "user");

        let (status, set_cookie, _) = app
            .send(with_cookie("POST", "/auth/signout", Some(&cookie)))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(set_cookie.unwrap().contains("Max-Age=0"));
        assert_eq!(*app.listener.signed_out.lock().unwrap(), vec![IdentityId::new(1)]);

        let (_, _, json) = app.send(with_cookie("GET", "/auth/status", Some(&cookie))).await;
        assert_eq!(json.unwrap()["authenticated"], false);

        let (status, _, _) = app
            .send(with_cookie("GET", "/protected/whoami", Some(&cookie)))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    /// Session store whose every call fails
    struct UnavailableSessions;

    impl AuthSessionRepository for UnavailableSessions {
        async fn create(&self, _session: &AuthSession) -> AuthResult<()> {
            Err(AuthError::Internal("store offline".into()))
        }

        async fn find_by_id(&self, _session_id: Uuid) -> AuthResult<Option<AuthSession>> {
            Err(AuthError::Internal("store offline".into()))
        }

        async fn update(&self, _session: &AuthSession) -> AuthResult<()> {
            Err(AuthError::Internal("store offline".into()))
        }

        async fn delete(&self, _session_id: Uuid) -> AuthResult<Option<AuthSession>> {
            Err(AuthError::Internal("store offline".into()))
        }

        async fn cleanup_expired(&self) -> AuthResult<u64> {
            Err(AuthError::Internal("store offline".into()))
        }
    }

    #[tokio::test]
    async fn test_protected_route_reports_store_failure() {
        let config = config();
        let app = Router::new()
            .route("/whoami", get(|| async { "ok" }))
            .route_layer(from_fn_with_state(
                AuthMiddlewareState {
                    repo: Arc::new(UnavailableSessions),
                    config: config.clone(),
                },
                require_auth_session::<UnavailableSessions>,
            ));

        let token = session_token::issue(&config.session_secret, Uuid::new_v4());
        let cookie = format!("auth_session={token}");
        let response = app
            .oneshot(with_cookie("GET", "/whoami", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get("X-Auth-Required").is_none());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(!json["detail"].as_str().unwrap().contains("offline"));
    }

    #[tokio::test]
    async fn test_sign_out_without_session_still_clears_cookie() {
        let app = TestApp::new();

        let (status, set_cookie, _) = app.send(with_cookie("POST", "/auth/signout", None)).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(set_cookie.unwrap().starts_with("auth_session=;"));
        assert!(app.listener.signed_out.lock().unwrap().is_empty());
    }
}
