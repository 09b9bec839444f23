use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use attendance_auth_types::session::require_session;
use attendance_core::health::healthz;
use attendance_core::request_id::{propagate_request_id, set_request_id};

use crate::domain::resources::{Attendance, Grades, Schools, Sections, Students, Teachers, Users};
use crate::handlers::{
    auth::{login_otp, me, request_otp},
    health::readyz,
    profile::{get_profile, update_profile},
    resource::{create_resource, get_resource, list_resources},
};
use crate::infra::resources::SeaResource;
use crate::middleware::request_timeout;
use crate::state::AppState;

/// `POST /api/{name}`, `GET /api/{name}` and `GET /api/{name}/{id}` for `R`.
fn resource_routes<R: SeaResource>(router: Router<AppState>) -> Router<AppState> {
    let collection = format!("/api/{}", R::NAME);
    let item = format!("/api/{}/{{id}}", R::NAME);
    router
        .route(
            &collection,
            post(create_resource::<R>).get(list_resources::<R>),
        )
        .route(&item, get(get_resource::<R>))
}

pub fn build_router(state: AppState) -> Router {
    let mut protected = Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/profile", get(get_profile).put(update_profile));
    protected = resource_routes::<Users>(protected);
    protected = resource_routes::<Students>(protected);
    protected = resource_routes::<Teachers>(protected);
    protected = resource_routes::<Schools>(protected);
    protected = resource_routes::<Grades>(protected);
    protected = resource_routes::<Sections>(protected);
    protected = resource_routes::<Attendance>(protected);
    let protected = protected.route_layer(from_fn_with_state(
        state.session_verifier(),
        require_session,
    ));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // OTP login
        .route("/api/auth/request-otp", post(request_otp))
        .route("/api/auth/login-otp", post(login_otp))
        // Session-guarded
        .merge(protected)
        .layer(from_fn_with_state(state.request_timeout, request_timeout))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id()),
        )
        .with_state(state)
}
