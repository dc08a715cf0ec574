use crate::backend::BookingBackend;
use crate::booking_service::{admin_overview, availability, submit_booking, AdminOverview};
use crate::configuration::Configuration;
use crate::error::RejectionReason;
use crate::slots::BusinessHours;
use crate::stylists::StylistRegistry;
use crate::types::{Booking, Stylist, StylistId};
use crate::validation::{BookingRequest, DATE_FORMAT};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, Request};
use axum::http::{header, HeaderMap};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum::{
    routing::{get, post},
    Router,
};
use base64::{prelude::BASE64_STANDARD, Engine};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Debug)]
struct AdminCredentials {
    user: String,
    password: String,
}

#[derive(Clone)]
pub struct AppState<T: BookingBackend> {
    backend: T,
    hours: BusinessHours,
    stylists: Arc<StylistRegistry>,
    admin: Arc<AdminCredentials>,
}

#[derive(Debug, Serialize)]
struct BookingForm {
    today: String,
    stylists: Vec<Stylist>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AvailabilityQuery {
    stylist_id: StylistId,
    date: String,
}

#[derive(Debug, Serialize)]
struct BookingConfirmation {
    booking: Booking,
    stylist_name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfirmationQuery {
    stylist_id: StylistId,
    date: String,
    start: String,
    end: String,
}

#[derive(Debug, Serialize)]
struct Confirmation {
    stylist_name: String,
    date: String,
    start: String,
    end: String,
}

pub fn create_app<T: BookingBackend, C: Configuration>(backend: T, configuration: C) -> Router {
    let state = AppState {
        backend,
        hours: configuration.business_hours(),
        stylists: Arc::new(StylistRegistry::new(configuration.stylists())),
        admin: Arc::new(AdminCredentials {
            user: configuration.admin_user(),
            password: configuration.admin_password(),
        }),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/", get(get_root))
        .route("/booking", get(get_booking_form::<T>))
        .route("/availability", get(get_availability::<T>))
        .route("/book", post(book::<T>))
        .route("/confirmed", get(get_confirmation::<T>));

    let admin = Router::new()
        .route("/admin", get(get_admin::<T>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth::<T>,
        ));

    Router::new()
        .merge(public)
        .merge(admin)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn redirect_to_booking() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/booking")]).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"Admin\"")],
        "Unauthorized",
    )
        .into_response()
}

/// User and password from an `Authorization: Basic` header.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_owned(), password.to_owned()))
}

async fn admin_auth<T: BookingBackend>(
    State(state): State<AppState<T>>,
    request: Request,
    next: Next,
) -> Response {
    match basic_credentials(request.headers()) {
        // Plain string comparison, not constant time.
        Some((user, password))
            if user == state.admin.user && password == state.admin.password =>
        {
            next.run(request).await
        }
        Some((user, _)) => {
            warn!(%user, "Rejected admin credentials");
            unauthorized()
        }
        None => unauthorized(),
    }
}

async fn get_root() -> Response {
    redirect_to_booking()
}

async fn get_booking_form<T: BookingBackend>(
    State(state): State<AppState<T>>,
) -> Json<BookingForm> {
    Json(BookingForm {
        today: Local::now().format(DATE_FORMAT).to_string(),
        stylists: state.stylists.all().to_vec(),
    })
}

async fn get_availability<T: BookingBackend>(
    State(state): State<AppState<T>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return redirect_to_booking();
    };
    if query.stylist_id <= 0 || query.date.is_empty() {
        return redirect_to_booking();
    }

    match availability(
        &state.backend,
        &state.hours,
        &state.stylists,
        query.stylist_id,
        &query.date,
    ) {
        Ok(availability) => Json(availability).into_response(),
        Err(reason) => reason.into_response(),
    }
}

async fn book<T: BookingBackend>(
    State(state): State<AppState<T>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%rejection, "Unreadable booking request");
            return RejectionReason::MalformedRequest.into_response();
        }
    };

    match submit_booking(&state.backend, &state.hours, &request) {
        Ok(booking) => {
            info!(
                stylist_id = booking.stylist_id,
                date = %booking.date,
                interval = %booking.interval,
                "Booking committed"
            );
            let confirmation = BookingConfirmation {
                stylist_name: state.stylists.name_of(booking.stylist_id).to_owned(),
                booking,
            };
            (StatusCode::CREATED, Json(confirmation)).into_response()
        }
        Err(reason) => {
            warn!(
                stylist_id = request.stylist_id,
                date = %request.date,
                start = %request.start,
                end = %request.end,
                %reason,
                "Booking rejected"
            );
            reason.into_response()
        }
    }
}

async fn get_confirmation<T: BookingBackend>(
    State(state): State<AppState<T>>,
    query: Result<Query<ConfirmationQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = query else {
        return redirect_to_booking();
    };
    if query.stylist_id <= 0 || query.date.is_empty() || query.start.is_empty() || query.end.is_empty()
    {
        return redirect_to_booking();
    }

    Json(Confirmation {
        stylist_name: state.stylists.name_of(query.stylist_id).to_owned(),
        date: query.date,
        start: query.start,
        end: query.end,
    })
    .into_response()
}

async fn get_admin<T: BookingBackend>(State(state): State<AppState<T>>) -> Json<AdminOverview> {
    Json(admin_overview(&state.backend, &state.stylists))
}
