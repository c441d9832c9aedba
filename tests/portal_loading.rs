mod support;

use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use maya_portal::controller::portal_controller::{load_portal_data, PortalState, PortalView, Redirect, Tab};
use maya_portal::models::listing::ListingStatus;
use maya_portal::models::user::{Role, SessionUser};
use maya_portal::views::bookings::BookingsTab;
use maya_portal::views::listings::HotelsTab;
use maya_portal::views::overview::summarize;
use support::{repo, spawn_backend, unreachable_base_url, HitCounter};

const TOKEN: &str = "tok-portal";

#[derive(Clone, Default)]
struct Hits {
    hotels: HitCounter,
    businesses: HitCounter,
    bookings: HitCounter,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

fn listing_route(counter: HitCounter, payload: Value) -> axum::routing::MethodRouter {
    get(move |headers: HeaderMap| {
        let counter = counter.clone();
        let payload = payload.clone();
        async move {
            counter.hit();
            if !authorized(&headers) {
                return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Token inválido"}))).into_response();
            }
            Json(payload).into_response()
        }
    })
}

fn backend(hits: &Hits, hotels: Value, businesses: Value, bookings: Value) -> Router {
    Router::new()
        .route("/api/hotels/my-hotels", listing_route(hits.hotels.clone(), hotels))
        .route("/api/businesses/my-businesses", listing_route(hits.businesses.clone(), businesses))
        .route("/api/bookings/my-bookings", listing_route(hits.bookings.clone(), bookings))
}

fn user(role: &str) -> SessionUser {
    serde_json::from_value(json!({
        "id": 11,
        "email": "owner@maya.mx",
        "role": role,
        "first_name": "Lucia",
        "last_name": "Canul",
    }))
    .unwrap()
}

#[tokio::test]
async fn business_owner_never_requests_hotels() {
    let hits = Hits::default();
    let base_url = spawn_backend(backend(&hits, json!({"hotels": []}), json!({"businesses": []}), json!([]))).await;

    let data = load_portal_data(&repo(&base_url), Role::BusinessOwner, TOKEN).await;

    assert_eq!(hits.hotels.count(), 0);
    assert_eq!(hits.businesses.count(), 1);
    assert_eq!(hits.bookings.count(), 1);
    assert!(data.hotels.is_empty());
    assert!(data.hotels.error.is_none());
}

#[tokio::test]
async fn admin_requests_every_collection() {
    let hits = Hits::default();
    let base_url = spawn_backend(backend(&hits, json!([]), json!([]), json!([]))).await;

    let data = load_portal_data(&repo(&base_url), Role::Admin, TOKEN).await;

    assert_eq!(hits.hotels.count(), 1);
    assert_eq!(hits.businesses.count(), 1);
    assert_eq!(hits.bookings.count(), 1);
    assert!(data.errors().is_empty());
}

#[tokio::test]
async fn hotel_owner_with_pending_hotel() {
    let hits = Hits::default();
    let hotels = json!({"hotels": [{"id": 1, "name": "Casa Maya", "status": "pending", "price": 950}]});
    let base_url = spawn_backend(backend(&hits, hotels, json!([]), json!({"bookings": []}))).await;
    let api_repo = repo(&base_url);

    let mut view = PortalView::mount(Some(user("HotelOwner")), true);
    assert_eq!(view.state(), &PortalState::Loading);
    view.load(&api_repo, TOKEN).await;

    let PortalState::Ready(data) = view.state() else {
        panic!("portal did not become ready");
    };
    assert_eq!(hits.businesses.count(), 0);
    assert_eq!(view.tabs(), vec![Tab::Overview, Tab::Hotels, Tab::Bookings]);

    let summary = summarize(data, Role::HotelOwner);
    let metric = |title: &str| summary.metrics.iter().find(|m| m.title == title).map(|m| m.value);
    assert_eq!(metric("Total Hoteles"), Some(1));
    assert_eq!(metric("Hoteles Pendientes"), Some(1));

    let hotels_tab = HotelsTab(&data.hotels.items).to_string();
    assert!(hotels_tab.contains("Casa Maya [Pendiente]"));
    assert!(hotels_tab.contains("Tu hotel está pendiente de aprobación por el administrador"));

    view.load(&api_repo, TOKEN).await;
    assert_eq!(hits.hotels.count(), 1);
}

#[tokio::test]
async fn bare_booking_array_renders_one_row() {
    let hits = Hits::default();
    let bookings = json!([{"id": 5, "customer_name": "Jorge", "status": "approved", "total_price": 1800}]);
    let base_url = spawn_backend(backend(&hits, json!([]), json!([]), bookings)).await;

    let data = load_portal_data(&repo(&base_url), Role::HotelOwner, TOKEN).await;

    assert_eq!(data.bookings.len(), 1);
    assert_eq!(data.bookings.items[0].status, ListingStatus::Approved);
    let rendered = BookingsTab(&data.bookings.items).to_string();
    let rows: Vec<&str> = rendered.lines().skip(2).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("[Aprobado]"));
}

#[tokio::test]
async fn malformed_payloads_become_empty_lists_with_errors() {
    let hits = Hits::default();
    let base_url = spawn_backend(backend(
        &hits,
        json!({"hotels": "none"}),
        json!(null),
        json!({"data": []}),
    ))
    .await;

    let data = load_portal_data(&repo(&base_url), Role::Admin, TOKEN).await;

    assert!(data.hotels.is_empty());
    assert!(data.businesses.is_empty());
    assert!(data.bookings.is_empty());
    assert_eq!(
        data.errors(),
        vec!["Error al cargar hoteles", "Error al cargar negocios", "Error al cargar reservas"]
    );
}

#[tokio::test]
async fn one_failing_endpoint_does_not_affect_the_others() {
    let hits = Hits::default();
    let app = Router::new()
        .route("/api/hotels/my-hotels", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/businesses/my-businesses", listing_route(hits.businesses.clone(), json!({"businesses": [{"id": 2}]})))
        .route("/api/bookings/my-bookings", get(|| async { "plain text" }));
    let base_url = spawn_backend(app).await;

    let data = load_portal_data(&repo(&base_url), Role::Admin, TOKEN).await;

    assert_eq!(data.hotels.error.as_deref(), Some("Error al cargar hoteles"));
    assert_eq!(data.businesses.len(), 1);
    assert!(data.businesses.error.is_none());
    assert_eq!(data.bookings.error.as_deref(), Some("Error al cargar reservas"));
}

#[tokio::test]
async fn wrong_token_is_a_load_error() {
    let hits = Hits::default();
    let base_url = spawn_backend(backend(&hits, json!([]), json!([]), json!([]))).await;

    let data = load_portal_data(&repo(&base_url), Role::HotelOwner, "expired").await;

    assert_eq!(hits.hotels.count(), 1);
    assert_eq!(data.errors(), vec!["Error al cargar hoteles", "Error al cargar reservas"]);
}

#[tokio::test]
async fn unreachable_backend_still_settles() {
    let data = load_portal_data(&repo(&unreachable_base_url()), Role::Admin, TOKEN).await;

    assert!(data.hotels.is_empty() && data.businesses.is_empty() && data.bookings.is_empty());
    assert_eq!(data.errors().len(), 3);
}

#[tokio::test]
async fn unauthorized_roles_are_redirected_without_requests() {
    let hits = Hits::default();
    let base_url = spawn_backend(backend(&hits, json!([]), json!([]), json!([]))).await;
    let api_repo = repo(&base_url);

    let mut customer = PortalView::mount(Some(user("Customer")), true);
    customer.load(&api_repo, TOKEN).await;
    assert_eq!(customer.state(), &PortalState::Redirect(Redirect::Unauthorized(Role::Customer)));

    let mut anonymous = PortalView::mount(None, false);
    anonymous.load(&api_repo, TOKEN).await;
    assert_eq!(anonymous.state(), &PortalState::Redirect(Redirect::Unauthenticated));

    assert_eq!(hits.bookings.count(), 0);
}
