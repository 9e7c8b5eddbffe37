// posada-app/tests/booking_flow.rs
// Full booking flow: views driving the HTTP client against a mock backend.

use axum::extract::{Json, Path};
use axum::routing::{get, post};
use axum::Router;
use posada_app::routes::Route;
use posada_app::views::auth::LoginView;
use posada_app::views::home::HomeView;
use posada_app::views::my_reservations::MyReservationsView;
use posada_app::views::reservation::ReservationView;
use posada_client::{ClientConfig, SessionStore};
use serde_json::{json, Value};
use shared::models::ReservationStatus;
use shared::ApiResponse;

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn booking_backend() -> Router {
    Router::new()
        .route(
            "/rooms/{id}",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": {
                        "id": "r1",
                        "photos": "https://example.com/r.jpg",
                        "codeName": "Suite 301",
                        "description": "desc",
                        "pricePerNight": 100_000,
                        "capacity": 2,
                        "bedsQuantity": 1,
                        "hotelId": "h1",
                    },
                }))
            }),
        )
        .route(
            "/hotels",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": [{
                        "id": "h1",
                        "name": "Hotel h1",
                        "description": "desc",
                        "photo": "https://example.com/p.jpg",
                        "country": "Peru",
                        "city": "Lima",
                        "address": "Av. Principal 123",
                        "ranking": 4,
                        "bestPrice": 50_000,
                    }],
                }))
            }),
        )
        .route(
            "/reservations/myreservations",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": [
                        {
                            "id": "res-1",
                            "date": "2024-03-01T00:00:00.000Z",
                            "status": "active",
                            "nightsQuantity": 3,
                            "total": 300_000,
                            "roomId": "r1",
                            "userId": "u1",
                        },
                        {
                            "id": "res-2",
                            "date": "2024-04-01T00:00:00.000Z",
                            "status": "active",
                            "nightsQuantity": 1,
                            "total": 100_000,
                            "roomId": "r1",
                            "userId": "u1",
                        },
                    ],
                }))
            }),
        )
        .route(
            "/reservations/{room_id}",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": ["2024-01-02T00:00:00.000Z"],
                }))
            })
            .delete(|Path(id): Path<String>| async move {
                if id == "res-2" {
                    return Json(ApiResponse::error("La reserva no puede cancelarse"));
                }
                Json(ApiResponse::ok_with_message(json!({}), "Reserva cancelada"))
            }),
        )
        .route(
            "/rooms",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": [{
                        "id": "r1",
                        "photos": "https://example.com/r.jpg",
                        "codeName": "Suite 301",
                        "description": "desc",
                        "pricePerNight": 100_000,
                        "capacity": 2,
                        "bedsQuantity": 1,
                        "hotelId": "h1",
                    }],
                }))
            }),
        )
        .route(
            "/reservations",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["status"], "active");
                assert_eq!(body["nightsQuantity"], 3);
                assert_eq!(body["total"], 300_000);
                Json(json!({ "success": true, "data": {} }))
            }),
        )
        .route(
            "/auth/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    Json(json!({
                        "success": true,
                        "data": { "token": "tok-1", "isAdmin": false },
                    }))
                } else {
                    Json(json!({ "success": false, "message": "Credenciales inválidas" }))
                }
            }),
        )
}

#[tokio::test]
async fn reserve_a_room_end_to_end() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url)
        .with_token("tok-1")
        .build_http_client();

    let mut view = ReservationView::new("r1");
    view.load(&client).await;
    assert_eq!(view.room().unwrap().price_per_night, 100_000);

    // The reserved day collides and clears the field.
    view.set_start_date("2024-01-02".parse().unwrap());
    assert_eq!(view.start_date(), None);

    view.set_start_date("2024-01-01".parse().unwrap());
    view.set_end_date("2024-01-04".parse().unwrap());
    assert_eq!(view.nights_quantity(), 3);
    assert_eq!(view.total(), 300_000);

    let navigated = view.submit(&client).await;
    assert_eq!(navigated, Some(Route::Home));
    assert_eq!(
        view.notifier().current().unwrap().message,
        "Reservation successful"
    );
}

#[tokio::test]
async fn login_installs_the_session() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url).build_http_client();
    let mut session = SessionStore::new();

    let mut view = LoginView::new();
    view.form.email = "ana@mail.com".to_string();
    view.form.password = "secret".to_string();

    let navigated = view.submit(&client, &mut session).await;
    assert_eq!(navigated, Some(Route::Home));
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-1"));
}

#[tokio::test]
async fn failed_login_surfaces_the_server_message() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url).build_http_client();
    let mut session = SessionStore::new();

    let mut view = LoginView::new();
    view.form.email = "ana@mail.com".to_string();
    view.form.password = "wrong".to_string();

    let navigated = view.submit(&client, &mut session).await;
    assert_eq!(navigated, None);
    assert!(!session.is_authenticated());
    assert_eq!(
        view.notifier().current().unwrap().message,
        "Credenciales inválidas"
    );
}

#[tokio::test]
async fn cancelling_a_reservation_flips_the_local_status() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url)
        .with_token("tok-1")
        .build_http_client();

    let mut view = MyReservationsView::new();
    view.load(&client).await;
    assert_eq!(view.visible().len(), 2);
    assert!(view.room_for(view.visible()[0]).is_some());

    view.cancel_reservation(&client, "res-1").await;

    // The active list shrinks without a refetch.
    let active: Vec<&str> = view.visible().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(active, vec!["res-2"]);
    view.toggle_filter();
    assert!(view
        .visible()
        .iter()
        .any(|r| r.id == "res-1" && r.status == ReservationStatus::Cancel));
}

#[tokio::test]
async fn a_refused_cancellation_keeps_the_reservation_active() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url)
        .with_token("tok-1")
        .build_http_client();

    let mut view = MyReservationsView::new();
    view.load(&client).await;

    view.cancel_reservation(&client, "res-2").await;
    assert_eq!(view.visible().len(), 2);
    assert_eq!(
        view.notifier().current().unwrap().message,
        "La reserva no puede cancelarse"
    );
}

#[tokio::test]
async fn a_torn_down_home_view_is_not_left_loading() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url).build_http_client();

    let mut view = HomeView::new();
    view.cancellation_token().cancel();

    view.load(&client).await;
    assert!(!view.is_loading());
    assert!(view.visible_hotels().is_empty());
}

#[tokio::test]
async fn a_torn_down_view_never_sees_the_response() {
    let base_url = spawn_backend(booking_backend()).await;
    let client = ClientConfig::new(base_url).build_http_client();

    let mut view = ReservationView::new("r1");
    view.cancellation_token().cancel();

    view.load(&client).await;
    assert!(view.room().is_none());
}
