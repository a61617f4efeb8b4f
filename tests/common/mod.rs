use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use chrono::{Duration, Local, NaiveTime};
use serde_json::json;

use giraffe_cabs_client::models::booking::BookingDraft;
use giraffe_cabs_client::models::rental::RentalRequest;
use giraffe_cabs_client::models::user::{Session, UserSummary};
use giraffe_cabs_client::ServiceType;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_PASSWORD: &str = "secret";

/// Failure switches for the mock backend, set per test.
#[derive(Clone, Default)]
pub struct BackendBehavior {
    pub fail_bookings: bool,
    pub fail_invoice: bool,
}

/// Spin up the mock backend on an ephemeral port and return its base URL.
pub async fn spawn_backend(behavior: BackendBehavior) -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let behavior = web::Data::new(behavior);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(behavior.clone())
            .route("/health", web::get().to(health))
            .route("/api/auth/login", web::post().to(login))
            .route("/api/bookings", web::post().to(create_booking))
            .route("/api/bookings/my", web::get().to(my_bookings))
            .route("/api/bookings/{id}/invoice", web::get().to(invoice))
            .route("/api/bookings/{id}", web::put().to(update_booking))
            .route("/api/vehicle-rentals", web::post().to(create_rental))
            .route("/api/tours", web::get().to(tours))
            .route("/api/tours/{id}/bookings", web::post().to(book_tour))
            .route("/api/vehicles", web::post().to(register_vehicle))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("failed to bind mock backend");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    let base_url = format!("http://{}", addr);
    wait_for_server_ready(&base_url).await;
    base_url
}

pub async fn wait_for_server_ready(base_url: &str) {
    for _ in 0..30 {
        if reqwest::get(format!("{}/health", base_url)).await.is_ok() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    panic!("Mock backend failed to start within timeout");
}

pub fn test_session() -> Session {
    Session::Authenticated {
        token: TEST_TOKEN.to_string(),
        user: UserSummary {
            id: "user_1".to_string(),
            email: "rider@example.com".to_string(),
            first_name: Some("Amal".to_string()),
            last_name: Some("Perera".to_string()),
            role: None,
        },
    }
}

/// A draft that passes every booking validation rule.
pub fn valid_airport_draft() -> BookingDraft {
    let mut draft = BookingDraft::new();
    draft.service_type = Some(ServiceType::Airport);
    draft.pickup_location = "Colombo Airport".to_string();
    draft.dropoff_location = "Malabe".to_string();
    draft.pickup_date = Some(Local::now().date_naive() + Duration::days(1));
    draft.pickup_time = Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    draft.passengers = Some(2);
    draft.distance_km = 45.0;
    draft.recompute_price();
    draft
}

/// A rental request that passes every rental validation rule.
pub fn valid_rental_request() -> RentalRequest {
    let mut request = RentalRequest::new("veh_42");
    request.rental_type = Some("short-term".to_string());
    request.start_date = Some(Local::now().date_naive() + Duration::days(1));
    request.end_date = Some(Local::now().date_naive() + Duration::days(8));
    request.duration = Some(7);
    request.purpose = "Office transport for a week".to_string();
    request
}

// -- mock handlers ----------------------------------------------------------

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", TEST_TOKEN))
        .unwrap_or(false)
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "OK"}))
}

async fn login(body: web::Json<serde_json::Value>) -> impl Responder {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if body["password"] == TEST_PASSWORD {
        HttpResponse::Ok().json(json!({
            "token": TEST_TOKEN,
            "user": {
                "_id": "user_1",
                "email": email,
                "firstName": "Amal",
                "lastName": "Perera"
            }
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({"message": "Invalid email or password"}))
    }
}

async fn create_booking(
    req: HttpRequest,
    behavior: web::Data<BackendBehavior>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    if behavior.fail_bookings {
        return HttpResponse::InternalServerError()
            .json(json!({"message": "Vehicle unavailable for the selected date"}));
    }

    // Echo the submitted status so tests can verify the client forced
    // "pending" on the way out.
    HttpResponse::Created().json(json!({
        "_id": "bk_1001",
        "status": body["status"],
        "serviceType": body["serviceType"],
        "pickupLocation": body["pickupLocation"],
        "dropoffLocation": body["dropoffLocation"],
        "totalPrice": body["totalPrice"],
        "createdAt": "2026-08-06T09:30:00Z"
    }))
}

async fn invoice(req: HttpRequest, behavior: web::Data<BackendBehavior>) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    if behavior.fail_invoice {
        return HttpResponse::InternalServerError()
            .json(json!({"message": "Invoice generation failed"}));
    }
    HttpResponse::Ok()
        .content_type("application/pdf")
        .body(&b"%PDF-1.4 mock invoice"[..])
}

async fn update_booking(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    let booking_id = path.into_inner();
    HttpResponse::Ok().json(json!({
        "_id": booking_id,
        "status": body.get("status").cloned().unwrap_or_else(|| json!("paid")),
        "updatedAt": "2026-08-06T09:45:00Z"
    }))
}

async fn my_bookings(req: HttpRequest) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    HttpResponse::Ok().json(json!([
        {"_id": "bk_1001", "status": "pending", "pickupLocation": "Colombo Airport"},
        {"_id": "bk_1002", "status": "confirmed", "pickupLocation": "Kandy"}
    ]))
}

async fn create_rental(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    HttpResponse::Created().json(json!({
        "_id": "rent_2001",
        "status": body["status"],
        "vehicleId": body["vehicleId"],
        "startDate": body["startDate"],
        "endDate": body["endDate"]
    }))
}

async fn tours() -> impl Responder {
    HttpResponse::Ok().json(json!([
        {
            "_id": "tour_1",
            "name": "Hill Country Explorer",
            "description": "Kandy, tea country and Nuwara Eliya",
            "destinations": ["Kandy", "Nuwara Eliya"],
            "days": 3,
            "pricePerPerson": 18500.0
        },
        {
            "_id": "tour_2",
            "name": "Southern Coast Run",
            "destinations": ["Galle", "Matara"],
            "days": 2,
            "pricePerPerson": 12000.0
        }
    ]))
}

async fn book_tour(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    let tour_id = path.into_inner();
    let travelers = body["travelers"].as_u64().unwrap_or(1);
    HttpResponse::Created().json(json!({
        "_id": "tb_3001",
        "status": "pending",
        "tourId": tour_id,
        "totalPrice": 18500.0 * travelers as f64
    }))
}

async fn register_vehicle(req: HttpRequest, body: web::Json<serde_json::Value>) -> impl Responder {
    if !authorized(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Unauthorized"}));
    }
    let mut listing = body.into_inner();
    listing["_id"] = json!("veh_9001");
    HttpResponse::Created().json(listing)
}
