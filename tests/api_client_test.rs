mod common;

use chrono::{Duration, Local};
use serial_test::serial;

use giraffe_cabs_client::models::tour::TourBookingRequest;
use giraffe_cabs_client::models::vehicle::VehicleListing;
use giraffe_cabs_client::ApiClient;

use common::{spawn_backend, BackendBehavior, TEST_PASSWORD, TEST_TOKEN};

#[actix_web::test]
async fn login_returns_an_authenticated_session() {
    let base_url = spawn_backend(BackendBehavior::default()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let session = client.login("rider@example.com", TEST_PASSWORD).await.unwrap();
    assert_eq!(session.bearer_token(), Some(TEST_TOKEN));
    assert_eq!(
        session.user().map(|u| u.email.as_str()),
        Some("rider@example.com")
    );
}

#[actix_web::test]
async fn failed_login_surfaces_the_server_message() {
    let base_url = spawn_backend(BackendBehavior::default()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let err = client
        .login("rider@example.com", "wrong-password")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[actix_web::test]
async fn listing_tours_needs_no_session() {
    let base_url = spawn_backend(BackendBehavior::default()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let tours = client.list_tours().await.unwrap();
    assert_eq!(tours.len(), 2);
    assert_eq!(tours[0].name, "Hill Country Explorer");
    assert_eq!(tours[0].price_per_person, 18500.0);
    assert_eq!(tours[1].destinations, vec!["Galle", "Matara"]);
}

#[actix_web::test]
async fn booking_a_tour_creates_a_pending_tour_booking() {
    let base_url = spawn_backend(BackendBehavior::default()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let request = TourBookingRequest {
        start_date: Local::now().date_naive() + Duration::days(14),
        travelers: 2,
        notes: None,
    };
    let booking = client.book_tour("tour_1", &request, TEST_TOKEN).await.unwrap();

    assert_eq!(booking.id, "tb_3001");
    assert_eq!(booking.status, "pending");
    assert_eq!(booking.tour_id.as_deref(), Some("tour_1"));
    assert_eq!(booking.total_price, Some(37000.0));
}

#[actix_web::test]
async fn my_bookings_requires_the_bearer_token() {
    let base_url = spawn_backend(BackendBehavior::default()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let bookings = client.my_bookings(TEST_TOKEN).await.unwrap();
    assert_eq!(bookings.len(), 2);

    let err = client.my_bookings("forged-token").await.unwrap_err();
    assert_eq!(err.user_message(), "Unauthorized");
}

#[actix_web::test]
async fn provider_onboarding_round_trips_the_listing() {
    let base_url = spawn_backend(BackendBehavior::default()).await;
    let client = ApiClient::new(&base_url).unwrap();

    let listing = VehicleListing {
        id: None,
        vehicle_number: "WP CAB-1234".to_string(),
        vehicle_type: "van".to_string(),
        model: "Toyota HiAce".to_string(),
        seats: 14,
        daily_rate: 15000.0,
        description: Some("A/C, highway permitted".to_string()),
        available: Some(true),
    };
    let created = client.register_vehicle(&listing, TEST_TOKEN).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("veh_9001"));
    assert_eq!(created.vehicle_number, "WP CAB-1234");
    assert_eq!(created.seats, 14);
}

#[actix_web::test]
#[serial]
async fn from_env_reads_the_configured_base_url() {
    std::env::set_var("GIRAFFE_API_URL", "http://giraffe.example.com:8081");
    let client = ApiClient::from_env().unwrap();
    assert_eq!(
        client.base_url().as_str(),
        "http://giraffe.example.com:8081/"
    );
    std::env::remove_var("GIRAFFE_API_URL");
}

#[actix_web::test]
#[serial]
async fn from_env_falls_back_to_the_local_backend() {
    std::env::remove_var("GIRAFFE_API_URL");
    let client = ApiClient::from_env().unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
}
