#![allow(clippy::unwrap_used)]
// Integration tests for the resource helpers (rooms, reservations, front
// desk, guests, users, statistics, payments) against a wiremock server.

use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use innkeep_api::{ApiClient, ClientConfig, MemoryStore, Surface};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::with_values([("adminToken", "staff-jwt")]));
    let config = ClientConfig::for_surface(Surface::Admin)
        .unwrap()
        .with_base_url(Url::parse(&server.uri()).unwrap());
    let client = ApiClient::with_client(reqwest::Client::new(), config, store).unwrap();
    (server, client)
}

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

fn ok_message(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "message": message }))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Rooms ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_rooms() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rooms"))
        .and(header("authorization", "Bearer staff-jwt"))
        .respond_with(ok(json!([
            { "id": 1, "roomNumber": "101", "roomType": "STANDARD", "price": 288.0 },
            { "id": 2, "roomNumber": "201", "roomType": "DELUXE", "price": 468.0 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = client.rooms().all().await.unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[1]["roomNumber"], "201");
}

#[tokio::test]
async fn test_list_rooms_without_data_is_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ok_message("ok"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rooms/active"))
        .respond_with(ok(Value::Null))
        .mount(&server)
        .await;

    assert!(client.rooms().all().await.unwrap().is_empty());
    assert!(client.rooms().active().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_available_rooms_returns_full_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ok(json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }])))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = client
        .rooms()
        .available(date(2024, 6, 1), date(2024, 6, 3))
        .await
        .unwrap();
    assert_eq!(rooms.len(), 3);
}

#[tokio::test]
async fn test_rooms_by_type_encodes_segment() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rooms/type/FAMILY%20SUITE"))
        .respond_with(ok(json!([{ "id": 9, "roomType": "FAMILY SUITE" }])))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = client.rooms().by_type("FAMILY SUITE").await.unwrap();
    assert_eq!(rooms[0]["id"], 9);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/rooms/type/FAMILY%20SUITE");
}

#[tokio::test]
async fn test_room_crud() {
    let (server, client) = setup().await;
    let room = json!({ "roomNumber": "305", "roomType": "DELUXE", "price": 520.0 });

    Mock::given(method("GET"))
        .and(path("/rooms/5"))
        .respond_with(ok(json!({ "id": 5, "roomNumber": "305" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .and(body_json(&room))
        .respond_with(ok(json!({ "id": 5, "roomNumber": "305" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/rooms/5"))
        .and(body_json(json!({ "price": 499.0 })))
        .respond_with(ok(json!({ "id": 5, "price": 499.0 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rooms/5"))
        .respond_with(ok_message("房间删除成功"))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.rooms().get(5).await.unwrap()["roomNumber"], "305");
    assert_eq!(client.rooms().create(&room).await.unwrap()["id"], 5);
    assert_eq!(
        client.rooms().update(5, &json!({ "price": 499.0 })).await.unwrap()["price"],
        499.0
    );

    let deleted = client.rooms().delete(5).await.unwrap();
    assert!(deleted.success);
    assert_eq!(deleted.message(), "房间删除成功");
}

// ── Reservations ────────────────────────────────────────────────────

#[tokio::test]
async fn test_reservation_queries() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations"))
        .respond_with(ok(json!([{ "id": 1 }, { "id": 2 }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reservations/me"))
        .respond_with(ok(json!([{ "id": 2 }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reservations/status/CHECKED_IN"))
        .respond_with(ok(json!([{ "id": 1, "status": "CHECKED_IN" }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reservations/guest/31"))
        .respond_with(ok(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reservations/2"))
        .respond_with(ok(json!({ "id": 2, "status": "PENDING" })))
        .mount(&server)
        .await;

    let reservations = client.reservations();
    assert_eq!(reservations.all().await.unwrap().len(), 2);
    assert_eq!(reservations.mine().await.unwrap()[0]["id"], 2);
    assert_eq!(
        reservations.by_status("CHECKED_IN").await.unwrap()[0]["status"],
        "CHECKED_IN"
    );
    assert!(reservations.for_guest(31).await.unwrap().is_empty());
    assert_eq!(reservations.get(2).await.unwrap()["status"], "PENDING");
}

#[tokio::test]
async fn test_create_and_update_reservation() {
    let (server, client) = setup().await;
    let booking = json!({
        "roomId": 3,
        "checkInDate": "2024-06-01",
        "checkOutDate": "2024-06-03",
        "numberOfGuests": 2
    });

    Mock::given(method("POST"))
        .and(path("/reservations"))
        .and(body_json(&booking))
        .respond_with(ok(json!({ "id": 77, "status": "PENDING", "totalPrice": 576.0 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/reservations/77"))
        .and(body_json(json!({ "numberOfGuests": 3 })))
        .respond_with(ok(json!({ "id": 77, "numberOfGuests": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client.reservations().create(&booking).await.unwrap();
    assert_eq!(created["id"], 77);

    let updated = client
        .reservations()
        .update(77, &json!({ "numberOfGuests": 3 }))
        .await
        .unwrap();
    assert_eq!(updated["numberOfGuests"], 3);
}

#[tokio::test]
async fn test_cancel_reservation_sends_no_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/reservations/77/cancel"))
        .respond_with(ok(json!({ "id": 77, "status": "CANCELLED" })))
        .expect(1)
        .mount(&server)
        .await;

    let cancelled = client.reservations().cancel(77).await.unwrap();
    assert_eq!(cancelled["status"], "CANCELLED");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_reservation_returns_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/reservations/77"))
        .respond_with(ok_message("预订删除成功"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client.reservations().delete(77).await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data, None);
}

// ── Front desk ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_check_in_defaults_to_empty_object() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/frontdesk/checkin/12"))
        .and(body_json(json!({})))
        .respond_with(ok(json!({ "id": 12, "status": "CHECKED_IN" })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client.front_desk().check_in(12, None).await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap()["status"], "CHECKED_IN");
}

#[tokio::test]
async fn test_check_out_forwards_details() {
    let (server, client) = setup().await;
    let details = json!({ "remarks": "minibar: 2 colas" });

    Mock::given(method("POST"))
        .and(path("/frontdesk/checkout/12"))
        .and(body_json(&details))
        .respond_with(ok(json!({ "id": 12, "status": "CHECKED_OUT" })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client.front_desk().check_out(12, Some(&details)).await.unwrap();
    assert_eq!(envelope.data.unwrap()["status"], "CHECKED_OUT");
}

#[tokio::test]
async fn test_front_desk_rejection_is_returned_not_raised() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/frontdesk/checkin/13"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "预订状态不允许入住" })),
        )
        .mount(&server)
        .await;

    let envelope = client.front_desk().check_in(13, None).await.unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.message(), "预订状态不允许入住");
}

// ── Guests ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_guest_searches_use_query_parameters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/guests/search/name"))
        .and(query_param("name", "李 雷"))
        .respond_with(ok(json!([{ "id": 4, "fullName": "李雷" }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/guests/search/phone"))
        .and(query_param("phone", "+86 138"))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/guests/search/id-card"))
        .and(query_param("idCardNumber", "110101199001011234"))
        .respond_with(ok(json!({ "id": 4 })))
        .expect(1)
        .mount(&server)
        .await;

    let guests = client.guests();
    assert_eq!(guests.search_by_name("李 雷").await.unwrap()[0]["id"], 4);
    assert!(guests.search_by_phone("+86 138").await.unwrap().is_empty());
    assert_eq!(
        guests.find_by_id_card("110101199001011234").await.unwrap()["id"],
        4
    );
}

#[tokio::test]
async fn test_list_and_get_guests() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/guests"))
        .respond_with(ok(json!([{ "id": 4 }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/guests/4"))
        .respond_with(ok(json!({ "id": 4, "email": "lilei@example.com" })))
        .mount(&server)
        .await;

    assert_eq!(client.guests().all().await.unwrap().len(), 1);
    assert_eq!(
        client.guests().get(4).await.unwrap()["email"],
        "lilei@example.com"
    );
}

// ── Users ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_user_crud() {
    let (server, client) = setup().await;
    let user = json!({ "username": "desk2", "password": "pw", "role": "RECEPTIONIST" });

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ok(json!([{ "id": 1, "username": "admin" }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(&user))
        .respond_with(ok(json!({ "id": 8, "username": "desk2" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/8"))
        .respond_with(ok(json!({ "id": 8, "enabled": false })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/8"))
        .respond_with(ok_message("用户删除成功"))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.users();
    assert_eq!(users.all().await.unwrap()[0]["username"], "admin");
    assert_eq!(users.create(&user).await.unwrap()["id"], 8);
    assert_eq!(
        users.update(8, &json!({ "enabled": false })).await.unwrap()["enabled"],
        false
    );
    assert_eq!(users.delete(8).await.unwrap().message(), "用户删除成功");
}

// ── Statistics ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_statistics_date_range_formats_dates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/statistics/date-range"))
        .and(query_param("startDate", "2024-01-01"))
        .and(query_param("endDate", "2024-01-31"))
        .respond_with(ok(json!({ "totalRevenue": 15230.5, "totalReservations": 41 })))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client
        .statistics()
        .date_range(date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    assert_eq!(stats["totalReservations"], 41);
}

#[tokio::test]
async fn test_statistics_without_data_is_empty_object() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/statistics/today"))
        .respond_with(ok_message("ok"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/statistics/room-types"))
        .respond_with(ok(json!({ "STANDARD": 12, "DELUXE": 6 })))
        .mount(&server)
        .await;

    assert!(client.statistics().today().await.unwrap().is_empty());
    let by_type = client.statistics().room_types().await.unwrap();
    assert_eq!(by_type["DELUXE"], 6);
}

// ── Payments ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_payment() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/payments/create"))
        .and(body_json(json!({ "reservationId": 77, "amount": 576.0 })))
        .respond_with(ok(json!({ "transactionId": "TXN-9", "status": "PENDING" })))
        .expect(1)
        .mount(&server)
        .await;

    let payment = client.payments().create(77, 576.0, None).await.unwrap();
    assert_eq!(payment["transactionId"], "TXN-9");
}

#[tokio::test]
async fn test_simulated_payment_callback() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/payments/callback"))
        .respond_with(ok_message("支付成功"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client.payments().simulate("TXN-9").await.unwrap();
    assert!(envelope.success);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["transactionId"], "TXN-9");
    assert_eq!(body["status"], "SUCCESS");

    let provider_id = body["providerTransactionId"].as_str().unwrap();
    let millis = provider_id.strip_prefix("SIM_").unwrap();
    assert!(!millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()));
}
