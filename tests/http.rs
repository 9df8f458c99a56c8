mod common;

use std::net::TcpListener;

use reqwest::StatusCode;
use rideline::server::router;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{ride_request, Fixture, FROM_LAT, FROM_LONG, TO_LAT, TO_LONG};

#[tokio::test]
async fn ride_over_http() {
    let fixture = Fixture::new();
    let passenger_id = fixture.signup_passenger(1).await;
    let driver_id = fixture.signup_driver(1).await;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let app = router(fixture.engine);
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });

    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/rides", base))
        .json(&ride_request(passenger_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let ride_id = body["rideId"].as_str().unwrap().to_string();

    let res = client
        .patch(format!("{}/rides/{}/accept", base, ride_id))
        .json(&json!({ "driverId": driver_id }))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "accepted");

    let res = client
        .patch(format!("{}/rides/{}/start", base, ride_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    for (lat, long) in [(FROM_LAT, FROM_LONG), (TO_LAT, TO_LONG)] {
        let res = client
            .post(format!("{}/rides/{}/positions", base, ride_id))
            .json(&json!({ "lat": lat, "long": long }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = client
        .post(format!("{}/rides/{}/positions", base, Uuid::new_v4()))
        .json(&json!({ "lat": FROM_LAT, "long": FROM_LONG }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .patch(format!("{}/rides/{}/finish", base, ride_id))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert!((body["distance"].as_f64().unwrap() - 10.04).abs() < 0.01);

    let res = client
        .post(format!("{}/rides/{}/positions", base, ride_id))
        .json(&json!({ "lat": TO_LAT, "long": TO_LONG }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
}
