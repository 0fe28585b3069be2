use axum::http::StatusCode;
use chrono::Weekday;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use slotbook_core::models::{
    appointment::{AppointmentResponse, AppointmentStatus},
    business::{BreakTime, BusinessSettings, WorkingHours},
};
use slotbook_db::store::MockBookingStore;
use uuid::Uuid;

use crate::test_utils::*;

#[tokio::test]
async fn test_list_appointments_filters_by_status_and_service() {
    let service_id = Uuid::new_v4();
    let mut store = MockBookingStore::new();
    store
        .expect_list_appointments()
        .withf(move |filter| {
            filter.status == Some(AppointmentStatus::Approved)
                && filter.service_id == Some(service_id)
                && filter.date_from == Some(at(0, 0))
                && filter.customer_id.is_none()
        })
        .returning(|_| {
            Ok(vec![appointment(
                at(10, 0),
                at(10, 30),
                AppointmentStatus::Approved,
            )])
        });

    let response = server(store)
        .get("/api/admin/appointments")
        .add_query_param("status", "Approved")
        .add_query_param("service_id", service_id)
        .add_query_param("date_from", "2025-11-05T00:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let listed = response.json::<Vec<AppointmentResponse>>();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].service_name, "Haircut");
}

#[rstest]
#[case("archived")]
#[case("")]
#[tokio::test]
async fn test_list_appointments_ignores_unknown_status(#[case] status: &str) {
    let mut store = MockBookingStore::new();
    store
        .expect_list_appointments()
        .withf(|filter| filter.status.is_none())
        .times(1)
        .returning(|_| {
            Ok(vec![
                appointment(at(10, 0), at(10, 30), AppointmentStatus::Approved),
                appointment(at(11, 0), at(11, 30), AppointmentStatus::Cancelled),
            ])
        });

    let response = server(store)
        .get("/api/admin/appointments")
        .add_query_param("status", status)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<AppointmentResponse>>().len(), 2);
}

#[tokio::test]
async fn test_approve_pending_appointment() {
    let pending = appointment(at(10, 0), at(10, 30), AppointmentStatus::Pending);
    let id = pending.id;
    let mut approved = pending.clone();
    approved.status = AppointmentStatus::Approved;

    let mut store = MockBookingStore::new();
    store
        .expect_get_appointment()
        .with(predicate::eq(id))
        .returning(move |_| Ok(Some(pending.clone())));
    store
        .expect_update_appointment_status()
        .with(
            predicate::eq(id),
            predicate::eq(AppointmentStatus::Approved),
            predicate::eq(None::<String>),
        )
        .times(1)
        .returning(move |_, _, _| Ok(Some(approved.clone())));

    let response = server(store)
        .put(&format!("/api/admin/appointments/{}/approve", id))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let approved = response.json::<AppointmentResponse>();
    assert_eq!(approved.status, AppointmentStatus::Approved);
    assert_eq!(approved.service_name, "Haircut");
}

#[tokio::test]
async fn test_approve_rejected_appointment_is_rejected() {
    let rejected = appointment(at(10, 0), at(10, 30), AppointmentStatus::Rejected);
    let id = rejected.id;

    let mut store = MockBookingStore::new();
    store
        .expect_get_appointment()
        .returning(move |_| Ok(Some(rejected.clone())));

    let response = server(store)
        .put(&format!("/api/admin/appointments/{}/approve", id))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reject_records_admin_note() {
    let approved = appointment(at(10, 0), at(10, 30), AppointmentStatus::Approved);
    let id = approved.id;
    let mut rejected = approved.clone();
    rejected.status = AppointmentStatus::Rejected;
    rejected.admin_note = Some("Barber is ill".to_string());

    let mut store = MockBookingStore::new();
    store
        .expect_get_appointment()
        .returning(move |_| Ok(Some(approved.clone())));
    store
        .expect_update_appointment_status()
        .with(
            predicate::eq(id),
            predicate::eq(AppointmentStatus::Rejected),
            predicate::eq(Some("Barber is ill".to_string())),
        )
        .times(1)
        .returning(move |_, _, _| Ok(Some(rejected.clone())));

    let response = server(store)
        .put(&format!("/api/admin/appointments/{}/reject", id))
        .json(&json!({ "admin_note": "Barber is ill" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_staff_cancel_ignores_ownership() {
    let pending = appointment(at(10, 0), at(10, 30), AppointmentStatus::Pending);
    let id = pending.id;
    let mut cancelled = pending.clone();
    cancelled.status = AppointmentStatus::Cancelled;

    let mut store = MockBookingStore::new();
    store
        .expect_get_appointment()
        .returning(move |_| Ok(Some(pending.clone())));
    store
        .expect_update_appointment_status()
        .times(1)
        .returning(move |_, _, _| Ok(Some(cancelled.clone())));

    let response = server(store)
        .put(&format!("/api/admin/appointments/{}/cancel", id))
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_missing_appointment_is_not_found() {
    let mut store = MockBookingStore::new();
    store.expect_delete_appointment().returning(|_| Ok(false));

    let response = server(store)
        .delete(&format!("/api/admin/appointments/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_appointment() {
    let id = Uuid::new_v4();
    let mut store = MockBookingStore::new();
    store
        .expect_delete_appointment()
        .with(predicate::eq(id))
        .times(1)
        .returning(|_| Ok(true));

    let response = server(store)
        .delete(&format!("/api/admin/appointments/{}", id))
        .await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_settings() {
    let mut store = MockBookingStore::new();
    store
        .expect_business_settings()
        .returning(|| Ok(Some(settings())));

    let response = server(store).get("/api/admin/settings").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<BusinessSettings>(), settings());
}

#[tokio::test]
async fn test_update_settings() {
    let mut store = MockBookingStore::new();
    store
        .expect_update_business_settings()
        .withf(|request| request.slot_duration_minutes == 20 && request.buffer_time_minutes == 10)
        .times(1)
        .returning(|request| {
            let mut updated = settings();
            updated.slot_duration_minutes = request.slot_duration_minutes;
            updated.buffer_time_minutes = request.buffer_time_minutes;
            Ok(Some(updated))
        });

    let response = server(store)
        .put("/api/admin/settings")
        .json(&json!({
            "business_name": "Elite Barber",
            "slot_duration_minutes": 20,
            "buffer_time_minutes": 10,
            "allow_same_day_booking": false,
            "max_advance_booking_days": 14,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<BusinessSettings>().buffer_time_minutes, 10);
}

#[tokio::test]
async fn test_update_settings_with_zero_slot_is_rejected() {
    let response = server(MockBookingStore::new())
        .put("/api/admin/settings")
        .json(&json!({
            "business_name": "Elite Barber",
            "slot_duration_minutes": 0,
            "buffer_time_minutes": 0,
            "allow_same_day_booking": true,
            "max_advance_booking_days": 30,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_working_hours() {
    let mut store = MockBookingStore::new();
    store
        .expect_list_working_hours()
        .returning(|| Ok(vec![working_hours(Weekday::Mon), working_hours(Weekday::Tue)]));

    let response = server(store).get("/api/admin/working-hours").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let days: Vec<Weekday> = response
        .json::<Vec<WorkingHours>>()
        .into_iter()
        .map(|hours| hours.day_of_week)
        .collect();
    assert_eq!(days, vec![Weekday::Mon, Weekday::Tue]);
}

#[tokio::test]
async fn test_update_working_hours_with_inverted_times_is_rejected() {
    let response = server(MockBookingStore::new())
        .put(&format!("/api/admin/working-hours/{}", Uuid::new_v4()))
        .json(&json!({
            "is_open": true,
            "open_time": "18:00:00",
            "close_time": "09:00:00",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_working_hours_is_not_found() {
    let mut store = MockBookingStore::new();
    store
        .expect_update_working_hours()
        .returning(|_, _| Ok(None));

    let response = server(store)
        .put(&format!("/api/admin/working-hours/{}", Uuid::new_v4()))
        .json(&json!({
            "is_open": true,
            "open_time": "10:00:00",
            "close_time": "16:00:00",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_break_time() {
    let mut store = MockBookingStore::new();
    store
        .expect_create_break_time()
        .withf(|request| request.day_of_week == Weekday::Fri)
        .times(1)
        .returning(|request| {
            let mut created = lunch(request.day_of_week);
            created.start_time = request.start_time;
            created.end_time = request.end_time;
            Ok(created)
        });

    let response = server(store)
        .post("/api/admin/break-times")
        .json(&json!({
            "day_of_week": "Fri",
            "start_time": "15:00:00",
            "end_time": "15:30:00",
            "description": "Coffee",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created = response.json::<BreakTime>();
    assert_eq!(created.start_time, time(15, 0));
    assert_eq!(created.end_time, time(15, 30));
}

#[tokio::test]
async fn test_create_empty_break_time_is_rejected() {
    let response = server(MockBookingStore::new())
        .post("/api/admin/break-times")
        .json(&json!({
            "day_of_week": "Fri",
            "start_time": "15:00:00",
            "end_time": "15:00:00",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_break_time_is_not_found() {
    let mut store = MockBookingStore::new();
    store.expect_delete_break_time().returning(|_| Ok(false));

    let response = server(store)
        .delete(&format!("/api/admin/break-times/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
