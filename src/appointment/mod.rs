mod responses;

use actix_web::{web, HttpResponse};

use crate::{
    database::Store, error::ApiError, models::appointments::BookingRequest,
    protocol::MessageResponse, utils::parse_path_id,
};

use self::responses::{AppointResponse, BOOKED_MESSAGE, CANCELLED_MESSAGE};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/appointments")
            .route(web::get().to(search_appoint))
            .route(web::post().to(appoint)),
    )
    .service(
        web::resource("/appointments/{id}")
            .route(web::get().to(view_appoint))
            .route(web::delete().to(cancel_appoint)),
    );
}

crate::api_funcs! {
    (appoint, info: web::Json<BookingRequest>),
    (search_appoint),
    (view_appoint, id: web::Path<String>),
    (cancel_appoint, id: web::Path<String>),
}

fn appointment_id(id: web::Path<String>) -> Result<u64, ApiError> {
    parse_path_id(id.into_inner()).ok_or(ApiError::AppointmentNotFound)
}

fn appoint_impl(store: &Store, info: web::Json<BookingRequest>) -> Result<HttpResponse, ApiError> {
    let appointment = store.book(&info)?;
    log::info!(
        "booked appointment {} with doctor {} on {} at {}",
        appointment.id,
        appointment.doctor_id,
        appointment.date,
        appointment.time
    );

    Ok(HttpResponse::Created().json(AppointResponse {
        message: BOOKED_MESSAGE.to_string(),
        appointment,
    }))
}

fn search_appoint_impl(store: &Store) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_appointments()))
}

fn view_appoint_impl(store: &Store, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let appointment = store.get_appointment(appointment_id(id)?)?;
    Ok(HttpResponse::Ok().json(appointment))
}

fn cancel_appoint_impl(store: &Store, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let appointment = store.cancel_appointment(appointment_id(id)?)?;
    log::info!(
        "cancelled appointment {}, released doctor {} at {} {}",
        appointment.id,
        appointment.doctor_id,
        appointment.date,
        appointment.time
    );

    Ok(HttpResponse::Ok().json(MessageResponse::new(CANCELLED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::database::Store;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Store::seeded().unwrap()))
                    .configure(crate::config),
            )
            .await
        };
    }

    fn booking() -> Value {
        json!({
            "doctorId": 1,
            "date": "2024-01-15",
            "time": "09:00",
            "patientName": "John Doe",
            "patientEmail": "john.doe@email.com",
            "patientPhone": "+1-555-1234",
            "reason": "Regular checkup"
        })
    }

    #[actix_web::test]
    async fn book_then_double_book() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(booking())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Appointment booked successfully");
        assert_eq!(body["appointment"]["id"], 1);
        assert_eq!(body["appointment"]["status"], "confirmed");
        assert_eq!(body["appointment"]["doctorName"], "Dr. Sarah Johnson");
        assert!(body["appointment"]["bookedAt"].as_str().unwrap().ends_with('Z'));

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(booking())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Slot is not available");
    }

    #[actix_web::test]
    async fn missing_fields_are_rejected() {
        let app = app!();
        let mut body = booking();
        body.as_object_mut().unwrap().remove("patientPhone");

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "All fields are required (missing: patientPhone)"
        );

        let req = test::TestRequest::get().uri("/api/appointments").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn unknown_doctor_is_404() {
        let app = app!();
        let mut body = booking();
        body["doctorId"] = json!(999);

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Doctor not found");
    }

    #[actix_web::test]
    async fn unknown_appointment_is_404() {
        let app = app!();
        for uri in ["/api/appointments/999", "/api/appointments/abc"] {
            for req in [
                test::TestRequest::get().uri(uri).to_request(),
                test::TestRequest::delete().uri(uri).to_request(),
            ] {
                let resp = test::call_service(&app, req).await;
                assert_eq!(resp.status(), StatusCode::NOT_FOUND);
                let body: Value = test::read_body_json(resp).await;
                assert_eq!(body["message"], "Appointment not found");
            }
        }
    }

    #[actix_web::test]
    async fn malformed_body_gets_message() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().starts_with("Invalid request"));
    }

    #[actix_web::test]
    async fn cancel_frees_the_slot() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(booking())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/appointments/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["patientName"], "John Doe");

        let req = test::TestRequest::delete().uri("/api/appointments/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Appointment cancelled successfully");

        let req = test::TestRequest::get().uri("/api/appointments").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));

        let req = test::TestRequest::get()
            .uri("/api/doctors/1/slots?date=2024-01-15")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0], json!({"date": "2024-01-15", "time": "09:00", "available": true}));

        let req = test::TestRequest::delete().uri("/api/appointments/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Appointment not found");

        let req = test::TestRequest::post()
            .uri("/api/appointments")
            .set_json(booking())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["appointment"]["id"], 2);
    }
}
