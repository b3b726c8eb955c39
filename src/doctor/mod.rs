mod requests;

use actix_web::{web, HttpResponse};

use crate::{database::Store, error::ApiError, utils::parse_path_id};

use self::requests::{SearchDoctorRequest, SearchSlotRequest};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/doctors", web::get().to(search_doctor))
        .route("/doctors/{id}", web::get().to(view_doctor))
        .route("/doctors/{id}/slots", web::get().to(search_slot))
        .route("/specialties", web::get().to(search_specialty));
}

crate::api_funcs! {
    (search_doctor, info: web::Query<SearchDoctorRequest>),
    (view_doctor, id: web::Path<String>),
    (search_slot, id: web::Path<String>, info: web::Query<SearchSlotRequest>),
    (search_specialty),
}

fn doctor_id(id: web::Path<String>) -> Result<u64, ApiError> {
    parse_path_id(id.into_inner()).ok_or(ApiError::DoctorNotFound)
}

fn search_doctor_impl(
    store: &Store,
    info: web::Query<SearchDoctorRequest>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.list_doctors(info.specialty())))
}

fn view_doctor_impl(store: &Store, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let doctor = store.get_doctor(doctor_id(id)?)?;
    Ok(HttpResponse::Ok().json(doctor))
}

fn search_slot_impl(
    store: &Store,
    id: web::Path<String>,
    info: web::Query<SearchSlotRequest>,
) -> Result<HttpResponse, ApiError> {
    let slots = store.list_slots(doctor_id(id)?, info.date())?;
    Ok(HttpResponse::Ok().json(slots))
}

fn search_specialty_impl(store: &Store) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(store.specialties()))
}
