//! Read-only JSON views of every table and report.
//!
//! Empty tables serialize as `{"kind": "no_data"}` so clients can tell them
//! apart from a failed request.

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::repository::DieselRepository;
use crate::services::reports::{parse_report_kind, report_json};
use crate::services::{
    ServiceError, ServiceResult, attendance, customers, employees, feedback, menu, raw_materials,
    suppliers, transactions,
};

fn json_response<T: Serialize>(what: &str, result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to list {what}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/karyawan")]
pub async fn api_v1_employees(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response("employees", employees::list_employees(repo.get_ref()))
}

#[get("/v1/pelanggan")]
pub async fn api_v1_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response("customers", customers::list_customers(repo.get_ref()))
}

#[get("/v1/supplier")]
pub async fn api_v1_suppliers(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response("suppliers", suppliers::list_suppliers(repo.get_ref()))
}

#[get("/v1/bahan-baku")]
pub async fn api_v1_raw_materials(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response(
        "raw materials",
        raw_materials::list_raw_materials(repo.get_ref()),
    )
}

#[get("/v1/menu")]
pub async fn api_v1_menu(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response("menu items", menu::list_menu_items(repo.get_ref()))
}

#[get("/v1/transaksi")]
pub async fn api_v1_transactions(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response(
        "transactions",
        transactions::list_transactions(repo.get_ref()),
    )
}

#[get("/v1/feedback")]
pub async fn api_v1_feedback(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response("feedback", feedback::list_feedback(repo.get_ref()))
}

#[get("/v1/absensi")]
pub async fn api_v1_attendance(repo: web::Data<DieselRepository>) -> impl Responder {
    json_response("attendance", attendance::list_attendance(repo.get_ref()))
}

#[get("/v1/reports/{report}")]
pub async fn api_v1_report(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = parse_report_kind(&path).and_then(|kind| report_json(repo.get_ref(), kind));
    json_response("report", result)
}
