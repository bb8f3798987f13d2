use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, csv_response, redirect, render_template};
use crate::services::ServiceError;
use crate::services::reports::{export_report, load_report, parse_report_kind, report_links};

#[get("/laporan")]
pub async fn show_reports(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "laporan");
    context.insert("reports", &report_links());
    render_template(&tera, "laporan/index.html", &context)
}

#[get("/laporan/{report}")]
pub async fn show_report(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let result = parse_report_kind(&path).and_then(|kind| load_report(repo.get_ref(), kind));

    match result {
        Ok(table) => {
            let mut context = base_context(&flash_messages, "laporan");
            context.insert("reports", &report_links());
            context.insert("report", &table);
            render_template(&tera, "laporan/report.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning("Laporan tidak ditemukan.").send();
            redirect("/laporan")
        }
        Err(err) => {
            log::error!("Failed to build report {}: {err}", path.as_str());
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/laporan/{report}/export")]
pub async fn download_report(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let slug = path.into_inner();

    match parse_report_kind(&slug).and_then(|kind| export_report(repo.get_ref(), kind)) {
        Ok(export) => csv_response(export),
        Err(ServiceError::NotFound) => {
            FlashMessage::warning("Laporan tidak ditemukan.").send();
            redirect("/laporan")
        }
        Err(ServiceError::NoData) => {
            FlashMessage::info("Belum ada data untuk laporan ini.").send();
            redirect(&format!("/laporan/{slug}"))
        }
        Err(err) => {
            log::error!("Failed to export report {slug}: {err}");
            FlashMessage::error("Gagal mengunduh laporan.").send();
            redirect(&format!("/laporan/{slug}"))
        }
    }
}
