//! HTTP handlers and the response helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::services::{CsvExport, ServiceError, ServiceResult};

pub mod api;
pub mod attendance;
pub mod customers;
pub mod employees;
pub mod feedback;
pub mod main;
pub mod menu;
pub mod raw_materials;
pub mod reports;
pub mod suppliers;
pub mod transactions;

/// Names used in URLs and user-facing messages for one entity screen.
#[derive(Debug, Clone, Copy)]
pub struct EntityLabels {
    /// URL segment, e.g. `bahan-baku`.
    pub slug: &'static str,
    /// Lowercase noun used inside sentences.
    pub noun: &'static str,
    /// Capitalised noun used at the start of sentences.
    pub title: &'static str,
    /// Label of the identifier column.
    pub id_label: &'static str,
}

impl EntityLabels {
    pub fn index_url(&self) -> String {
        format!("/{}", self.slug)
    }

    pub fn action_url(&self, action: &str) -> String {
        format!("/{}?action={action}", self.slug)
    }

    pub fn template(&self) -> String {
        format!("{}/index.html", self.slug)
    }
}

#[derive(Serialize)]
struct Alert {
    level: &'static str,
    message: String,
}

fn alert_class(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Template context carrying flash alerts and the active sidebar entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_class(message.level()),
            message: message.content().to_string(),
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Serve CSV bytes as a file download.
pub fn csv_response(export: CsvExport) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
        ))
        .body(export.bytes)
}

/// Flash text for an unexpected failure; database messages are shown verbatim.
pub(crate) fn failure_message(action: String, err: &ServiceError) -> String {
    match err {
        ServiceError::Data(message) | ServiceError::Connection(message) => {
            format!("{action}: {message}")
        }
        _ => format!("{action}."),
    }
}

/// Response for a page whose data could not be loaded.
pub(crate) fn page_error(labels: &EntityLabels, err: ServiceError) -> HttpResponse {
    log::error!("Failed to load {} page: {err}", labels.slug);
    HttpResponse::InternalServerError().finish()
}

pub(crate) fn after_create<T>(labels: &EntityLabels, result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(_) => {
            FlashMessage::success(format!("Data {} berhasil ditambahkan.", labels.noun)).send();
            redirect(&labels.index_url())
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&labels.action_url("tambah"))
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error(format!("Error: {} sudah ada.", labels.id_label)).send();
            redirect(&labels.action_url("tambah"))
        }
        Err(ServiceError::Reference(_)) => {
            FlashMessage::error("Data yang dirujuk tidak ditemukan.").send();
            redirect(&labels.action_url("tambah"))
        }
        Err(err) => {
            log::error!("Failed to create {}: {err}", labels.noun);
            let action = format!("Gagal menambahkan data {}", labels.noun);
            FlashMessage::error(failure_message(action, &err)).send();
            redirect(&labels.action_url("tambah"))
        }
    }
}

pub(crate) fn after_update<T>(labels: &EntityLabels, result: ServiceResult<T>) -> HttpResponse {
    match result {
        Ok(_) => {
            FlashMessage::success(format!("Data {} berhasil diperbarui.", labels.noun)).send();
            redirect(&labels.index_url())
        }
        Err(ServiceError::NothingToUpdate) => {
            FlashMessage::warning("Tidak ada field yang diperbarui.").send();
            redirect(&labels.action_url("perbarui"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning(format!("{} tidak ditemukan.", labels.title)).send();
            redirect(&labels.action_url("perbarui"))
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&labels.action_url("perbarui"))
        }
        Err(ServiceError::Reference(_)) => {
            FlashMessage::error("Data yang dirujuk tidak ditemukan.").send();
            redirect(&labels.action_url("perbarui"))
        }
        Err(err) => {
            log::error!("Failed to update {}: {err}", labels.noun);
            let action = format!("Gagal memperbarui data {}", labels.noun);
            FlashMessage::error(failure_message(action, &err)).send();
            redirect(&labels.action_url("perbarui"))
        }
    }
}

pub(crate) fn after_delete(labels: &EntityLabels, id: &str, result: ServiceResult<()>) -> HttpResponse {
    match result {
        Ok(()) => {
            FlashMessage::success(format!("Data {} berhasil dihapus.", labels.noun)).send();
            redirect(&labels.index_url())
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::warning(format!("{} tidak ditemukan.", labels.title)).send();
            redirect(&labels.action_url("hapus"))
        }
        Err(ServiceError::Reference(_)) => {
            FlashMessage::error(format!(
                "{} {id} masih digunakan oleh data lain dan tidak dapat dihapus.",
                labels.title
            ))
            .send();
            redirect(&labels.action_url("hapus"))
        }
        Err(err) => {
            log::error!("Failed to delete {} {id}: {err}", labels.noun);
            let action = format!("Gagal menghapus data {}", labels.noun);
            FlashMessage::error(failure_message(action, &err)).send();
            redirect(&labels.action_url("hapus"))
        }
    }
}

pub(crate) fn export_response(
    labels: &EntityLabels,
    result: ServiceResult<CsvExport>,
) -> HttpResponse {
    match result {
        Ok(export) => csv_response(export),
        Err(ServiceError::NoData) => {
            FlashMessage::info(format!("Belum ada data {}.", labels.noun)).send();
            redirect(&labels.index_url())
        }
        Err(err) => {
            log::error!("Failed to export {}: {err}", labels.noun);
            FlashMessage::error(format!("Gagal mengunduh data {}.", labels.noun)).send();
            redirect(&labels.index_url())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: EntityLabels = EntityLabels {
        slug: "bahan-baku",
        noun: "bahan baku",
        title: "Bahan baku",
        id_label: "ID Bahan Baku",
    };

    #[test]
    fn labels_build_urls() {
        assert_eq!(LABELS.index_url(), "/bahan-baku");
        assert_eq!(LABELS.action_url("hapus"), "/bahan-baku?action=hapus");
        assert_eq!(LABELS.template(), "bahan-baku/index.html");
    }

    #[test]
    fn failure_message_shows_database_text() {
        let err = ServiceError::Data("CHECK constraint failed: stock >= 0".to_string());
        assert_eq!(
            failure_message("Gagal menambahkan data bahan baku".to_string(), &err),
            "Gagal menambahkan data bahan baku: CHECK constraint failed: stock >= 0"
        );

        let err = ServiceError::Connection("database is locked".to_string());
        assert_eq!(
            failure_message("Gagal menghapus data menu".to_string(), &err),
            "Gagal menghapus data menu: database is locked"
        );

        assert_eq!(
            failure_message("Gagal memperbarui data menu".to_string(), &ServiceError::NoData),
            "Gagal memperbarui data menu."
        );
    }

    #[test]
    fn redirect_uses_see_other() {
        let response = redirect("/karyawan");

        assert_eq!(response.status(), actix_web::http::StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some("/karyawan")
        );
    }

    #[test]
    fn csv_response_is_an_attachment() {
        let response = csv_response(CsvExport {
            file_name: "daftar_menu.csv",
            bytes: b"ID Menu,Nama Menu,Harga\n".to_vec(),
        });

        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|value| value.to_str().ok()),
            Some("attachment; filename=\"daftar_menu.csv\"")
        );
    }
}
