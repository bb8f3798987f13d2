use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::attendance::AttendanceStatus;
use crate::forms::attendance::{AddAttendanceForm, EditAttendanceForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::attendance::{
    create_attendance, export_attendance, load_attendance_page, modify_attendance,
    remove_attendance,
};

pub const ATTENDANCE: EntityLabels = EntityLabels {
    slug: "absensi",
    noun: "absensi",
    title: "Absensi",
    id_label: "ID Absensi",
};

#[get("/absensi")]
pub async fn show_attendance(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_attendance_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, ATTENDANCE.slug);
            context.insert("page", &page);
            context.insert("statuses", &AttendanceStatus::ALL);
            render_template(&tera, &ATTENDANCE.template(), &context)
        }
        Err(err) => page_error(&ATTENDANCE, err),
    }
}

#[post("/absensi/add")]
pub async fn add_attendance(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddAttendanceForm>,
) -> impl Responder {
    after_create(
        &ATTENDANCE,
        create_attendance(repo.get_ref(), form.into_inner()),
    )
}

#[post("/absensi/edit")]
pub async fn edit_attendance(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditAttendanceForm>,
) -> impl Responder {
    after_update(
        &ATTENDANCE,
        modify_attendance(repo.get_ref(), form.into_inner()),
    )
}

#[post("/absensi/{attendance_id}/delete")]
pub async fn delete_attendance(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let attendance_id = path.into_inner();
    after_delete(
        &ATTENDANCE,
        &attendance_id,
        remove_attendance(repo.get_ref(), &attendance_id),
    )
}

#[get("/absensi/export")]
pub async fn download_attendance(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&ATTENDANCE, export_attendance(repo.get_ref()))
}
