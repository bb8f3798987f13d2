use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::employee::Position;
use crate::forms::employees::{AddEmployeeForm, EditEmployeeForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::employees::{
    create_employee, export_employees, load_employees_page, modify_employee, remove_employee,
};

pub const EMPLOYEES: EntityLabels = EntityLabels {
    slug: "karyawan",
    noun: "karyawan",
    title: "Karyawan",
    id_label: "ID Karyawan",
};

#[get("/karyawan")]
pub async fn show_employees(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_employees_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, EMPLOYEES.slug);
            context.insert("page", &page);
            context.insert("positions", &Position::ALL);
            render_template(&tera, &EMPLOYEES.template(), &context)
        }
        Err(err) => page_error(&EMPLOYEES, err),
    }
}

#[post("/karyawan/add")]
pub async fn add_employee(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddEmployeeForm>,
) -> impl Responder {
    after_create(&EMPLOYEES, create_employee(repo.get_ref(), form.into_inner()))
}

#[post("/karyawan/edit")]
pub async fn edit_employee(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditEmployeeForm>,
) -> impl Responder {
    after_update(&EMPLOYEES, modify_employee(repo.get_ref(), form.into_inner()))
}

#[post("/karyawan/{employee_id}/delete")]
pub async fn delete_employee(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let employee_id = path.into_inner();
    after_delete(
        &EMPLOYEES,
        &employee_id,
        remove_employee(repo.get_ref(), &employee_id),
    )
}

#[get("/karyawan/export")]
pub async fn download_employees(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&EMPLOYEES, export_employees(repo.get_ref()))
}
