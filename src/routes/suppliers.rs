use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::suppliers::{AddSupplierForm, EditSupplierForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::suppliers::{
    create_supplier, export_suppliers, load_suppliers_page, modify_supplier, remove_supplier,
};

pub const SUPPLIERS: EntityLabels = EntityLabels {
    slug: "supplier",
    noun: "supplier",
    title: "Supplier",
    id_label: "ID Supplier",
};

#[get("/supplier")]
pub async fn show_suppliers(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_suppliers_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, SUPPLIERS.slug);
            context.insert("page", &page);
            render_template(&tera, &SUPPLIERS.template(), &context)
        }
        Err(err) => page_error(&SUPPLIERS, err),
    }
}

#[post("/supplier/add")]
pub async fn add_supplier(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddSupplierForm>,
) -> impl Responder {
    after_create(&SUPPLIERS, create_supplier(repo.get_ref(), form.into_inner()))
}

#[post("/supplier/edit")]
pub async fn edit_supplier(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditSupplierForm>,
) -> impl Responder {
    after_update(&SUPPLIERS, modify_supplier(repo.get_ref(), form.into_inner()))
}

#[post("/supplier/{supplier_id}/delete")]
pub async fn delete_supplier(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let supplier_id = path.into_inner();
    after_delete(
        &SUPPLIERS,
        &supplier_id,
        remove_supplier(repo.get_ref(), &supplier_id),
    )
}

#[get("/supplier/export")]
pub async fn download_suppliers(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&SUPPLIERS, export_suppliers(repo.get_ref()))
}
