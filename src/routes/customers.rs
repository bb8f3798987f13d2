use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::customers::{
    create_customer, export_customers, load_customers_page, modify_customer, remove_customer,
};

pub const CUSTOMERS: EntityLabels = EntityLabels {
    slug: "pelanggan",
    noun: "pelanggan",
    title: "Pelanggan",
    id_label: "ID Pelanggan",
};

#[get("/pelanggan")]
pub async fn show_customers(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_customers_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, CUSTOMERS.slug);
            context.insert("page", &page);
            render_template(&tera, &CUSTOMERS.template(), &context)
        }
        Err(err) => page_error(&CUSTOMERS, err),
    }
}

#[post("/pelanggan/add")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddCustomerForm>,
) -> impl Responder {
    after_create(&CUSTOMERS, create_customer(repo.get_ref(), form.into_inner()))
}

#[post("/pelanggan/edit")]
pub async fn edit_customer(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditCustomerForm>,
) -> impl Responder {
    after_update(&CUSTOMERS, modify_customer(repo.get_ref(), form.into_inner()))
}

#[post("/pelanggan/{customer_id}/delete")]
pub async fn delete_customer(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let customer_id = path.into_inner();
    after_delete(
        &CUSTOMERS,
        &customer_id,
        remove_customer(repo.get_ref(), &customer_id),
    )
}

#[get("/pelanggan/export")]
pub async fn download_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&CUSTOMERS, export_customers(repo.get_ref()))
}
