use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::transactions::{AddTransactionForm, EditTransactionForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::transactions::{
    create_transaction, export_transactions, load_transactions_page, modify_transaction,
    remove_transaction,
};

pub const TRANSACTIONS: EntityLabels = EntityLabels {
    slug: "transaksi",
    noun: "transaksi",
    title: "Transaksi",
    id_label: "ID Transaksi",
};

#[get("/transaksi")]
pub async fn show_transactions(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_transactions_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, TRANSACTIONS.slug);
            context.insert("page", &page);
            render_template(&tera, &TRANSACTIONS.template(), &context)
        }
        Err(err) => page_error(&TRANSACTIONS, err),
    }
}

#[post("/transaksi/add")]
pub async fn add_transaction(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddTransactionForm>,
) -> impl Responder {
    after_create(
        &TRANSACTIONS,
        create_transaction(repo.get_ref(), form.into_inner()),
    )
}

#[post("/transaksi/edit")]
pub async fn edit_transaction(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditTransactionForm>,
) -> impl Responder {
    after_update(
        &TRANSACTIONS,
        modify_transaction(repo.get_ref(), form.into_inner()),
    )
}

#[post("/transaksi/{transaction_id}/delete")]
pub async fn delete_transaction(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let transaction_id = path.into_inner();
    after_delete(
        &TRANSACTIONS,
        &transaction_id,
        remove_transaction(repo.get_ref(), &transaction_id),
    )
}

#[get("/transaksi/export")]
pub async fn download_transactions(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&TRANSACTIONS, export_transactions(repo.get_ref()))
}
