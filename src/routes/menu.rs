use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::forms::menu::{AddMenuItemForm, EditMenuItemForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::menu::{
    create_menu_item, export_menu, load_menu_page, modify_menu_item, remove_menu_item,
};

pub const MENU: EntityLabels = EntityLabels {
    slug: "menu",
    noun: "menu",
    title: "Menu",
    id_label: "ID Menu",
};

#[get("/menu")]
pub async fn show_menu(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_menu_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, MENU.slug);
            context.insert("page", &page);
            render_template(&tera, &MENU.template(), &context)
        }
        Err(err) => page_error(&MENU, err),
    }
}

#[post("/menu/add")]
pub async fn add_menu_item(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddMenuItemForm>,
) -> impl Responder {
    after_create(&MENU, create_menu_item(repo.get_ref(), form.into_inner()))
}

#[post("/menu/edit")]
pub async fn edit_menu_item(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditMenuItemForm>,
) -> impl Responder {
    after_update(&MENU, modify_menu_item(repo.get_ref(), form.into_inner()))
}

#[post("/menu/{item_id}/delete")]
pub async fn delete_menu_item(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let item_id = path.into_inner();
    after_delete(&MENU, &item_id, remove_menu_item(repo.get_ref(), &item_id))
}

#[get("/menu/export")]
pub async fn download_menu(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&MENU, export_menu(repo.get_ref()))
}
