use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::raw_material::UNITS;
use crate::forms::raw_materials::{AddRawMaterialForm, EditRawMaterialForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::raw_materials::{
    create_raw_material, export_raw_materials, load_raw_materials_page, modify_raw_material,
    remove_raw_material,
};

pub const RAW_MATERIALS: EntityLabels = EntityLabels {
    slug: "bahan-baku",
    noun: "bahan baku",
    title: "Bahan baku",
    id_label: "ID Bahan Baku",
};

#[get("/bahan-baku")]
pub async fn show_raw_materials(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_raw_materials_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, RAW_MATERIALS.slug);
            context.insert("page", &page);
            context.insert("units", &UNITS);
            render_template(&tera, &RAW_MATERIALS.template(), &context)
        }
        Err(err) => page_error(&RAW_MATERIALS, err),
    }
}

#[post("/bahan-baku/add")]
pub async fn add_raw_material(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddRawMaterialForm>,
) -> impl Responder {
    after_create(
        &RAW_MATERIALS,
        create_raw_material(repo.get_ref(), form.into_inner()),
    )
}

#[post("/bahan-baku/edit")]
pub async fn edit_raw_material(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditRawMaterialForm>,
) -> impl Responder {
    after_update(
        &RAW_MATERIALS,
        modify_raw_material(repo.get_ref(), form.into_inner()),
    )
}

#[post("/bahan-baku/{material_id}/delete")]
pub async fn delete_raw_material(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let material_id = path.into_inner();
    after_delete(
        &RAW_MATERIALS,
        &material_id,
        remove_raw_material(repo.get_ref(), &material_id),
    )
}

#[get("/bahan-baku/export")]
pub async fn download_raw_materials(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&RAW_MATERIALS, export_raw_materials(repo.get_ref()))
}
