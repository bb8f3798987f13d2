use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::feedback::{MAX_RATING, MIN_RATING};
use crate::forms::feedback::{AddFeedbackForm, EditFeedbackForm};
use crate::repository::DieselRepository;
use crate::routes::{
    EntityLabels, after_create, after_delete, after_update, base_context, export_response,
    page_error, render_template,
};
use crate::services::EntityQuery;
use crate::services::feedback::{
    create_feedback, export_feedback, load_feedback_page, modify_feedback, remove_feedback,
};

pub const FEEDBACK: EntityLabels = EntityLabels {
    slug: "feedback",
    noun: "feedback",
    title: "Feedback",
    id_label: "ID Feedback",
};

#[get("/feedback")]
pub async fn show_feedback(
    params: web::Query<EntityQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_feedback_page(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, FEEDBACK.slug);
            context.insert("page", &page);
            context.insert("min_rating", &MIN_RATING);
            context.insert("max_rating", &MAX_RATING);
            render_template(&tera, &FEEDBACK.template(), &context)
        }
        Err(err) => page_error(&FEEDBACK, err),
    }
}

#[post("/feedback/add")]
pub async fn add_feedback(
    repo: web::Data<DieselRepository>,
    form: web::Form<AddFeedbackForm>,
) -> impl Responder {
    after_create(&FEEDBACK, create_feedback(repo.get_ref(), form.into_inner()))
}

#[post("/feedback/edit")]
pub async fn edit_feedback(
    repo: web::Data<DieselRepository>,
    form: web::Form<EditFeedbackForm>,
) -> impl Responder {
    after_update(&FEEDBACK, modify_feedback(repo.get_ref(), form.into_inner()))
}

#[post("/feedback/{feedback_id}/delete")]
pub async fn delete_feedback(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let feedback_id = path.into_inner();
    after_delete(
        &FEEDBACK,
        &feedback_id,
        remove_feedback(repo.get_ref(), &feedback_id),
    )
}

#[get("/feedback/export")]
pub async fn download_feedback(repo: web::Data<DieselRepository>) -> impl Responder {
    export_response(&FEEDBACK, export_feedback(repo.get_ref()))
}
