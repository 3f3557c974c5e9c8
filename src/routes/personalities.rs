use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::CatalogRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::ServiceError;
use crate::services::personalities::show_personality as show_personality_service;

#[get("/personality/{id}")]
pub async fn show_personality(
    id: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "personality", &repo);

    match show_personality_service(&id, repo.get_ref()) {
        Ok(view) => {
            context.insert("personality", &view.personality);
            context.insert("category", &view.category);
            context.insert("related", &view.related);
            render_template(&tera, "personalities/show.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, context, "Personality not found"),
        Err(err) => {
            log::error!("Failed to render personality page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
