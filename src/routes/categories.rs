use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::CatalogRepository;
use crate::routes::{base_context, not_found, render_template};
use crate::services::ServiceError;
use crate::services::categories::show_category as show_category_service;

#[get("/category/{slug}")]
pub async fn show_category(
    slug: web::Path<String>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "category", &repo);

    match show_category_service(&slug, repo.get_ref()) {
        Ok(view) => {
            context.insert("category", &view.category);
            context.insert("personalities", &view.personalities);
            render_template(&tera, "categories/show.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, context, "Category not found"),
        Err(err) => {
            log::error!("Failed to render category page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
