use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::CatalogRepository;
use crate::services::ServiceError;
use crate::services::categories::{get_category, list_categories, list_category_personalities};
use crate::services::personalities::{get_personality, list_featured_personalities};
use crate::services::youth_spotlight::list_youth_stories;

fn json_or_not_found<T: serde::Serialize>(result: Result<T, ServiceError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to serve API request: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/categories")]
pub async fn api_v1_categories(repo: web::Data<CatalogRepository>) -> impl Responder {
    HttpResponse::Ok().json(list_categories(repo.get_ref()))
}

#[get("/v1/categories/{slug}")]
pub async fn api_v1_category(
    slug: web::Path<String>,
    repo: web::Data<CatalogRepository>,
) -> impl Responder {
    json_or_not_found(get_category(&slug, repo.get_ref()))
}

#[get("/v1/categories/{slug}/personalities")]
pub async fn api_v1_category_personalities(
    slug: web::Path<String>,
    repo: web::Data<CatalogRepository>,
) -> impl Responder {
    HttpResponse::Ok().json(list_category_personalities(&slug, repo.get_ref()))
}

#[get("/v1/personalities/featured")]
pub async fn api_v1_featured_personalities(repo: web::Data<CatalogRepository>) -> impl Responder {
    HttpResponse::Ok().json(list_featured_personalities(repo.get_ref()))
}

#[get("/v1/personalities/{id}")]
pub async fn api_v1_personality(
    id: web::Path<String>,
    repo: web::Data<CatalogRepository>,
) -> impl Responder {
    json_or_not_found(get_personality(&id, repo.get_ref()))
}

#[get("/v1/youth-stories")]
pub async fn api_v1_youth_stories(repo: web::Data<CatalogRepository>) -> impl Responder {
    HttpResponse::Ok().json(list_youth_stories(repo.get_ref()))
}
