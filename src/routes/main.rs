use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::forms::FieldErrors;
use crate::forms::events::RegistrationForm;
use crate::models::config::AccessKeys;
use crate::relay::Web3FormsRelay;
use crate::repository::CatalogRepository;
use crate::routes::{
    FormPage, base_context, not_found as render_not_found, render_template, submission_response,
};
use crate::services::main::show_index;
use crate::services::submissions::submit_registration;

fn index_context(
    flash_messages: &IncomingFlashMessages,
    repo: &CatalogRepository,
    form: &RegistrationForm,
) -> Context {
    let mut context = base_context(flash_messages, "index", repo);
    context.insert("view", &show_index(repo));
    context.insert("form", form);
    context.insert("errors", &FieldErrors::new());
    context
}

#[get("/")]
pub async fn index(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = index_context(&flash_messages, &repo, &RegistrationForm::default());
    render_template(&tera, "main/index.html", &context)
}

#[get("/about")]
pub async fn about(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "about", &repo);
    render_template(&tera, "main/about.html", &context)
}

#[post("/register")]
pub async fn register(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
    relay: web::Data<Web3FormsRelay>,
    access_keys: web::Data<AccessKeys>,
    web::Form(form): web::Form<RegistrationForm>,
) -> impl Responder {
    let context = index_context(&flash_messages, &repo, &form);
    let result = submit_registration(form.clone(), &access_keys, relay.get_ref()).await;

    submission_response(
        result,
        FormPage {
            template: "main/index.html",
            form: &form,
            success_message: "Registration received! We'll review your profile and send a confirmation email soon.",
            redirect_to: "/",
        },
        &tera,
        context,
    )
}

/// Fallback for every unmatched path.
pub async fn not_found(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let context = base_context(&flash_messages, "not_found", &repo);
    render_not_found(&tera, context, "Page not found")
}
