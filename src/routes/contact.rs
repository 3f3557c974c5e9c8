use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::forms::FieldErrors;
use crate::forms::contact::ContactForm;
use crate::models::config::AccessKeys;
use crate::relay::Web3FormsRelay;
use crate::repository::CatalogRepository;
use crate::routes::{FormPage, base_context, render_template, submission_response};
use crate::services::submissions::submit_contact as submit_contact_service;

fn contact_context(
    flash_messages: &IncomingFlashMessages,
    repo: &CatalogRepository,
    form: &ContactForm,
) -> Context {
    let mut context = base_context(flash_messages, "contact", repo);
    context.insert("form", form);
    context.insert("errors", &FieldErrors::new());
    context
}

#[get("/contact")]
pub async fn show_contact(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = contact_context(&flash_messages, &repo, &ContactForm::default());
    render_template(&tera, "contact/index.html", &context)
}

#[post("/contact")]
pub async fn submit_contact(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
    relay: web::Data<Web3FormsRelay>,
    access_keys: web::Data<AccessKeys>,
    web::Form(form): web::Form<ContactForm>,
) -> impl Responder {
    let context = contact_context(&flash_messages, &repo, &form);
    let result = submit_contact_service(form.clone(), &access_keys, relay.get_ref()).await;

    submission_response(
        result,
        FormPage {
            template: "contact/index.html",
            form: &form,
            success_message: "Message sent! Thank you for reaching out. We'll respond soon.",
            redirect_to: "/contact",
        },
        &tera,
        context,
    )
}
