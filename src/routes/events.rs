use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::forms::FieldErrors;
use crate::forms::events::HostEventForm;
use crate::models::config::AccessKeys;
use crate::relay::Web3FormsRelay;
use crate::repository::CatalogRepository;
use crate::routes::{FormPage, base_context, render_template, submission_response};
use crate::services::submissions::submit_host_event as submit_host_event_service;

fn host_event_context(
    flash_messages: &IncomingFlashMessages,
    repo: &CatalogRepository,
    form: &HostEventForm,
) -> Context {
    let mut context = base_context(flash_messages, "host_event", repo);
    context.insert("form", form);
    context.insert("errors", &FieldErrors::new());
    context
}

#[get("/host-event")]
pub async fn show_host_event(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = host_event_context(&flash_messages, &repo, &HostEventForm::default());
    render_template(&tera, "events/host.html", &context)
}

#[post("/host-event")]
pub async fn submit_host_event(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
    relay: web::Data<Web3FormsRelay>,
    access_keys: web::Data<AccessKeys>,
    web::Form(form): web::Form<HostEventForm>,
) -> impl Responder {
    let context = host_event_context(&flash_messages, &repo, &form);
    let result = submit_host_event_service(form.clone(), &access_keys, relay.get_ref()).await;

    submission_response(
        result,
        FormPage {
            template: "events/host.html",
            form: &form,
            success_message: "Inquiry sent! We'll get back to you within 24 hours.",
            redirect_to: "/host-event",
        },
        &tera,
        context,
    )
}
