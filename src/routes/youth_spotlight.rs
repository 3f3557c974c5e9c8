use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::forms::FieldErrors;
use crate::forms::youth_spotlight::{MAX_ARTICLE_WORDS, YOUTH_CATEGORIES, YouthSpotlightForm};
use crate::models::config::AccessKeys;
use crate::relay::Web3FormsRelay;
use crate::repository::CatalogRepository;
use crate::routes::{FormPage, base_context, render_template, submission_response};
use crate::services::submissions::submit_youth_story as submit_youth_story_service;
use crate::services::youth_spotlight::list_youth_stories;

fn youth_spotlight_context(
    flash_messages: &IncomingFlashMessages,
    repo: &CatalogRepository,
    form: &YouthSpotlightForm,
) -> Context {
    let mut context = base_context(flash_messages, "youth_spotlight", repo);
    context.insert("stories", &list_youth_stories(repo));
    context.insert("youth_categories", &YOUTH_CATEGORIES);
    context.insert("max_article_words", &MAX_ARTICLE_WORDS);
    context.insert("form", form);
    context.insert("errors", &FieldErrors::new());
    context
}

#[get("/youth-spotlight")]
pub async fn show_youth_spotlight(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context =
        youth_spotlight_context(&flash_messages, &repo, &YouthSpotlightForm::default());
    render_template(&tera, "youth_spotlight/index.html", &context)
}

#[post("/youth-spotlight")]
pub async fn submit_youth_story(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<CatalogRepository>,
    tera: web::Data<Tera>,
    relay: web::Data<Web3FormsRelay>,
    access_keys: web::Data<AccessKeys>,
    web::Form(form): web::Form<YouthSpotlightForm>,
) -> impl Responder {
    let context = youth_spotlight_context(&flash_messages, &repo, &form);
    let result = submit_youth_story_service(form.clone(), &access_keys, relay.get_ref()).await;

    submission_response(
        result,
        FormPage {
            template: "youth_spotlight/index.html",
            form: &form,
            success_message: "Submission successful! Your story has been submitted. We'll review it and get back to you soon.",
            redirect_to: "/youth-spotlight",
        },
        &tera,
        context,
    )
}
