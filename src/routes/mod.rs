use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::repository::CatalogRepository;
use crate::services::ServiceError;
use crate::services::categories::list_categories;
use crate::services::submissions::SubmissionOutcome;

pub mod api;
pub mod categories;
pub mod contact;
pub mod events;
pub mod main;
pub mod personalities;
pub mod youth_spotlight;

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors in the form";
pub const REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const UNREACHABLE_MESSAGE: &str = "Network error. Please try again.";

/// Registers every page, form and API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api::api_v1_categories)
            .service(api::api_v1_category)
            .service(api::api_v1_category_personalities)
            .service(api::api_v1_featured_personalities)
            .service(api::api_v1_personality)
            .service(api::api_v1_youth_stories),
    )
    .service(main::index)
    .service(main::about)
    .service(main::register)
    .service(categories::show_category)
    .service(personalities::show_personality)
    .service(contact::show_contact)
    .service(contact::submit_contact)
    .service(events::show_host_event)
    .service(events::submit_host_event)
    .service(youth_spotlight::show_youth_spotlight)
    .service(youth_spotlight::submit_youth_story)
    .default_service(web::to(main::not_found));
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(StatusCode::OK, tera, template, context)
}

pub fn render_template_with_status(
    status: StatusCode,
    tera: &Tera,
    template: &str,
    context: &Context,
) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(tera.render(template, context).unwrap_or_else(|e| {
            log::error!("Failed to render template '{template}': {e}");
            String::new()
        }))
}

/// Context shared by every page: pending alerts, the active page and the
/// category navigation.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    repo: &CatalogRepository,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("nav_categories", &list_categories(repo));
    context
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn not_found(tera: &Tera, mut context: Context, message: &str) -> HttpResponse {
    context.insert("message", message);
    render_template_with_status(StatusCode::NOT_FOUND, tera, "errors/not_found.html", &context)
}

/// A form page that can be rendered again with the submitted values.
pub struct FormPage<'a, F: Serialize> {
    pub template: &'a str,
    pub form: &'a F,
    /// Flashed after a delivered submission.
    pub success_message: &'a str,
    /// Where the browser goes after delivery or a spam rejection.
    pub redirect_to: &'a str,
}

/// Maps a submission result onto the response every form shares.
///
/// Delivered submissions redirect with a success toast. Invalid forms are
/// rendered again with HTTP 422 and inline errors. Relay failures keep the
/// submitted values and show an error alert.
pub fn submission_response<F: Serialize>(
    result: Result<SubmissionOutcome, ServiceError>,
    page: FormPage<'_, F>,
    tera: &Tera,
    mut context: Context,
) -> HttpResponse {
    let alert = |message: &str| vec![(message.to_string(), alert_level_to_str(&Level::Error))];

    context.insert("form", page.form);
    match result {
        Ok(SubmissionOutcome::Delivered) => {
            FlashMessage::success(page.success_message).send();
            redirect(page.redirect_to)
        }
        Ok(SubmissionOutcome::Rejected(_)) => {
            context.insert("alerts", &alert(REJECTED_MESSAGE));
            render_template(tera, page.template, &context)
        }
        Ok(SubmissionOutcome::Unreachable) => {
            context.insert("alerts", &alert(UNREACHABLE_MESSAGE));
            render_template(tera, page.template, &context)
        }
        Err(ServiceError::Validation(errors)) => {
            context.insert("errors", &errors);
            context.insert("alerts", &alert(INVALID_FORM_MESSAGE));
            render_template_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                tera,
                page.template,
                &context,
            )
        }
        Err(ServiceError::Spam) => {
            FlashMessage::error(REJECTED_MESSAGE).send();
            redirect(page.redirect_to)
        }
        Err(err) => {
            log::error!("Failed to handle {} submission: {err}", page.template);
            HttpResponse::InternalServerError().finish()
        }
    }
}
