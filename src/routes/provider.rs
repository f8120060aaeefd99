use actix_web::{web, HttpRequest, HttpResponse, Result};
use askama::Template;
use chrono::Local;

use crate::{
    appointments::{present_provider_history, FetchState, EMPTY_LIST_MESSAGE},
    auth::bearer_token,
    routes::customer::{redirect_to_login, to_view, AppointmentView},
    state::AppState,
    templates::render,
};

#[derive(Template)]
#[template(path = "provider_history.html")]
struct ProviderHistoryTemplate {
    appointments: Vec<AppointmentView>,
    is_error: bool,
    error_message: String,
    is_empty: bool,
    empty_message: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/provider/history").route(web::get().to(history)));
}

async fn history(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let Some(token) = bearer_token(&req) else {
        return Ok(redirect_to_login());
    };

    let today = Local::now().date_naive();
    let fetched = match state.api.provider_appointments(&token).await {
        Ok(records) => FetchState::Success(present_provider_history(records, today)),
        Err(err) => {
            log::warn!("Provider history fetch failed: {err}");
            FetchState::Error(err.message())
        }
    };

    let template = match fetched {
        FetchState::Loading => ProviderHistoryTemplate {
            appointments: Vec::new(),
            is_error: false,
            error_message: String::new(),
            is_empty: false,
            empty_message: String::new(),
        },
        FetchState::Success(records) => {
            let appointments: Vec<_> = records.iter().map(|r| to_view(r, today)).collect();
            ProviderHistoryTemplate {
                is_empty: appointments.is_empty(),
                empty_message: EMPTY_LIST_MESSAGE.to_string(),
                appointments,
                is_error: false,
                error_message: String::new(),
            }
        }
        FetchState::Error(message) => ProviderHistoryTemplate {
            appointments: Vec::new(),
            is_error: true,
            error_message: message,
            is_empty: false,
            empty_message: String::new(),
        },
    };

    Ok(render(template))
}
