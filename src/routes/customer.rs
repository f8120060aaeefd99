use actix_web::{http::header, web, HttpRequest, HttpResponse, Result};
use askama::Template;
use chrono::Local;

use crate::{
    appointments::{present_customer, AppointmentRecord, FetchState, EMPTY_LIST_MESSAGE},
    auth::bearer_token,
    state::AppState,
    templates::render,
};

#[derive(Clone, Debug)]
pub struct AppointmentView {
    pub counterpart: String,
    pub business_name: String,
    pub date: String,
    pub time: String,
    pub status_label: String,
    pub is_upcoming: bool,
}

#[derive(Template)]
#[template(path = "appointments.html")]
struct AppointmentsTemplate {
    appointments: Vec<AppointmentView>,
    is_error: bool,
    error_message: String,
    is_empty: bool,
    empty_message: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/appointments").route(web::get().to(list_appointments)));
}

async fn list_appointments(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let Some(token) = bearer_token(&req) else {
        return Ok(redirect_to_login());
    };

    let today = Local::now().date_naive();
    let fetched = match state.api.customer_appointments(&token).await {
        Ok(records) => FetchState::Success(present_customer(records, today)),
        Err(err) => {
            log::warn!("Customer appointment fetch failed: {err}");
            FetchState::Error(err.message())
        }
    };

    Ok(render(appointments_template(fetched, today)))
}

pub(crate) fn redirect_to_login() -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/login"))
        .finish()
}

pub(crate) fn to_view(record: &AppointmentRecord, today: chrono::NaiveDate) -> AppointmentView {
    AppointmentView {
        counterpart: record.counterpart.clone(),
        business_name: record.business_name.clone(),
        date: record.date.format("%Y-%m-%d").to_string(),
        time: record.time.format("%H:%M").to_string(),
        status_label: record.status.label().to_string(),
        is_upcoming: record.is_upcoming(today),
    }
}

fn appointments_template(
    fetched: FetchState<AppointmentRecord>,
    today: chrono::NaiveDate,
) -> AppointmentsTemplate {
    match fetched {
        // The page renders server-side, so the loading state settles
        // before markup is produced; it only shows up for late arrivals.
        FetchState::Loading => AppointmentsTemplate {
            appointments: Vec::new(),
            is_error: false,
            error_message: String::new(),
            is_empty: false,
            empty_message: String::new(),
        },
        FetchState::Success(records) => {
            let appointments: Vec<_> = records.iter().map(|r| to_view(r, today)).collect();
            AppointmentsTemplate {
                is_empty: appointments.is_empty(),
                empty_message: EMPTY_LIST_MESSAGE.to_string(),
                appointments,
                is_error: false,
                error_message: String::new(),
            }
        }
        FetchState::Error(message) => AppointmentsTemplate {
            appointments: Vec::new(),
            is_error: true,
            error_message: message,
            is_empty: false,
            empty_message: String::new(),
        },
    }
}
