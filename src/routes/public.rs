use actix_web::{http::header, web, HttpRequest, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;

use crate::{
    auth::{clear_token_cookie, token_cookie},
    forms::{
        login::{LoginField, LoginForm},
        signup::{SignupField, SignupForm},
        OAuthProvider, Role,
    },
    routes::FieldView,
    state::AppState,
    templates::render,
};

const AUTH_ERROR_FALLBACK: &str = "Something went wrong. Please try again.";

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {}

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate {
    full_name: FieldView,
    email: FieldView,
    phone_number: FieldView,
    password: FieldView,
    confirm_password: FieldView,
    role_customer: bool,
    role_provider: bool,
    page_error: String,
    has_page_error: bool,
}

impl SignupTemplate {
    fn from_form(form: &SignupForm, page_error: Option<String>) -> SignupTemplate {
        SignupTemplate {
            full_name: FieldView::new(&form.full_name, form.error(SignupField::FullName)),
            email: FieldView::new(&form.email, form.error(SignupField::Email)),
            phone_number: FieldView::new(&form.phone_number, None),
            // Passwords are never echoed back into the markup.
            password: FieldView::new("", form.error(SignupField::Password)),
            confirm_password: FieldView::new("", form.error(SignupField::ConfirmPassword)),
            role_customer: form.role == Role::Customer,
            role_provider: form.role == Role::Provider,
            has_page_error: page_error.is_some(),
            page_error: page_error.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    email: FieldView,
    password: FieldView,
    page_error: String,
    has_page_error: bool,
    notice: String,
    has_notice: bool,
}

impl LoginTemplate {
    fn from_form(form: &LoginForm, page_error: Option<String>, notice: Option<String>) -> LoginTemplate {
        LoginTemplate {
            email: FieldView::new(&form.email, form.error(LoginField::Email)),
            password: FieldView::new("", form.error(LoginField::Password)),
            has_page_error: page_error.is_some(),
            page_error: page_error.unwrap_or_default(),
            has_notice: notice.is_some(),
            notice: notice.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct SignupInput {
    full_name: String,
    email: String,
    phone_number: Option<String>,
    password: String,
    confirm_password: String,
    role: Option<String>,
}

#[derive(Deserialize)]
struct LoginInput {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginQuery {
    notice: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(
            web::resource("/signup")
                .route(web::get().to(show_signup))
                .route(web::post().to(submit_signup)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(show_login))
                .route(web::post().to(submit_login)),
        )
        .service(web::resource("/auth/{provider}").route(web::get().to(oauth_placeholder)))
        .service(web::resource("/logout").route(web::get().to(logout)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn home() -> Result<HttpResponse> {
    Ok(render(HomeTemplate {}))
}

async fn show_signup() -> Result<HttpResponse> {
    // Fresh state on every visit; nothing survives navigation.
    Ok(render(SignupTemplate::from_form(&SignupForm::new(), None)))
}

async fn submit_signup(
    state: web::Data<AppState>,
    req: HttpRequest,
    input: web::Form<SignupInput>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    let mut form = SignupForm::new();
    form.handle_input_change(SignupField::FullName, &input.full_name);
    form.handle_input_change(SignupField::Email, &input.email);
    form.handle_input_change(SignupField::PhoneNumber, input.phone_number.as_deref().unwrap_or(""));
    form.handle_input_change(SignupField::Password, &input.password);
    form.handle_input_change(SignupField::ConfirmPassword, &input.confirm_password);
    form.handle_role_change(Role::from_form_value(input.role.as_deref().unwrap_or("")));

    let Some(payload) = form.handle_submit() else {
        return Ok(render(SignupTemplate::from_form(&form, None)));
    };

    match state.api.signup(&payload).await {
        Ok(auth) => {
            log::info!("Account created for {}", auth.user.email);
            Ok(HttpResponse::SeeOther()
                .append_header((header::LOCATION, "/dashboard"))
                .cookie(token_cookie(&req, &auth.token))
                .finish())
        }
        Err(err) => {
            log::warn!("Signup rejected by backend: {err}");
            Ok(render(SignupTemplate::from_form(&form, Some(err.message_or(AUTH_ERROR_FALLBACK)))))
        }
    }
}

async fn show_login(query: web::Query<LoginQuery>) -> Result<HttpResponse> {
    let notice = query.into_inner().notice;
    Ok(render(LoginTemplate::from_form(&LoginForm::new(), None, notice)))
}

async fn submit_login(
    state: web::Data<AppState>,
    req: HttpRequest,
    input: web::Form<LoginInput>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    let mut form = LoginForm::new();
    form.handle_input_change(LoginField::Email, &input.email);
    form.handle_input_change(LoginField::Password, &input.password);

    let Some(payload) = form.handle_submit() else {
        return Ok(render(LoginTemplate::from_form(&form, None, None)));
    };

    match state.api.login(&payload).await {
        Ok(auth) => Ok(HttpResponse::SeeOther()
            .append_header((header::LOCATION, "/dashboard"))
            .cookie(token_cookie(&req, &auth.token))
            .finish()),
        Err(err) => {
            log::warn!("Login rejected by backend: {err}");
            Ok(render(LoginTemplate::from_form(&form, Some(err.message_or(AUTH_ERROR_FALLBACK)), None)))
        }
    }
}

/// The OAuth buttons are placeholders: the hook only records the intent
/// before the visitor lands back on the login page.
async fn oauth_placeholder(path: web::Path<String>) -> HttpResponse {
    let provider = path.into_inner();
    let Some(provider) = OAuthProvider::from_path(&provider) else {
        return HttpResponse::NotFound().body("Unknown provider");
    };

    let form = LoginForm::new().with_oauth_hook(Box::new(|provider| {
        log::info!("OAuth login requested via {}", provider.as_str());
    }));
    form.handle_oauth_login(provider);

    HttpResponse::SeeOther()
        .append_header((
            header::LOCATION,
            format!("/login?notice=Social+login+via+{}+is+not+available+yet", provider.as_str()),
        ))
        .finish()
}

async fn logout(req: HttpRequest) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/"))
        .cookie(clear_token_cookie(&req))
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}
