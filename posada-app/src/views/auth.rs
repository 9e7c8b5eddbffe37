//! Login and signup forms
//!
//! Forms validate client-side before anything touches the network; an
//! invalid form never submits. Login installs the session, signup
//! redirects to login.

use posada_client::{HttpClient, SessionStore};
use shared::client::SignupRequest;
use validator::Validate;

use crate::notify::Notifier;
use crate::routes::Route;

/// Login form fields
#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Login screen
#[derive(Debug, Default)]
pub struct LoginView {
    pub form: LoginForm,
    loading: bool,
    notifier: Notifier,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the submit button's disabled state
    pub fn is_valid(&self) -> bool {
        self.form.validate().is_ok()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Submit the form; on success installs the session and goes home
    pub async fn submit(
        &mut self,
        client: &HttpClient,
        session: &mut SessionStore,
    ) -> Option<Route> {
        if self.form.validate().is_err() {
            self.notifier.error("Revise los campos del formulario");
            return None;
        }

        self.loading = true;
        let result = client.login(&self.form.email, &self.form.password).await;
        self.loading = false;

        match result {
            Ok(login) => {
                session.sign_in(login.token, login.is_admin);
                self.notifier.info("El usuario ha iniciado sesion");
                Some(Route::Home)
            }
            Err(err) => {
                tracing::warn!(error = %err, "login failed");
                self.notifier.error(err.user_message());
                None
            }
        }
    }
}

/// Signup form fields
#[derive(Debug, Clone, Default, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub address: String,
}

impl SignupForm {
    fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
        }
    }
}

/// Signup screen
#[derive(Debug, Default)]
pub struct SignupView {
    pub form: SignupForm,
    loading: bool,
    notifier: Notifier,
}

impl SignupView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the submit button's disabled state
    pub fn is_valid(&self) -> bool {
        self.form.validate().is_ok()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Submit the form; on success the user goes to the login screen
    pub async fn submit(&mut self, client: &HttpClient) -> Option<Route> {
        if self.form.validate().is_err() {
            self.notifier.error("Revise los campos del formulario");
            return None;
        }

        self.loading = true;
        let result = client.signup(&self.form.to_request()).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.notifier.info("El usuario se ha registrado");
                Some(Route::Login)
            }
            Err(err) => {
                tracing::warn!(error = %err, "signup failed");
                self.notifier.error(err.user_message());
                None
            }
        }
    }
}
