//! Application state and core logic

use crate::auth::{
    FieldId, FormId, Severity, SubmissionController, SubmissionOutcome, SubmitError,
};
use crate::config::AuthConfig;
use crate::gateway::{AuthGateway, SimulatedGateway};
use crate::presenter::{ChannelPresentation, UiEvent};
use crate::state::{
    AppState, AuthView, FieldStatus, Form, FormAction, FormField, RegisterForm, SplashState,
    View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Product name shown in titles
    pub app_name: String,
    /// Frames drawn so far; drives spinners
    pub ticks: usize,
    controller: Arc<SubmissionController>,
    events_tx: mpsc::UnboundedSender<UiEvent>,
    events_rx: mpsc::UnboundedReceiver<UiEvent>,
    redirect_delay: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an app backed by the simulated gateway
    pub fn new(config: &AuthConfig) -> Self {
        let gateway = SimulatedGateway::new(config.simulated_settings());
        let simulated = gateway.settings();
        tracing::info!(
            auth_latency = ?simulated.auth_latency,
            social_latency = ?simulated.social_latency,
            social_failure_rate = simulated.social_failure_rate,
            "using simulated gateway"
        );
        Self::with_gateway(config, Arc::new(gateway))
    }

    pub fn with_gateway(config: &AuthConfig, gateway: Arc<dyn AuthGateway>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let presentation = Arc::new(ChannelPresentation::new(events_tx.clone()));
        let settings = config.controller_settings();
        let mut state = AppState::new();
        state.register_form = RegisterForm::with_terms(settings.require_terms_acceptance);
        let controller =
            SubmissionController::new(gateway, settings).with_presentation(presentation);

        Self {
            state,
            splash_state: Some(SplashState::new(Instant::now())),
            app_name: config.app_name(),
            ticks: 0,
            controller: Arc::new(controller),
            events_tx,
            events_rx,
            redirect_delay: config.redirect_delay(),
            quit: false,
        }
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    fn on_auth_screen(&self) -> bool {
        matches!(self.state.current_view, View::Auth)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    /// Advance animations, apply queued controller events and follow
    /// the success redirect once it is due
    pub fn tick(&mut self, now: Instant, terminal_height: u16) {
        self.ticks = self.ticks.wrapping_add(1);

        if let Some(ref mut splash) = self.splash_state {
            splash.update(now, terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Auth;
            }
        }

        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event, now);
        }

        if self.state.tick(now) {
            tracing::info!("redirecting to dashboard");
            let controller = &self.controller;
            self.state
                .enter_dashboard(|form| controller.state(form).is_pending());
        }
    }

    fn apply_event(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::FieldError { field, message } => {
                if let Some(f) = self.state.field_mut(field) {
                    f.set_error(message);
                }
            }
            UiEvent::FieldSuccess(field) => {
                if let Some(f) = self.state.field_mut(field) {
                    f.set_valid();
                }
            }
            UiEvent::Notification { message, severity } => {
                self.state.notify(message, severity, now);
            }
            // A late submission must not pull the dashboard back into the auth flow
            UiEvent::SuccessModal(_) | UiEvent::Redirect if !self.on_auth_screen() => {
                tracing::debug!("ignoring late success outside the auth screen");
            }
            UiEvent::SuccessModal(message) => self.state.success_modal = Some(message),
            UiEvent::SubmitLoading { form, loading } => self.state.set_loading(form, loading),
            UiEvent::Redirect => self.state.redirect_at = Some(now + self.redirect_delay),
            UiEvent::Finished { form, result } => match result {
                Ok(SubmissionOutcome::Succeeded { session, .. }) if self.state.session.is_none() => {
                    self.state.session = Some(session);
                }
                Ok(SubmissionOutcome::Succeeded { .. }) => {
                    tracing::debug!(%form, "already signed in; keeping current session");
                }
                Ok(SubmissionOutcome::Failed { message }) => {
                    tracing::debug!(%form, %message, "submission failed");
                }
                Err(SubmitError::AlreadyInProgress) => {
                    tracing::debug!(%form, "submit ignored while pending");
                }
                Err(SubmitError::Invalid { field, reason }) => {
                    tracing::debug!(%form, %field, %reason, "submit rejected");
                }
            },
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Auth => self.handle_auth_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }
        Ok(())
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) {
        // Success modal swallows input until dismissed
        if self.state.success_modal.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.success_modal = None;
            }
            return;
        }

        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.toggle_auth_view(Instant::now());
            return;
        }

        let on_buttons = self.state.active_form().is_buttons_row_active();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.active_form_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.active_form_mut().prev_field(),
            KeyCode::Left if on_buttons => self.state.active_form_mut().prev_button(),
            KeyCode::Right if on_buttons => self.state.active_form_mut().next_button(),
            KeyCode::Enter if on_buttons => {
                let action = self.state.active_form().selected_action();
                self.trigger(action);
            }
            KeyCode::Enter => self.trigger(FormAction::Submit),
            KeyCode::Char(_) | KeyCode::Backspace if on_buttons => {}
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_active_field(|field| {
                    if field.is_checkbox() {
                        if c == ' ' {
                            field.toggle();
                        }
                    } else {
                        field.push_char(c);
                    }
                });
            }
            KeyCode::Backspace => self.edit_active_field(|field| field.pop_char()),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') => {
                tracing::info!("signed out");
                self.state.sign_out();
                self.state.notify("Signed out", Severity::Info, Instant::now());
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Apply `edit` to the focused field, then clear stale feedback
    fn edit_active_field(&mut self, edit: impl FnOnce(&mut FormField)) {
        let form = self.state.active_form_id();
        let Some(field) = self.state.active_form_mut().get_active_field_mut() else {
            return;
        };
        edit(field);
        field.clear_status();
        self.controller.field_edited(&form);
    }

    fn trigger(&mut self, action: FormAction) {
        let controller = Arc::clone(&self.controller);
        match action {
            FormAction::Submit => match self.state.auth_view {
                AuthView::Login => {
                    let fields = self.state.login_form.to_fields();
                    self.spawn_submission(FormId::Login, async move {
                        controller.submit_login(fields).await
                    });
                }
                AuthView::Register => {
                    let fields = self.state.register_form.to_fields();
                    self.spawn_submission(FormId::Register, async move {
                        controller.submit_register(fields).await
                    });
                }
            },
            FormAction::ForgotPassword => {
                let email = self.state.login_form.email.as_text().to_string();
                if controller.request_password_reset(&email).is_err() {
                    self.state.login_form.set_active_field(0);
                }
            }
            FormAction::Social(provider) => {
                let key = provider.as_str();
                self.spawn_submission(FormId::social(key), async move {
                    controller.submit_social(key).await
                });
            }
        }
    }

    /// Run a submission in the background; its outcome comes back as
    /// [`UiEvent::Finished`]
    fn spawn_submission<F>(&self, form: FormId, submission: F)
    where
        F: Future<Output = Result<SubmissionOutcome, SubmitError>> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = submission.await;
            if tx.send(UiEvent::Finished { form, result }).is_err() {
                tracing::debug!("ui channel closed before submission finished");
            }
        });
    }

    /// Field lookup used by the renderer for error placement
    pub fn field_error(&self, id: FieldId) -> Option<&str> {
        let form: &dyn Form = match id.form() {
            FormId::Login => &self.state.login_form,
            FormId::Register => &self.state.register_form,
            FormId::Social(_) => return None,
        };
        let field = form.fields().into_iter().find(|f| f.id == id)?;
        match &field.status {
            FieldStatus::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SubmissionState;
    use crate::gateway::{AuthError, MockAuthGateway, Session};
    use crate::state::SocialProvider;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn test_config() -> AuthConfig {
        AuthConfig {
            redirect_delay_ms: Some(0),
            ..Default::default()
        }
    }

    fn accepting_gateway() -> MockAuthGateway {
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_authenticate()
            .returning(|c| Ok(Session::issue(c.email, None)));
        gateway
            .expect_register()
            .returning(|p| Ok(Session::issue(p.email, None)));
        gateway
            .expect_authenticate_social()
            .returning(|p| Ok(Session::issue(p.clone(), Some(p))));
        gateway
    }

    /// App already past the splash
    fn auth_app(gateway: MockAuthGateway) -> App {
        let mut app = App::with_gateway(&test_config(), Arc::new(gateway));
        app.handle_key(key(KeyCode::Enter)).unwrap();
        app.tick(Instant::now(), 24);
        app
    }

    /// Let spawned submissions finish and apply their events
    async fn settle(app: &mut App) {
        for _ in 0..20 {
            tokio::task::yield_now().await;
            app.tick(Instant::now(), 24);
        }
    }

    mod splash {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_any_key_skips_to_auth() {
            let mut app = App::with_gateway(&test_config(), Arc::new(MockAuthGateway::new()));
            assert!(app.in_splash());
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            app.tick(Instant::now(), 24);
            assert_eq!(app.state.current_view, View::Auth);
            assert!(app.splash_state.is_none());
            assert_eq!(app.app_name, "AlgoRhythm");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_ctrl_t_toggles_panels() {
            let mut app = auth_app(MockAuthGateway::new());
            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.state.auth_view, AuthView::Register);
            assert!(app.state.transition.is_some());
            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.state.auth_view, AuthView::Login);
        }

        #[tokio::test]
        async fn test_typing_goes_to_focused_field() {
            let mut app = auth_app(MockAuthGateway::new());
            type_text(&mut app, "a@b.co");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "pw");
            app.handle_key(key(KeyCode::Backspace)).unwrap();

            assert_eq!(app.state.login_form.email.as_text(), "a@b.co");
            assert_eq!(app.state.login_form.password.as_text(), "p");
        }

        #[tokio::test]
        async fn test_space_toggles_terms_checkbox() {
            let mut app = auth_app(MockAuthGateway::new());
            app.handle_key(ctrl('t')).unwrap();
            app.state.register_form.set_active_field(4);
            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(app.state.register_form.accept_terms.is_checked());
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert!(app.state.register_form.accept_terms.is_checked());
        }

        #[tokio::test]
        async fn test_buttons_row_ignores_text() {
            let mut app = auth_app(MockAuthGateway::new());
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert!(app.state.login_form.is_buttons_row_active());
            type_text(&mut app, "abc");
            app.handle_key(key(KeyCode::Right)).unwrap();
            assert_eq!(
                app.state.login_form.selected_action(),
                FormAction::ForgotPassword
            );
            assert_eq!(app.state.login_form.email.as_text(), "");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_login_marks_field_and_notifies() {
            let mut gateway = MockAuthGateway::new();
            gateway.expect_authenticate().never();
            let mut app = auth_app(gateway);
            type_text(&mut app, "not-an-email");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            assert_eq!(
                app.field_error(FieldId::LoginEmail),
                Some("Please enter a valid email address")
            );
            let note = app.state.notification.as_ref().unwrap();
            assert_eq!(note.severity, Severity::Error);
            assert_eq!(app.controller().state(&FormId::Login), SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_successful_login_redirects_to_dashboard() {
            let mut app = auth_app(accepting_gateway());
            type_text(&mut app, "ada@example.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "secret");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Dashboard);
            let session = app.state.session.as_ref().unwrap();
            assert_eq!(session.subject, "ada@example.com");
            assert!(app.state.loading.is_empty());
            assert_eq!(app.state.login_form.email.as_text(), "");
        }

        #[tokio::test]
        async fn test_success_modal_waits_for_redirect_delay() {
            let config = AuthConfig {
                redirect_delay_ms: Some(60_000),
                ..Default::default()
            };
            let mut app = App::with_gateway(&config, Arc::new(accepting_gateway()));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.tick(Instant::now(), 24);
            type_text(&mut app, "ada@example.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "secret");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Auth);
            assert_eq!(
                app.state.success_modal.as_deref(),
                Some("Welcome back to AlgoRhythm!")
            );
            assert!(app.state.redirect_at.is_some());

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.state.success_modal.is_none());
        }

        #[tokio::test]
        async fn test_register_without_terms_row() {
            let config = AuthConfig {
                redirect_delay_ms: Some(0),
                require_terms_acceptance: Some(false),
                ..Default::default()
            };
            let mut app = App::with_gateway(&config, Arc::new(accepting_gateway()));
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.tick(Instant::now(), 24);
            app.handle_key(ctrl('t')).unwrap();
            assert!(!app.state.register_form.show_terms);

            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "ada@example.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "secret");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "secret");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.state.register_form.is_buttons_row_active());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;
            assert_eq!(app.state.current_view, View::Dashboard);
            assert!(!app.state.register_form.show_terms);
        }

        #[tokio::test]
        async fn test_gateway_failure_is_surfaced() {
            let mut gateway = MockAuthGateway::new();
            gateway
                .expect_authenticate()
                .returning(|_| Err(AuthError::new("Invalid credentials")));
            let mut app = auth_app(gateway);
            type_text(&mut app, "test@error.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "x");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Auth);
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Invalid credentials")
            );
            assert_eq!(
                app.controller().state(&FormId::Login),
                SubmissionState::Failed {
                    message: "Invalid credentials".to_string()
                }
            );
        }

        #[tokio::test]
        async fn test_social_button_signs_in() {
            let mut app = auth_app(accepting_gateway());
            app.state.login_form.set_active_field(2);
            app.state.login_form.set_selected_button(3);
            assert_eq!(
                app.state.login_form.selected_action(),
                FormAction::Social(SocialProvider::GitHub)
            );
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            let session = app.state.session.as_ref().unwrap();
            assert_eq!(session.provider.as_deref(), Some("github"));
            assert_eq!(app.state.current_view, View::Dashboard);
        }

        /// Email sign-in answers at once; social sign-in waits for `release`
        struct SlowSocialGateway {
            gate: tokio::sync::Semaphore,
        }

        #[async_trait::async_trait]
        impl AuthGateway for SlowSocialGateway {
            async fn authenticate(
                &self,
                credentials: crate::gateway::Credentials,
            ) -> Result<Session, AuthError> {
                Ok(Session::issue(credentials.email, None))
            }

            async fn register(
                &self,
                profile: crate::gateway::Profile,
            ) -> Result<Session, AuthError> {
                Ok(Session::issue(profile.email, None))
            }

            async fn authenticate_social(&self, provider: String) -> Result<Session, AuthError> {
                if let Ok(permit) = self.gate.acquire().await {
                    permit.forget();
                }
                Ok(Session::issue(provider.clone(), Some(provider)))
            }
        }

        #[tokio::test]
        async fn test_late_social_success_stays_off_the_dashboard() {
            let gateway = Arc::new(SlowSocialGateway {
                gate: tokio::sync::Semaphore::new(0),
            });
            let mut app = App::with_gateway(&test_config(), gateway.clone());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.tick(Instant::now(), 24);
            let github = FormId::social("github");

            app.state.login_form.set_active_field(2);
            app.state.login_form.set_selected_button(3);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;
            assert!(app.state.is_loading(&github));

            app.state.login_form.set_active_field(0);
            type_text(&mut app, "ada@example.com");
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "secret");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Dashboard);
            assert!(app.state.is_loading(&github));
            assert_eq!(app.controller().state(&github), SubmissionState::Pending);

            gateway.gate.add_permits(1);
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Dashboard);
            assert!(app.state.success_modal.is_none());
            assert!(app.state.redirect_at.is_none());
            assert!(!app.state.is_loading(&github));
            assert_eq!(
                app.state.session.as_ref().map(|s| s.subject.as_str()),
                Some("ada@example.com")
            );
        }

        #[tokio::test]
        async fn test_forgot_password_without_email_focuses_email() {
            let mut app = auth_app(MockAuthGateway::new());
            app.state.login_form.set_active_field(2);
            app.state.login_form.set_selected_button(1);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.tick(Instant::now(), 24);

            assert_eq!(app.state.login_form.active_field(), 0);
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Please enter your email address first")
            );
        }

        #[tokio::test]
        async fn test_editing_clears_field_error() {
            let mut app = auth_app(MockAuthGateway::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            settle(&mut app).await;
            assert!(app.field_error(FieldId::LoginEmail).is_some());

            type_text(&mut app, "a");
            assert!(app.field_error(FieldId::LoginEmail).is_none());
        }
    }

    mod dashboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_sign_out_and_quit() {
            let mut app = auth_app(MockAuthGateway::new());
            app.state.current_view = View::Dashboard;
            app.state.session = Some(Session::issue("ada@example.com", None));

            app.handle_key(key(KeyCode::Char('l'))).unwrap();
            assert_eq!(app.state.current_view, View::Auth);
            assert!(app.state.session.is_none());

            app.state.current_view = View::Dashboard;
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_ctrl_l_signs_out() {
            let mut app = auth_app(MockAuthGateway::new());
            app.state.current_view = View::Dashboard;
            app.handle_key(ctrl('l')).unwrap();
            assert_eq!(app.state.current_view, View::Auth);
        }
    }
}
