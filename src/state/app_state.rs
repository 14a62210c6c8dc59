//! Application state definitions

use super::forms::{Form, FormField, LoginForm, RegisterForm};
use super::notification::Notification;
use super::transition::{AuthView, SlideTransition};
use crate::auth::{FieldId, FormId, Severity};
use crate::gateway::Session;
use std::collections::HashSet;
use std::time::Instant;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    #[default]
    Splash,
    /// Login / register panels
    Auth,
    /// Landing page after a successful sign-in
    Dashboard,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub auth_view: AuthView,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub notification: Option<Notification>,
    /// Message of the open success modal
    pub success_modal: Option<String>,
    /// Forms whose submit control shows a spinner
    pub loading: HashSet<FormId>,
    pub session: Option<Session>,
    /// When to leave the auth screen for the dashboard
    pub redirect_at: Option<Instant>,
    pub transition: Option<SlideTransition>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between login and register, starting the slide animation
    pub fn toggle_auth_view(&mut self, now: Instant) {
        self.auth_view = self.auth_view.toggled();
        self.transition = Some(SlideTransition::new(self.auth_view, now));
    }

    /// The form currently in front
    pub fn active_form_mut(&mut self) -> &mut dyn Form {
        match self.auth_view {
            AuthView::Login => &mut self.login_form,
            AuthView::Register => &mut self.register_form,
        }
    }

    pub fn active_form(&self) -> &dyn Form {
        match self.auth_view {
            AuthView::Login => &self.login_form,
            AuthView::Register => &self.register_form,
        }
    }

    pub fn active_form_id(&self) -> FormId {
        match self.auth_view {
            AuthView::Login => FormId::Login,
            AuthView::Register => FormId::Register,
        }
    }

    /// Find a field on whichever form owns it
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        match id.form() {
            FormId::Login => self.login_form.field_mut(id),
            FormId::Register => self.register_form.field_mut(id),
            FormId::Social(_) => None,
        }
    }

    /// Show a toast, replacing any visible one
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.notification = Some(Notification::new(message, severity, now));
    }

    pub fn set_loading(&mut self, form: FormId, loading: bool) {
        if loading {
            self.loading.insert(form);
        } else {
            self.loading.remove(&form);
        }
    }

    pub fn is_loading(&self, form: &FormId) -> bool {
        self.loading.contains(form)
    }

    /// Drop expired toasts and finish animations; returns true when the
    /// redirect deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }
        if self.transition.as_ref().is_some_and(|t| t.is_complete(now)) {
            self.transition = None;
        }
        self.redirect_at.is_some_and(|at| now >= at)
    }

    /// Leave the auth screen for the dashboard. Spinners stay on forms
    /// for which `is_pending` still holds.
    pub fn enter_dashboard(&mut self, is_pending: impl Fn(&FormId) -> bool) {
        self.redirect_at = None;
        self.success_modal = None;
        self.reset_forms(is_pending);
        self.current_view = View::Dashboard;
    }

    pub fn reset_forms(&mut self, is_pending: impl Fn(&FormId) -> bool) {
        self.login_form.reset();
        self.register_form.reset();
        self.loading.retain(|form| is_pending(form));
    }

    /// Forget the session and return to the login panel
    pub fn sign_out(&mut self) {
        self.session = None;
        self.auth_view = AuthView::Login;
        self.transition = None;
        self.current_view = View::Auth;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_starts_on_splash_with_login() {
        let state = AppState::new();
        assert_eq!(state.current_view, View::Splash);
        assert_eq!(state.auth_view, AuthView::Login);
        assert!(state.notification.is_none());
        assert_eq!(state.active_form_id(), FormId::Login);
    }

    #[test]
    fn test_toggle_starts_transition() {
        let mut state = AppState::new();
        let now = Instant::now();
        state.toggle_auth_view(now);
        assert_eq!(state.auth_view, AuthView::Register);
        assert_eq!(state.active_form_id(), FormId::Register);
        assert_eq!(
            state.transition.as_ref().map(|t| t.target),
            Some(AuthView::Register)
        );

        state.tick(now + Duration::from_secs(1));
        assert!(state.transition.is_none());
    }

    #[test]
    fn test_field_mut_routes_by_owner() {
        let mut state = AppState::new();
        state
            .field_mut(FieldId::RegisterName)
            .unwrap()
            .push_char('A');
        assert_eq!(state.register_form.name.as_text(), "A");
        assert!(state.field_mut(FieldId::LoginEmail).is_some());
    }

    #[test]
    fn test_notification_replaced_then_expires() {
        let mut state = AppState::new();
        let now = Instant::now();
        state.notify("first", Severity::Info, now);
        state.notify("second", Severity::Error, now);
        assert_eq!(
            state.notification.as_ref().map(|n| n.message.as_str()),
            Some("second")
        );

        state.tick(now + Duration::from_secs(4));
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_loading_flags() {
        let mut state = AppState::new();
        state.set_loading(FormId::social("github"), true);
        assert!(state.is_loading(&FormId::social("github")));
        assert!(!state.is_loading(&FormId::Login));
        state.set_loading(FormId::social("github"), false);
        assert!(state.loading.is_empty());
    }

    #[test]
    fn test_redirect_deadline() {
        let mut state = AppState::new();
        let now = Instant::now();
        assert!(!state.tick(now));
        state.redirect_at = Some(now + Duration::from_secs(2));
        assert!(!state.tick(now + Duration::from_secs(1)));
        assert!(state.tick(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_enter_dashboard_keeps_pending_spinners() {
        let mut state = AppState::new();
        state.set_loading(FormId::Login, true);
        state.set_loading(FormId::social("github"), true);

        state.enter_dashboard(|form| *form == FormId::social("github"));

        assert!(!state.is_loading(&FormId::Login));
        assert!(state.is_loading(&FormId::social("github")));
    }

    #[test]
    fn test_enter_dashboard_then_sign_out() {
        let mut state = AppState::new();
        state.current_view = View::Auth;
        state.auth_view = AuthView::Register;
        state.register_form.name.push_char('A');
        state.success_modal = Some("Welcome to AlgoRhythm!".to_string());
        state.redirect_at = Some(Instant::now());

        state.enter_dashboard(|_| false);
        assert_eq!(state.current_view, View::Dashboard);
        assert!(state.success_modal.is_none());
        assert!(state.redirect_at.is_none());
        assert_eq!(state.register_form.name.as_text(), "");

        state.sign_out();
        assert_eq!(state.current_view, View::Auth);
        assert_eq!(state.auth_view, AuthView::Login);
        assert!(state.session.is_none());
    }
}
