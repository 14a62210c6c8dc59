//! Button rows shared by both forms

use crate::app::App;
use crate::auth::FormId;
use crate::state::{Form, FormAction, SocialProvider};
use crate::ui::components::{render_button, ButtonState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

fn action_label(action: FormAction, submit_label: &'static str) -> &'static str {
    match action {
        FormAction::Submit => submit_label,
        FormAction::ForgotPassword => "Forgot Password",
        FormAction::Social(provider) => provider.label(),
    }
}

fn action_accent(action: FormAction) -> Color {
    match action {
        FormAction::Submit => Color::Cyan,
        FormAction::ForgotPassword => Color::LightBlue,
        FormAction::Social(SocialProvider::Google) => Color::Red,
        FormAction::Social(SocialProvider::GitHub) => Color::White,
        FormAction::Social(SocialProvider::Facebook) => Color::Blue,
    }
}

/// Form instance whose loading flag a button reflects
fn action_form(action: FormAction, form_id: &FormId) -> Option<FormId> {
    match action {
        FormAction::Submit => Some(form_id.clone()),
        FormAction::ForgotPassword => None,
        FormAction::Social(provider) => Some(FormId::social(provider.as_str())),
    }
}

/// Draw `form`'s buttons in `area`, splitting the row evenly
pub fn draw_actions(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    form: &dyn Form,
    form_id: &FormId,
    indices: std::ops::Range<usize>,
    submit_label: &'static str,
) {
    let count = indices.len().max(1) as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let row_active = form.is_buttons_row_active();
    for (slot, index) in indices.enumerate() {
        let Some(&action) = form.actions().get(index) else {
            continue;
        };
        let loading = action_form(action, form_id)
            .filter(|id| app.state.is_loading(id))
            .map(|_| app.ticks / 2);
        let state = ButtonState {
            is_selected: row_active && form.selected_button() == index,
            loading,
            accent: action_accent(action),
        };
        render_button(frame, chunks[slot], action_label(action, submit_label), state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_buttons_track_their_own_form() {
        let action = FormAction::Social(SocialProvider::GitHub);
        assert_eq!(
            action_form(action, &FormId::Login),
            Some(FormId::social("github"))
        );
        assert_eq!(action_form(FormAction::ForgotPassword, &FormId::Login), None);
        assert_eq!(
            action_form(FormAction::Submit, &FormId::Register),
            Some(FormId::Register)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(action_label(FormAction::Submit, "Sign Up"), "Sign Up");
        assert_eq!(
            action_label(FormAction::Social(SocialProvider::Facebook), "Sign In"),
            "Facebook"
        );
    }
}
