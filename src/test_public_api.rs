fn assert_render_once<T: gpui::RenderOnce>() {}

fn assert_render<T: gpui::Render>() {}

#[test]
fn components_facade_exports_views() {
    assert_render_once::<crate::components::TextField>();
    assert_render::<crate::components::ContactForm>();
}

#[test]
fn prelude_covers_the_submission_flow() {
    use crate::prelude::*;

    let mut controller = contact_controller(FormOptions::default());
    controller.on_submit(log_submission);
    for field in ContactDraft::fields() {
        let value = match field {
            ContactDraftField::Name => "Grace Hopper",
            ContactDraftField::Email => "grace@example.com",
            ContactDraftField::Message => "Ships are safe in harbor.",
        };
        controller.set(*field, value);
    }

    let outcome = controller.submit().expect("submit");
    assert!(outcome.is_submitted());
    assert_eq!(controller.submit_state(), SubmitState::Succeeded);
    assert_eq!(controller.errors(), &ContactErrors::default());
}

#[test]
fn prelude_rules_table_names_every_field() {
    use crate::prelude::*;

    for field in ContactDraft::fields() {
        assert!(
            CONTACT_RULES.iter().any(|rule| rule.field == *field),
            "{field} has no rule"
        );
    }
    let mut state = TextEditState::new("x");
    assert_eq!(
        state.apply_keystroke("enter", None, Default::default(), false),
        KeyEffect::Submit
    );
}
