use std::cell::RefCell;
use std::rc::Rc;

use contact_form::contact::{ContactDraft, ContactDraftField, contact_controller};
use contact_form::form::{FormOptions, SubmitOutcome};

const VALID_EMAIL: &str = "alice@example.com";
const VALID_MESSAGE: &str = "Hello, I would like to get in touch.";

fn submit(draft: &ContactDraft) -> (SubmitOutcome<ContactDraft>, ContactDraft, Vec<ContactDraft>) {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    let mut controller = contact_controller(FormOptions::default());
    controller.on_submit(move |submitted: &ContactDraft| sink.borrow_mut().push(submitted.clone()));
    controller.set(ContactDraftField::Name, draft.name.as_str());
    controller.set(ContactDraftField::Email, draft.email.as_str());
    controller.set(ContactDraftField::Message, draft.message.as_str());

    let outcome = controller.submit().expect("submit");
    let errors = controller.errors().clone();
    let received = received.borrow().clone();
    (outcome, errors, received)
}

#[test]
fn every_length_inside_bounds_submits_unchanged_values() {
    for (name_len, message_len) in [(2, 10), (2, 500), (50, 10), (50, 500), (17, 123)] {
        let draft = ContactDraft::new("n".repeat(name_len), VALID_EMAIL, "m".repeat(message_len));
        let (outcome, errors, received) = submit(&draft);

        assert_eq!(outcome, SubmitOutcome::Submitted(draft.clone()));
        assert_eq!(received, vec![draft]);
        assert!(errors.is_empty());
    }
}

#[test]
fn every_length_outside_bounds_is_rejected() {
    let cases = [
        (
            ContactDraft::new("", VALID_EMAIL, VALID_MESSAGE),
            ContactDraft::new("Name must be at least 2 characters", "", ""),
        ),
        (
            ContactDraft::new("n".repeat(51), VALID_EMAIL, VALID_MESSAGE),
            ContactDraft::new("Name can't exceed 50 characters", "", ""),
        ),
        (
            ContactDraft::new("Alice", VALID_EMAIL, "m".repeat(9)),
            ContactDraft::new("", "", "Message must be at least 10 characters"),
        ),
        (
            ContactDraft::new("Alice", VALID_EMAIL, "m".repeat(501)),
            ContactDraft::new("", "", "Message can't exceed 500 characters"),
        ),
        (
            ContactDraft::new("Alice", "alice@", VALID_MESSAGE),
            ContactDraft::new("", "Invalid email format", ""),
        ),
    ];

    for (draft, expected_errors) in cases {
        let (outcome, errors, received) = submit(&draft);
        assert_eq!(outcome, SubmitOutcome::Rejected, "{draft:?}");
        assert_eq!(errors, expected_errors);
        assert!(received.is_empty());
    }
}

#[test]
fn contact_scenarios() {
    let (outcome, errors, _) = submit(&ContactDraft::new("Al", "al@example.com", "Short"));
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(errors.message, "Message must be at least 10 characters");
    assert_eq!(errors.name, "");
    assert_eq!(errors.email, "");

    let (outcome, errors, _) = submit(&ContactDraft::new(
        "A",
        "bad-email",
        "This is a sufficiently long message.",
    ));
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(errors.name, "Name must be at least 2 characters");
    assert_eq!(errors.email, "Invalid email format");

    let valid = ContactDraft::new("Alice Smith", VALID_EMAIL, VALID_MESSAGE);
    let (outcome, errors, received) = submit(&valid);
    assert!(outcome.is_submitted());
    assert_eq!(received, vec![valid]);
    assert_eq!(errors, ContactDraft::default());
}
