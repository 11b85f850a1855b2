use contact_form::form::FormModel;

#[derive(Clone, Default, contact_form::form::FormModel)]
struct FeedbackForm {
    subject: String,
    reply_to: String,
}

fn main() {
    let fields = FeedbackForm::fields();
    assert_eq!(fields, &[FeedbackFormField::Subject, FeedbackFormField::ReplyTo]);

    let mut model = FeedbackForm::default();
    model.set(FeedbackFormField::ReplyTo, "b@example.com".to_string());
    assert_eq!(FeedbackFormField::ReplyTo.as_str(), "reply_to");
    assert_eq!(model.get(FeedbackFormField::ReplyTo), "b@example.com");
    assert_eq!(model.reply_to, "b@example.com");
    assert!(model.subject.is_empty());
    assert!("nope".parse::<FeedbackFormField>().is_err());
}
