use gpui::{AppContext, Bounds, WindowBounds, WindowOptions, px, size};

use crate::components::ContactForm;
use crate::contact::{ContactDraft, ContactDraftField};
use crate::form::FormOptions;

type SubmitHook = Box<dyn FnMut(&ContactDraft) + 'static>;

/// Hands validated submissions to the log. Stands in for whatever system
/// actually consumes them.
pub fn log_submission(draft: &ContactDraft) {
    tracing::info!(
        name = %draft.name,
        email = %draft.email,
        message = %draft.message,
        "contact form submitted"
    );
}

pub struct ContactApplication {
    application: gpui::Application,
    window_title: String,
    window_size: (f32, f32),
    options: FormOptions,
    on_submit: SubmitHook,
}

impl Default for ContactApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactApplication {
    pub fn new() -> Self {
        Self::from_application(gpui::Application::new())
    }

    pub fn headless() -> Self {
        Self::from_application(gpui::Application::headless())
    }

    pub fn from_application(application: gpui::Application) -> Self {
        Self {
            application,
            window_title: "Contact".to_string(),
            window_size: (640.0, 560.0),
            options: FormOptions::default(),
            on_submit: Box::new(log_submission),
        }
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_size(mut self, width: f32, height: f32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn form_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the default handler, which only logs the submission.
    pub fn on_submit(mut self, handler: impl FnMut(&ContactDraft) + 'static) -> Self {
        self.on_submit = Box::new(handler);
        self
    }

    pub fn run(self) {
        let Self {
            application,
            window_title,
            window_size,
            options,
            on_submit,
        } = self;

        application.run(move |cx| {
            let bounds = Bounds::centered(None, size(px(window_size.0), px(window_size.1)), cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(gpui::TitlebarOptions {
                    title: Some(window_title.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, move |window, cx| {
                let view = cx.new(|cx| ContactForm::new(options, on_submit, cx));
                if let Some(handle) = view.read(cx).focus_handle(ContactDraftField::Name) {
                    window.focus(&handle);
                }
                view
            });
            match opened {
                Ok(_) => tracing::debug!("contact window opened"),
                Err(error) => {
                    tracing::error!(%error, "failed to open contact window");
                    cx.quit();
                }
            }
        });
    }
}
