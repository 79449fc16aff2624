//! Dialog Service
//!
//! One modal shared by the whole app: an info message with Close, or a
//! confirmation with Yes/No.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before clearing content after close, so it does not vanish mid fade-out
const CLEAR_DELAY_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Info,
    Confirm,
}

#[derive(Clone, Copy)]
pub struct DialogContext {
    open: RwSignal<bool>,
    text: RwSignal<String>,
    kind: RwSignal<DialogKind>,
    on_yes: StoredValue<Option<Callback<()>>>,
}

impl DialogContext {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            text: RwSignal::new(String::new()),
            kind: RwSignal::new(DialogKind::Info),
            on_yes: StoredValue::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    pub fn kind(&self) -> DialogKind {
        self.kind.get()
    }

    /// Show a message with a single Close button
    pub fn info(&self, text: impl Into<String>) {
        self.show(text.into(), DialogKind::Info, None);
    }

    /// Ask a yes/no question; `on_yes` runs only if the user accepts
    pub fn confirm(&self, text: impl Into<String>, on_yes: impl Fn() + Send + Sync + 'static) {
        self.show(text.into(), DialogKind::Confirm, Some(Callback::new(move |()| on_yes())));
    }

    fn show(&self, text: String, kind: DialogKind, on_yes: Option<Callback<()>>) {
        self.text.set(text);
        self.kind.set(kind);
        self.on_yes.set_value(on_yes);
        self.open.set(true);
    }

    /// Run the pending confirmation, then close
    pub fn accept(&self) {
        if let Some(on_yes) = self.on_yes.get_value() {
            on_yes.run(());
        }
        self.close();
    }

    pub fn close(&self) {
        self.open.set(false);

        let dialog = *self;
        Timeout::new(CLEAR_DELAY_MS, move || {
            // A dialog opened during the delay keeps its content
            if dialog.open.try_get_untracked() == Some(false) {
                dialog.text.set(String::new());
                dialog.kind.set(DialogKind::Info);
                dialog.on_yes.set_value(None);
            }
        })
        .forget();
    }
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dialog() -> DialogContext {
    expect_context::<DialogContext>()
}
