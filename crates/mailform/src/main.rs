//! `MailForm` - desktop email composer.
//!
//! Built with the iced GUI framework on top of `mailform-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::sync::Arc;

use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, text_editor};
use iced::{Element, Length, Subscription, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailform_core::{
    Attachment, ComposeConfig, ComposeForm, Notice, Sender, SimulatedSender, SubmitError,
    Timeout,
};

use message::{ComposeMessage, KeyboardAction, Message};
use model::Banner;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailform=debug,mailform_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailForm");

    iced::application(MailForm::new, MailForm::update, MailForm::view)
        .title("MailForm")
        .subscription(MailForm::subscription)
        .run()
}

/// Most banners kept on screen; older ones are dropped first.
const MAX_BANNERS: usize = 4;

/// Main application state.
struct MailForm {
    /// Compose form.
    form: ComposeForm,
    /// Message body editor. Its text is mirrored into `form`.
    editor: text_editor::Content,
    /// Send operation built from the configuration.
    sender: Arc<Timeout<SimulatedSender>>,
    /// Configuration that arrived while a send was in flight.
    pending_config: Option<ComposeConfig>,
    /// Notifications, oldest first.
    banners: Vec<Banner>,
}

impl Default for MailForm {
    fn default() -> Self {
        let config = ComposeConfig::default();
        Self {
            form: ComposeForm::with_limits(config.limits),
            editor: text_editor::Content::new(),
            sender: Arc::new(config.sender.build()),
            pending_config: None,
            banners: Vec::new(),
        }
    }
}

impl MailForm {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        (
            Self::default(),
            Task::perform(load_config(), Message::ConfigLoaded),
        )
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Compose(msg) => {
                return self.handle_compose(msg);
            }
            Message::ConfigLoaded(Ok(config)) => {
                if self.form.is_submitting() {
                    info!("Send in flight, deferring configuration");
                    self.pending_config = Some(config);
                } else {
                    self.apply_config(config);
                }
            }
            Message::ConfigLoaded(Err(e)) => {
                warn!("Failed to load config, using defaults: {e}");
            }
            Message::FilesPicked(files) => {
                for rejection in self.form.add_attachments(files) {
                    self.push_banner(Banner::from(&rejection));
                }
            }
            Message::EmailSent(result) => {
                let notice = self.form.finish_submit(result);
                if matches!(notice, Notice::Sent(_)) {
                    self.editor = text_editor::Content::new();
                }
                self.push_banner(Banner::from(&notice));

                if let Some(config) = self.pending_config.take() {
                    self.apply_config(config);
                }
            }
            Message::DismissBanner(index) => {
                if index < self.banners.len() {
                    self.banners.remove(index);
                }
            }
            Message::KeyPressed(action) => match action {
                KeyboardAction::Send => {
                    return Task::done(Message::Compose(ComposeMessage::Send));
                }
                KeyboardAction::DismissAll => self.banners.clear(),
            },
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle compose messages.
    fn handle_compose(&mut self, msg: ComposeMessage) -> Task<Message> {
        match msg {
            ComposeMessage::AddressChanged(address) => {
                self.form.set_address(address);
            }
            ComposeMessage::MessageEdited(action) => {
                self.editor.perform(action);
                self.form.set_message(self.editor.text());
            }
            ComposeMessage::AttachFiles => {
                if self.form.can_attach() {
                    return Task::perform(pick_attachments(), Message::FilesPicked);
                }
            }
            ComposeMessage::RemoveAttachment(index) => {
                self.form.remove_attachment(index);
            }
            ComposeMessage::Send => match self.form.begin_submit() {
                Ok(email) => {
                    let sender = Arc::clone(&self.sender);
                    return Task::perform(
                        async move { sender.send(email).await },
                        Message::EmailSent,
                    );
                }
                // Field errors are rendered from the form itself
                Err(SubmitError::Invalid(_) | SubmitError::InFlight) => {}
            },
            ComposeMessage::Clear => {
                if !self.form.is_submitting() {
                    self.form.reset();
                    self.editor = text_editor::Content::new();
                }
            }
        }
        Task::none()
    }

    /// Replaces limits and sender, keeping whatever was already entered.
    ///
    /// Only called while no send is in flight, since the form is rebuilt.
    fn apply_config(&mut self, config: ComposeConfig) {
        let previous = std::mem::replace(&mut self.form, ComposeForm::with_limits(config.limits));
        self.form.set_address(previous.address());
        self.form.set_message(previous.message());
        for rejection in self
            .form
            .add_attachments(previous.attachments().iter().cloned())
        {
            self.push_banner(Banner::from(&rejection));
        }

        self.sender = Arc::new(config.sender.build());
        info!(
            max_attachments = config.limits.max_attachments,
            max_file_size = config.limits.max_file_size,
            "Configuration applied"
        );
    }

    /// Adds a banner, dropping the oldest ones past [`MAX_BANNERS`].
    fn push_banner(&mut self, banner: Banner) {
        self.banners.push(banner);
        if self.banners.len() > MAX_BANNERS {
            let excess = self.banners.len() - MAX_BANNERS;
            self.banners.drain(..excess);
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let content = column![
            view::view_banners(&self.banners),
            view::view_compose(&self.form, &self.editor),
        ]
        .spacing(16)
        .padding(24)
        .max_width(688.0);

        container(content)
            .center_x(Length::Fill)
            .height(Length::Fill)
            .style(style::page_style)
            .into()
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key {
        // Ctrl+Enter: Send
        Key::Named(keyboard::key::Named::Enter) if modifiers.command() => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        // Escape: Dismiss notifications
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::DismissAll))
        }
        _ => None,
    }
}

/// Load the composer configuration from the user's config directory.
async fn load_config() -> Result<ComposeConfig, String> {
    let config_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("mailform")
        .join("config.json");

    ComposeConfig::load(&config_path)
        .await
        .map_err(|e| e.to_string())
}

/// Open the file dialog and read the size of every selected file.
async fn pick_attachments() -> Vec<Attachment> {
    let Some(handles) = rfd::AsyncFileDialog::new()
        .set_title("Attach files")
        .pick_files()
        .await
    else {
        return Vec::new();
    };

    let mut attachments = Vec::with_capacity(handles.len());
    for handle in handles {
        match Attachment::from_path(handle.path()).await {
            Ok(attachment) => attachments.push(attachment),
            Err(e) => warn!("Skipping {}: {e}", handle.path().display()),
        }
    }
    attachments
}
