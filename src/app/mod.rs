// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (upload form, result view,
//! localization, notifications) and translates messages into side effects
//! like file dialogs and HTTP requests. This file intentionally keeps policy
//! decisions (what happens on a failed request, when polling runs, window
//! sizing) close to the main update loop so it is easy to audit user-facing
//! behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{self, OcrModel, ResultResponse};
use crate::diagnostics::{DiagnosticEvent, DiagnosticsCollector};
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::result;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    upload: upload::State,
    result: Option<result::State>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Advisory activity log shared with the request layer.
    diagnostics: DiagnosticsCollector,
    /// Request layer; absent only if the HTTP client could not be built.
    client: Option<api::Client>,
    theme_mode: ThemeMode,
    /// Model requested for the upload currently in flight.
    pending_model: OcrModel,
    /// Interval between result polls while processing runs.
    poll_interval: Duration,
    /// Persisted application state (last invoice directory).
    app_state: persisted_state::AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("has_result", &self.result.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_parts(I18n::default(), &config::Config::default(), None)
    }
}

impl App {
    /// Assembles the application state from loaded configuration, wiring the
    /// diagnostics handle into every component that logs through it.
    fn from_parts(i18n: I18n, config: &config::Config, server_override: Option<String>) -> Self {
        let diagnostics = DiagnosticsCollector::new();

        let base_url = server_override
            .or_else(|| config.server.base_url.clone())
            .unwrap_or_else(|| config::DEFAULT_SERVER_URL.to_string());
        let timeout = Duration::from_secs(
            config
                .server
                .request_timeout_secs
                .unwrap_or(config::DEFAULT_REQUEST_TIMEOUT_SECS),
        );
        let poll_interval = Duration::from_secs(config::clamp_poll_interval_secs(
            config
                .server
                .poll_interval_secs
                .unwrap_or(config::DEFAULT_POLL_INTERVAL_SECS),
        ));

        let client = match api::Client::new(base_url, timeout) {
            Ok(mut client) => {
                client.set_diagnostics(diagnostics.handle());
                Some(client)
            }
            Err(_) => None,
        };

        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        let default_model = config
            .upload
            .default_model
            .as_deref()
            .and_then(OcrModel::from_param)
            .unwrap_or_default();

        Self {
            i18n,
            screen: Screen::Upload,
            upload: upload::State::new(default_model),
            result: None,
            notifications,
            diagnostics,
            client,
            theme_mode: config.general.theme_mode,
            pending_model: default_model,
            poll_interval,
            app_state: persisted_state::AppState::default(),
        }
    }

    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::from_parts(i18n, &config, flags.server.clone());

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if app.client.is_none() {
            app.notifications.push(notifications::Notification::error(
                "notification-request-transport-error",
            ));
        }

        // A path on the command line behaves like a file picked in the dialog
        if let Some(path_str) = flags.file_path {
            app.handle_file_selected(PathBuf::from(path_str));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        match (&self.screen, &self.result) {
            (Screen::Result, Some(state)) => format!("{} – {}", base, state.file_name()),
            _ => base,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());
        let is_polling = self
            .result
            .as_ref()
            .is_some_and(result::State::is_processing);
        let poll_sub = subscription::create_poll_subscription(is_polling, self.poll_interval);

        Subscription::batch([tick_sub, poll_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(upload_message) => match self.upload.update(upload_message) {
                Some(upload::Event::OpenFileDialog) => self.open_file_dialog_task(),
                Some(upload::Event::UploadRequested { path, model }) => {
                    self.start_upload_task(path, model)
                }
                None => Task::none(),
            },
            Message::Result(result_message) => {
                if let Some(state) = &mut self.result {
                    if state.update(result_message) == Some(result::Event::BackRequested) {
                        self.result = None;
                        self.screen = Screen::Upload;
                    }
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FileDialogResult(Some(path)) => {
                self.handle_file_selected(path);
                Task::none()
            }
            // Cancelled dialog: nothing was picked, nothing changes
            Message::FileDialogResult(None) => Task::none(),
            Message::UploadCompleted(outcome) => self.handle_upload_completed(outcome),
            Message::ProcessingStarted(outcome) => {
                if let Err(error) = outcome {
                    self.push_api_error(error);
                }
                Task::none()
            }
            Message::PollTick(_instant) => self.poll_result_task(),
            Message::ResultFetched(outcome) => self.handle_result_fetched(outcome),
            Message::Tick(_instant) => {
                // Sweep notifications whose auto-dismiss timer has expired
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            upload: &self.upload,
            result: self.result.as_ref(),
            notifications: &self.notifications,
        })
    }

    /// Opens the native file dialog, starting in the last used directory.
    fn open_file_dialog_task(&self) -> Task<Message> {
        let start_dir = self.app_state.last_invoice_directory().cloned();
        let title = self.i18n.tr("upload-choose-file");

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title(&title)
                    .add_filter("Invoices", &["pdf", "png", "jpg", "jpeg", "tif", "tiff", "bmp"]);
                // Use last invoice directory if it still exists
                if let Some(dir) = start_dir {
                    if dir.exists() {
                        dialog = dialog.set_directory(&dir);
                    }
                }
                dialog
                    .pick_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            Message::FileDialogResult,
        )
    }

    /// Registers a picked file: logs its name, remembers its directory, and
    /// hands it to the upload form.
    fn handle_file_selected(&mut self, path: PathBuf) {
        let file = upload::SelectedFile::from_path(path);

        self.diagnostics.handle().log(DiagnosticEvent::FileSelected {
            name: file.name.clone(),
        });

        self.app_state
            .set_last_invoice_directory_from_file(&file.path);
        if let Some(key) = self.app_state.save() {
            self.notifications
                .push(notifications::Notification::warning(&key));
        }

        self.upload.set_selected_file(file);
    }

    fn start_upload_task(&mut self, path: PathBuf, model: OcrModel) -> Task<Message> {
        self.pending_model = model;

        let Some(client) = self.client.clone() else {
            self.upload.finish_upload();
            self.notifications.push(notifications::Notification::error(
                "notification-request-transport-error",
            ));
            return Task::none();
        };

        Task::perform(
            async move { client.upload_invoice(&path).await },
            Message::UploadCompleted,
        )
    }

    fn handle_upload_completed(
        &mut self,
        outcome: Result<api::UploadReceipt, ApiError>,
    ) -> Task<Message> {
        self.upload.finish_upload();

        match outcome {
            Ok(receipt) => {
                self.notifications.push(notifications::Notification::success(
                    "notification-upload-success",
                ));

                self.result = Some(result::State::new(
                    receipt.id,
                    receipt.original_filename.clone(),
                ));
                self.screen = Screen::Result;

                // The result screen is now live; the poll subscription takes
                // over from here.
                self.diagnostics.handle().log(DiagnosticEvent::PollingStarted {
                    upload_id: receipt.id,
                });

                let Some(client) = self.client.clone() else {
                    return Task::none();
                };
                let model = self.pending_model;
                Task::perform(
                    async move { client.start_processing(receipt.id, model).await },
                    Message::ProcessingStarted,
                )
            }
            Err(error) => {
                self.push_api_error(error);
                Task::none()
            }
        }
    }

    /// Issues one result poll if an upload is still being processed.
    fn poll_result_task(&self) -> Task<Message> {
        let Some(state) = &self.result else {
            return Task::none();
        };
        if !state.is_processing() {
            return Task::none();
        }
        let Some(client) = self.client.clone() else {
            return Task::none();
        };

        let upload_id = state.upload_id();
        Task::perform(
            async move { client.fetch_result(upload_id).await },
            Message::ResultFetched,
        )
    }

    fn handle_result_fetched(
        &mut self,
        outcome: Result<ResultResponse, ApiError>,
    ) -> Task<Message> {
        match outcome {
            // Still processing: the next poll will ask again
            Ok(ResultResponse::Pending(_)) => {}
            Ok(ResultResponse::Ready(invoice)) => {
                if let Some(state) = &mut self.result {
                    // Guard against a stale poll answering for a previous upload
                    if state.upload_id() == invoice.upload_id {
                        state.set_result(*invoice);
                        self.notifications.push(notifications::Notification::success(
                            "notification-processing-complete",
                        ));
                    }
                }
            }
            Err(error) => self.push_api_error(error),
        }
        Task::none()
    }

    /// Every failed exchange surfaces as exactly one error toast; the status
    /// code is interpolated into the message when one was received.
    fn push_api_error(&mut self, error: ApiError) {
        let mut notification = notifications::Notification::error(error.i18n_key());
        if let Some(status) = error.status() {
            notification = notification.with_arg("status", status.to_string());
        }
        self.notifications.push(notification);
    }
}
