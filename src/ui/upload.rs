// SPDX-License-Identifier: MPL-2.0
//! Invoice selection and upload form.
//!
//! The component owns the picked file and the chosen OCR model; the actual
//! file dialog and HTTP upload are side effects of the events it emits, so
//! the application shell stays in charge of tasks.

use crate::api::OcrModel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, pick_list, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::path::PathBuf;

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: Option<u64>,
}

impl SelectedFile {
    /// Builds the selection from a dialog result, reading the size from disk
    /// when available.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size_bytes = std::fs::metadata(&path).map(|meta| meta.len()).ok();

        Self {
            path,
            name,
            size_bytes,
        }
    }
}

/// Upload form state.
#[derive(Debug, Default)]
pub struct State {
    selected: Option<SelectedFile>,
    model: OcrModel,
    uploading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ChooseFilePressed,
    ModelSelected(OcrModel),
    SubmitPressed,
}

/// Events the application shell reacts to with side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Open the native file dialog.
    OpenFileDialog,
    /// Upload the selected file and start processing with the given model.
    UploadRequested { path: PathBuf, model: OcrModel },
}

impl State {
    #[must_use]
    pub fn new(default_model: OcrModel) -> Self {
        Self {
            model: default_model,
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::ChooseFilePressed => Some(Event::OpenFileDialog),
            Message::ModelSelected(model) => {
                self.model = model;
                None
            }
            Message::SubmitPressed => {
                // Guard: submitting without a file is a no-op
                let selected = self.selected.as_ref()?;
                if self.uploading {
                    return None;
                }
                self.uploading = true;
                Some(Event::UploadRequested {
                    path: selected.path.clone(),
                    model: self.model,
                })
            }
        }
    }

    /// Stores the file picked in the dialog.
    pub fn set_selected_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn model(&self) -> OcrModel {
        self.model
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Re-enables the form after an upload attempt finished.
    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("upload-title")).size(typography::TITLE_LG);

        let file_label: Element<'a, Message> = match &self.selected {
            Some(file) => {
                let mut line = file.name.clone();
                if let Some(size) = file.size_bytes {
                    line.push_str(&format!(" ({})", format_file_size(size)));
                }
                Text::new(line).size(typography::BODY_LG).into()
            }
            None => Text::new(i18n.tr("upload-hint-no-file"))
                .size(typography::BODY)
                .into(),
        };

        let choose_button = button(Text::new(i18n.tr("upload-choose-file")))
            .padding(spacing::SM)
            .on_press(Message::ChooseFilePressed);

        let model_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(i18n.tr("upload-model-label")).size(typography::BODY))
            .push(pick_list(
                OcrModel::ALL,
                Some(self.model),
                Message::ModelSelected,
            ));

        let submit_label = if self.uploading {
            i18n.tr("upload-uploading")
        } else {
            i18n.tr("upload-submit")
        };
        let submit_button = button(Text::new(submit_label))
            .padding(spacing::SM)
            .on_press_maybe(
                (self.selected.is_some() && !self.uploading).then_some(Message::SubmitPressed),
            );

        let form = Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(title)
            .push(file_label)
            .push(choose_button)
            .push(model_row)
            .push(submit_button);

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

/// Human-readable file size for the selection row.
fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;

    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.0} kB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
