// SPDX-License-Identifier: MPL-2.0
//! Processing status and the extracted invoice fields.
//!
//! While the server is still reading the document this screen shows a
//! processing hint; polling itself is owned by the request layer. Once the
//! result lands, the invoice fields render with Czech display formatting.

use crate::api::InvoiceResult;
use crate::i18n::fluent::I18n;
use crate::i18n::format::{self, DEFAULT_CURRENCY, MISSING_VALUE};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Result screen state for one uploaded invoice.
#[derive(Debug)]
pub struct State {
    upload_id: i64,
    file_name: String,
    result: Option<Box<InvoiceResult>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackPressed,
}

/// Events the application shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Return to the upload form.
    BackRequested,
}

impl State {
    #[must_use]
    pub fn new(upload_id: i64, file_name: String) -> Self {
        Self {
            upload_id,
            file_name,
            result: None,
        }
    }

    #[must_use]
    pub fn upload_id(&self) -> i64 {
        self.upload_id
    }

    /// Name the invoice was uploaded under, shown in the window title.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// True while the extracted record has not arrived yet.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.result.is_none()
    }

    pub fn set_result(&mut self, result: InvoiceResult) {
        self.result = Some(Box::new(result));
    }

    #[must_use]
    pub fn result(&self) -> Option<&InvoiceResult> {
        self.result.as_deref()
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::BackPressed => Some(Event::BackRequested),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let content = match self.result.as_deref() {
            None => self.view_processing(i18n),
            Some(result) => self.view_result(result, i18n),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn view_processing<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let hint = i18n.tr_with_args("result-processing-hint", &[("filename", &self.file_name)]);

        Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr("result-title-processing")).size(typography::TITLE_LG))
            .push(Text::new(hint).size(typography::BODY))
            .push(self.back_button(i18n))
            .into()
    }

    fn view_result<'a>(&'a self, result: &'a InvoiceResult, i18n: &'a I18n) -> Element<'a, Message> {
        let currency = result.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);

        let fields: Vec<(&str, String)> = vec![
            ("result-field-invoice-number", text_or_missing(result.invoice_number.as_deref())),
            ("result-field-invoice-date", format::format_date(result.invoice_date.as_deref())),
            ("result-field-due-date", format::format_date(result.due_date.as_deref())),
            ("result-field-total-amount", format::format_currency(result.total_amount, currency)),
            ("result-field-vat-amount", format::format_currency(result.vat_amount, currency)),
            ("result-field-supplier-name", text_or_missing(result.supplier_name.as_deref())),
            ("result-field-supplier-tax-id", text_or_missing(result.supplier_tax_id.as_deref())),
            ("result-field-supplier-vat-id", text_or_missing(result.supplier_vat_id.as_deref())),
            ("result-field-customer-name", text_or_missing(result.customer_name.as_deref())),
            ("result-field-customer-tax-id", text_or_missing(result.customer_tax_id.as_deref())),
            ("result-field-customer-vat-id", text_or_missing(result.customer_vat_id.as_deref())),
            ("result-field-processed-date", format::format_date(result.processed_date.as_deref())),
            ("result-field-confidence", format_confidence(result.confidence_score)),
            ("result-field-model-used", text_or_missing(result.llm_model_used.as_deref())),
        ];

        let mut rows = Column::new().spacing(spacing::XS);
        for (key, value) in fields {
            rows = rows.push(field_row(i18n.tr(key), value));
        }

        Column::new()
            .spacing(spacing::LG)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(Text::new(i18n.tr("result-title")).size(typography::TITLE_LG))
            .push(Text::new(self.file_name.clone()).size(typography::BODY))
            .push(rows)
            .push(self.back_button(i18n))
            .into()
    }

    fn back_button<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        button(Text::new(i18n.tr("result-back")))
            .padding(spacing::SM)
            .on_press(Message::BackPressed)
            .into()
    }
}

fn field_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::FIELD_LABEL_WIDTH)),
        )
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn text_or_missing(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Confidence score as a percentage with the Czech space before `%`.
fn format_confidence(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.0}\u{a0}%", score * 100.0),
        None => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> InvoiceResult {
        InvoiceResult {
            id: 1,
            upload_id: 7,
            invoice_number: Some("2024-001".to_string()),
            invoice_date: Some("2024-03-05T00:00:00".to_string()),
            due_date: None,
            total_amount: Some(1234.5),
            vat_amount: None,
            currency: Some("CZK".to_string()),
            supplier_name: Some("Dodavatel s.r.o.".to_string()),
            supplier_tax_id: None,
            supplier_vat_id: None,
            customer_name: None,
            customer_tax_id: None,
            customer_vat_id: None,
            processed_date: Some("2024-03-05T14:30:00".to_string()),
            confidence_score: Some(0.87),
            llm_model_used: Some("llama3".to_string()),
        }
    }

    #[test]
    fn new_state_is_processing() {
        let state = State::new(7, "faktura.pdf".to_string());
        assert!(state.is_processing());
        assert_eq!(state.upload_id(), 7);
    }

    #[test]
    fn set_result_finishes_processing() {
        let mut state = State::new(7, "faktura.pdf".to_string());
        state.set_result(sample_result());

        assert!(!state.is_processing());
        assert_eq!(
            state.result().and_then(|r| r.invoice_number.as_deref()),
            Some("2024-001")
        );
    }

    #[test]
    fn back_message_emits_event() {
        let mut state = State::new(7, "faktura.pdf".to_string());
        assert_eq!(
            state.update(Message::BackPressed),
            Some(Event::BackRequested)
        );
    }

    #[test]
    fn empty_text_fields_render_sentinel() {
        assert_eq!(text_or_missing(None), "N/A");
        assert_eq!(text_or_missing(Some("")), "N/A");
        assert_eq!(text_or_missing(Some("  ")), "N/A");
        assert_eq!(text_or_missing(Some("value")), "value");
    }

    #[test]
    fn confidence_renders_as_percentage() {
        assert_eq!(format_confidence(Some(0.87)), "87\u{a0}%");
        assert_eq!(format_confidence(None), "N/A");
    }
}
