//! Line-oriented terminal prompts
//!
//! Each control is rendered as a prompt on the writer and answered by one
//! line on the reader. An empty line accepts the control's default. Invalid
//! entries are reported and asked again; end of input aborts the cycle.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use super::date_utils::{DateFormatConfig, parse_date_string};
use super::{AnswerSource, WidgetKind};
use crate::config::{DateBounds, FormConfig};
use crate::error::Result;
use crate::error::util::{invalid_schema, missing_field};
use crate::models::FieldValue;
use crate::schema::FieldDescriptor;

/// Answer source reading from a line-based reader and prompting on a writer
pub struct PromptSource<R, W> {
    reader: R,
    writer: W,
    date_formats: DateFormatConfig,
    date_bounds: DateBounds,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    /// Create a prompt source
    ///
    /// `today` is the upper bound of the date picker unless the
    /// configuration sets an explicit one.
    pub fn new(reader: R, writer: W, config: &FormConfig, today: NaiveDate) -> Self {
        Self {
            reader,
            writer,
            date_formats: config.date_formats.clone(),
            date_bounds: config.date_bounds,
            today,
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Mutable access to the writer, for output between prompts
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Ask a yes/no question; anything but an explicit yes is a no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.writer, "{question} [y/N]: ")?;
        self.writer.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|line| matches!(line.to_lowercase().as_str(), "y" | "yes")))
    }

    /// Read one trimmed line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, key: &str, text: &str) -> Result<String> {
        write!(self.writer, "{text}: ")?;
        self.writer.flush()?;
        match self.read_line()? {
            Some(line) => Ok(line),
            None => missing_field(key),
        }
    }

    fn retry(&mut self, key: &str, message: &str) -> Result<()> {
        log::warn!("Rejected input for {key}: {message}");
        writeln!(self.writer, "  {message}")?;
        Ok(())
    }

    fn ask_number(&mut self, key: &str, field: &FieldDescriptor) -> Result<FieldValue> {
        loop {
            let line = self.prompt(key, &format!("{} [0]", field.label()))?;
            if line.is_empty() {
                return Ok(FieldValue::Number(0.0));
            }
            match line.parse::<f64>() {
                Ok(n) if n.is_finite() => return Ok(FieldValue::Number(n)),
                _ => self.retry(key, &format!("'{line}' is not a number"))?,
            }
        }
    }

    fn ask_select(&mut self, key: &str, field: &FieldDescriptor) -> Result<FieldValue> {
        let labels: Vec<String> = field.options().iter().map(|opt| opt.label.clone()).collect();
        if labels.is_empty() {
            return invalid_schema(format!("Field '{key}' has no options to select from"));
        }

        writeln!(self.writer, "{}:", field.label())?;
        for (idx, label) in labels.iter().enumerate() {
            writeln!(self.writer, "  {}) {label}", idx + 1)?;
        }

        loop {
            let line = self.prompt(key, &format!("Choose 1-{} [1]", labels.len()))?;
            if line.is_empty() {
                return Ok(FieldValue::Label(labels[0].clone()));
            }
            if let Some(label) = labels.iter().find(|label| **label == line) {
                return Ok(FieldValue::Label(label.clone()));
            }
            match line.parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => {
                    return Ok(FieldValue::Label(labels[n - 1].clone()));
                }
                _ => self.retry(key, &format!("'{line}' is not one of the options"))?,
            }
        }
    }

    fn ask_date(&mut self, key: &str, field: &FieldDescriptor) -> Result<FieldValue> {
        let min = self.date_bounds.min;
        let max = self.date_bounds.max_or(self.today);
        let default = self.date_bounds.default;

        loop {
            let line = self.prompt(
                key,
                &format!("{} ({min} to {max}) [{default}]", field.label()),
            )?;
            if line.is_empty() {
                return Ok(FieldValue::Date(default));
            }
            match parse_date_string(&line, &self.date_formats) {
                Some(date) if date < min || date > max => {
                    self.retry(key, &format!("{date} is outside {min} to {max}"))?;
                }
                Some(date) => return Ok(FieldValue::Date(date)),
                None => self.retry(key, &format!("'{line}' is not a date"))?,
            }
        }
    }
}

impl<R: BufRead, W: Write> AnswerSource for PromptSource<R, W> {
    fn answer(&mut self, key: &str, field: &FieldDescriptor, widget: WidgetKind) -> Result<FieldValue> {
        match widget {
            WidgetKind::NumericStepper => self.ask_number(key, field),
            WidgetKind::SingleSelect => self.ask_select(key, field),
            WidgetKind::DatePicker => self.ask_date(key, field),
        }
    }
}
