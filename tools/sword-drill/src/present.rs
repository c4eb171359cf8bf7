use std::io::Write;

use serde::Serialize;
use sword_protocol::{LookupKey, Reference, Span};
use tracing::{error, info};

use crate::fetch::{LookupError, Passage, VerseTextService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct ReferenceRecord<'a> {
    #[serde(flatten)]
    key: &'a LookupKey,
    span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Presentation sink: shows each reference, with its text when a verse
/// service is attached. A failed lookup is shown to the user and logged;
/// it never stops the stream.
pub struct Presenter<'s, W> {
    out: W,
    service: Option<&'s dyn VerseTextService>,
    translation: String,
    format: OutputFormat,
}

impl<'s, W: Write> Presenter<'s, W> {
    pub fn new(
        out: W,
        service: Option<&'s dyn VerseTextService>,
        translation: &str,
        format: OutputFormat,
    ) -> Self {
        Self {
            out,
            service,
            translation: translation.to_string(),
            format,
        }
    }

    pub async fn present(&mut self, reference: &Reference) -> anyhow::Result<()> {
        let key = reference.lookup_key(&self.translation);

        let lookup = match self.service {
            Some(service) => Some(service.fetch(&key).await),
            None => None,
        };

        match &lookup {
            Some(Ok(passage)) => info!(%reference, service_reference = %passage.reference, "fetched passage"),
            Some(Err(err)) => error!(%reference, %err, "verse lookup failed"),
            None => {}
        }

        match self.format {
            OutputFormat::Text => self.write_text(reference, lookup.as_ref())?,
            OutputFormat::Json => self.write_json(reference, &key, lookup.as_ref())?,
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_text(
        &mut self,
        reference: &Reference,
        lookup: Option<&Result<Passage, LookupError>>,
    ) -> std::io::Result<()> {
        match lookup {
            Some(Ok(passage)) => writeln!(self.out, "{}\n {}", reference, passage.text),
            Some(Err(_)) => writeln!(self.out, "Failed to fetch {} - Maybe it doesn't exist?", reference),
            None => writeln!(self.out, "{}", reference),
        }
    }

    fn write_json(
        &mut self,
        reference: &Reference,
        key: &LookupKey,
        lookup: Option<&Result<Passage, LookupError>>,
    ) -> anyhow::Result<()> {
        let record = ReferenceRecord {
            key,
            span: reference.consumed_span,
            text: lookup.and_then(|l| l.as_ref().ok()).map(|p| p.text.as_str()),
            error: lookup.and_then(|l| l.as_ref().err()).map(|e| e.to_string()),
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)?;
        Ok(())
    }
}
