use serde::Serialize;
use sword_parser::normalize::tokenize;
use sword_parser::Extractor;
use sword_protocol::Reference;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One resolved reference, shaped for JavaScript.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReferenceReport {
    pub book: String,
    pub chapter: u32,
    pub verse: Option<u32>,
    /// First and one-past-last token index covered by the reference
    pub start: usize,
    pub end: usize,
    /// Path segment for bible-api.com style services
    pub passage: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub tokens: Vec<String>,
    pub references: Vec<ReferenceReport>,
}

impl ReferenceReport {
    fn new(reference: &Reference, translation: &str) -> Self {
        Self {
            book: reference.book.name.to_string(),
            chapter: reference.chapter,
            verse: reference.verse,
            start: reference.consumed_span.start,
            end: reference.consumed_span.end,
            passage: reference.lookup_key(translation).passage(),
        }
    }
}

/// The engine instance running in the browser. Verse text is fetched by
/// the page; this only finds the references.
#[wasm_bindgen]
pub struct SwordEngine {
    translation: String,
    extractor: Extractor,
}

#[wasm_bindgen]
impl SwordEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(translation: String) -> Self {
        Self {
            translation: translation.trim().to_ascii_lowercase(),
            extractor: Extractor::default(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn translation(&self) -> String {
        self.translation.clone()
    }

    /// Recognized text -> `{ tokens, references }`, or `null` if the report
    /// cannot be converted.
    pub fn analyze(&self, input: &str) -> JsValue {
        serde_wasm_bindgen::to_value(&self.analyze_core(input)).unwrap_or(JsValue::NULL)
    }
}

impl SwordEngine {
    pub fn analyze_core(&self, input: &str) -> AnalysisReport {
        let references = self
            .extractor
            .extract(input)
            .iter()
            .map(|reference| ReferenceReport::new(reference, &self.translation))
            .collect();

        AnalysisReport {
            tokens: tokenize(input),
            references,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_core_reports_tokens_and_references() {
        let engine = SwordEngine::new(" KJV ".to_string());
        assert_eq!(engine.translation(), "kjv");

        let report = engine.analyze_core("Read First John 3:16 and Genesis chapter 5");
        assert_eq!(
            report.tokens,
            ["read", "first", "john", "3", "16", "and", "genesis", "chapter", "5"]
        );
        assert_eq!(
            report.references,
            [
                ReferenceReport {
                    book: "1 John".to_string(),
                    chapter: 3,
                    verse: Some(16),
                    start: 1,
                    end: 6,
                    passage: "1 John+3:16".to_string(),
                },
                ReferenceReport {
                    book: "Genesis".to_string(),
                    chapter: 5,
                    verse: None,
                    start: 6,
                    end: 9,
                    passage: "Genesis+5".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_analyze_core_without_references() {
        let report = SwordEngine::new("web".to_string()).analyze_core("amen");
        assert_eq!(report.tokens, ["amen"]);
        assert!(report.references.is_empty());
    }
}
