use serde::Serialize;
use vakya_annotator::RuleBasedAnnotator;
use vakya_checker::{validate_sentence, CheckError, SentenceChecker};
use vakya_lexicon::Lexicon;
use vakya_protocol::Report;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse<'a> {
    #[serde(flatten)]
    pub report: &'a Report,
    pub all_clear: bool,
}

/// The engine instance running in the browser.
///
/// It can only be constructed from a fully loaded lexicon, so a failed
/// fetch/parse surfaces as a constructor error and no check ever runs
/// against empty tables.
#[wasm_bindgen]
pub struct VakyaEngine {
    lexicon: Lexicon,
    annotator: RuleBasedAnnotator,
}

#[wasm_bindgen]
impl VakyaEngine {
    /// Builds the engine from the three JSON tables (fetched by JS).
    #[wasm_bindgen(constructor)]
    pub fn new(dictionary: &str, verbs: &str, rules: &str) -> Result<VakyaEngine, JsError> {
        Ok(Self::with_lexicon(Lexicon::from_json(dictionary, verbs, rules)?))
    }

    /// Builds the engine from a precompiled lexicon bundle.
    #[wasm_bindgen(js_name = fromBundle)]
    pub fn from_bundle(bytes: &[u8]) -> Result<VakyaEngine, JsError> {
        Ok(Self::with_lexicon(Lexicon::from_bundle(bytes)?))
    }

    /// Text -> Report. Blank input is rejected with "please enter a sentence".
    pub fn check(&self, sentence: &str) -> Result<JsValue, JsError> {
        let report = self.report(sentence)?;
        let response = CheckResponse {
            report: &report,
            all_clear: report.is_clear(),
        };
        serde_wasm_bindgen::to_value(&response).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl VakyaEngine {
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        let annotator = RuleBasedAnnotator::new(lexicon.verbs());
        Self { lexicon, annotator }
    }

    pub fn report(&self, sentence: &str) -> Result<Report, CheckError> {
        let sentence = validate_sentence(sentence)?;
        Ok(SentenceChecker::new(&self.lexicon, &self.annotator).check(sentence))
    }
}
