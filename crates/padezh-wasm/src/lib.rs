// WASM bindings for Padezh Russian noun inflection.
//
// Provides a `RussianNouns` class exported via wasm-bindgen that wraps the
// `Engine` from padezh-ru. Lemmas cross the boundary as plain objects and
// are deserialized with serde-wasm-bindgen; cases and genders are strings
// (English identifiers or Russian labels).
//
// Usage from JavaScript:
//
//   const rn = new RussianNouns();
//   const mountain = { text: "гора", gender: "feminine" };
//   rn.decline(mountain, "genitive");          // => ["горы"]
//   rn.decline(mountain, "творительный");      // => ["горой", "горою"]
//   rn.pluralize(mountain);                    // => ["горы"]
//   rn.decline(mountain, "genitive", "горы");  // => ["гор"]
//   rn.declension(mountain);                   // => 2
//   rn.schoolDeclension(mountain);             // => 1
//   rn.putStress({ text: "кринж", gender: "masculine" }, "SEESESE-EEEEEE");

use padezh_core::{Case, Gender, InflectionError, Lemma};
use padezh_ru::{Engine, StressPattern};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serde DTO types for JS interop
// ============================================================================

/// Plain-object lemma: `{ text, gender, pluraliaTantum, indeclinable,
/// animate, surname }`. Only `text` is required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsLemma {
    text: String,
    gender: Option<String>,
    pluralia_tantum: bool,
    indeclinable: bool,
    animate: bool,
    surname: bool,
}

impl JsLemma {
    fn into_lemma(self) -> Result<Lemma, InflectionError> {
        let gender = self
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()?;
        Lemma::builder(self.text)
            .maybe_gender(gender)
            .plurale_tantum(self.pluralia_tantum)
            .indeclinable(self.indeclinable)
            .animate(self.animate)
            .surname(self.surname)
            .build()
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn lemma_from_js(value: JsValue) -> Result<Lemma, JsError> {
    let dto: JsLemma = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
    dto.into_lemma().map_err(to_js_error)
}

fn case_from_js(name: &str) -> Result<Case, JsError> {
    name.parse::<Case>().map_err(to_js_error)
}

// ============================================================================
// RussianNouns
// ============================================================================

/// Russian noun inflection engine for WebAssembly.
#[wasm_bindgen]
pub struct RussianNouns {
    engine: Engine,
}

impl Default for RussianNouns {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl RussianNouns {
    /// Create an engine with an empty stress table.
    #[wasm_bindgen(constructor)]
    pub fn new() -> RussianNouns {
        RussianNouns {
            engine: Engine::new(),
        }
    }

    /// Decline a lemma.
    ///
    /// Without `plural` returns the singular form(s) of `case`; with the
    /// nominative plural given, returns the plural form(s) instead. The
    /// preferred form comes first.
    pub fn decline(
        &self,
        lemma: JsValue,
        case: &str,
        plural: Option<String>,
    ) -> Result<Vec<String>, JsError> {
        let lemma = lemma_from_js(lemma)?;
        let case = case_from_js(case)?;
        let forms = match plural {
            Some(plural) => self.engine.decline_plural(&lemma, case, &plural),
            None => self.engine.decline(&lemma, case),
        };
        forms.map(|f| f.to_vec()).map_err(to_js_error)
    }

    /// Nominative plural form(s) of a lemma.
    pub fn pluralize(&self, lemma: JsValue) -> Result<Vec<String>, JsError> {
        let lemma = lemma_from_js(lemma)?;
        self.engine
            .pluralize(&lemma)
            .map(|f| f.to_vec())
            .map_err(to_js_error)
    }

    /// All seven cases as an array of arrays, singular or (given the
    /// nominative plural) plural.
    pub fn paradigm(&self, lemma: JsValue, plural: Option<String>) -> Result<js_sys::Array, JsError> {
        let lemma = lemma_from_js(lemma)?;
        let rows = js_sys::Array::new();
        for case in Case::ALL {
            let forms = match &plural {
                Some(plural) => self.engine.decline_plural(&lemma, case, plural),
                None => self.engine.decline(&lemma, case),
            }
            .map_err(to_js_error)?;
            let row = js_sys::Array::new();
            for form in forms.iter() {
                row.push(&JsValue::from_str(form));
            }
            rows.push(&row);
        }
        Ok(rows)
    }

    /// Academic declension number: 0..=3, or -1 for indeclinable words.
    pub fn declension(&self, lemma: JsValue) -> Result<i8, JsError> {
        let lemma = lemma_from_js(lemma)?;
        self.engine
            .classify(&lemma)
            .map(|c| c.number())
            .map_err(to_js_error)
    }

    /// School declension number (1 and 2 swapped).
    #[wasm_bindgen(js_name = "schoolDeclension")]
    pub fn school_declension(&self, lemma: JsValue) -> Result<i8, JsError> {
        let lemma = lemma_from_js(lemma)?;
        self.engine
            .school_declension(&lemma)
            .map_err(to_js_error)
    }

    /// Register a stress pattern (`SEESESE-EEEEEE` notation) for a lemma.
    #[wasm_bindgen(js_name = "putStress")]
    pub fn put_stress(&mut self, lemma: JsValue, pattern: &str) -> Result<(), JsError> {
        let lemma = lemma_from_js(lemma)?;
        let pattern: StressPattern = pattern.parse().map_err(to_js_error)?;
        self.engine.put_stress(&lemma, pattern);
        Ok(())
    }

    /// Russian case labels in canonical order.
    pub fn cases() -> Vec<String> {
        Case::ALL.iter().map(|c| c.label().to_string()).collect()
    }

    /// Russian gender labels.
    pub fn genders() -> Vec<String> {
        Gender::ALL.iter().map(|g| g.label().to_string()).collect()
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
