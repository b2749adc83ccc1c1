// Class 0: heteroclitic "путь" and "дитя"

use padezh_core::word::{init, to_lower};
use padezh_core::{Case, Forms, InflectionError, Lemma};

use super::third;

pub(crate) fn decline(lemma: &Lemma, case: Case) -> Result<Forms, InflectionError> {
    let word = lemma.text();
    let lc = to_lower(word);

    if lc.ends_with("путь") {
        return Ok(match case {
            Case::Instrumental => Forms::one(format!("{}ем", init(word))),
            _ => third::decline(lemma, case),
        });
    }

    if lc.ends_with("дитя") {
        return Ok(match case {
            Case::Nominative | Case::Accusative => Forms::one(word),
            Case::Genitive | Case::Dative | Case::Prepositional | Case::Locative => {
                Forms::one(format!("{word}ти"))
            }
            Case::Instrumental => Forms::two(format!("{word}тей"), format!("{word}тею")),
        });
    }

    Err(InflectionError::UnsupportedForm(format!(
        "{word:?} has no known irregular paradigm"
    )))
}
