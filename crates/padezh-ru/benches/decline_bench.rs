// Criterion benchmarks for padezh-ru.
//
// The word list is the corpus fixture used by the integration tests, so the
// benchmarks need no external data.
//
// Run:
//   cargo bench -p padezh-ru

use criterion::{Criterion, criterion_group, criterion_main};
use padezh_ru::{Case, Engine, Gender, Lemma};

// ---------------------------------------------------------------------------
// Word list
// ---------------------------------------------------------------------------

fn load_lemmas() -> Vec<Lemma> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/paradigms.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap_or_default();
    entries
        .iter()
        .filter_map(|e| {
            let text = e.get("text")?.as_str()?;
            let gender = e
                .get("gender")
                .and_then(|g| g.as_str())
                .and_then(|g| g.parse::<Gender>().ok());
            let flag = |key: &str| e.get(key).and_then(|v| v.as_bool()).unwrap_or(false);
            Lemma::builder(text)
                .maybe_gender(gender)
                .animate(flag("animate"))
                .indeclinable(flag("indeclinable"))
                .plurale_tantum(flag("pluraliaTantum"))
                .build()
                .ok()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Every singular case of every corpus lemma.
fn bench_decline_all(c: &mut Criterion) {
    let lemmas = load_lemmas();
    c.bench_function("decline_all_cases", |b| {
        b.iter(|| {
            for lemma in &lemmas {
                for case in Case::ALL {
                    let _ = std::hint::black_box(padezh_ru::decline(lemma, case));
                }
            }
        })
    });
}

fn bench_pluralize(c: &mut Criterion) {
    let lemmas = load_lemmas();
    c.bench_function("pluralize", |b| {
        b.iter(|| {
            for lemma in &lemmas {
                let _ = std::hint::black_box(padezh_ru::pluralize(lemma));
            }
        })
    });
}

/// Full plural paradigms through an engine with a populated stress table.
fn bench_engine_plural_paradigm(c: &mut Criterion) {
    let lemmas = load_lemmas();
    let mut engine = Engine::new();
    if let Ok(cringe) = Lemma::new("кринж", Gender::Masculine) {
        if let Ok(pattern) = "SEESbSE-EEEEEE".parse() {
            engine.put_stress(&cringe, pattern);
        }
    }
    c.bench_function("engine_plural_paradigm", |b| {
        b.iter(|| {
            for lemma in &lemmas {
                let _ = std::hint::black_box(engine.plural_paradigm(lemma));
            }
        })
    });
}

/// Classification alone: the first step of every operation.
fn bench_classify(c: &mut Criterion) {
    let lemmas = load_lemmas();
    c.bench_function("classify", |b| {
        b.iter(|| {
            for lemma in &lemmas {
                let _ = std::hint::black_box(padezh_ru::classify(lemma));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_decline_all,
    bench_pluralize,
    bench_engine_plural_paradigm,
    bench_classify
);
criterion_main!(benches);
