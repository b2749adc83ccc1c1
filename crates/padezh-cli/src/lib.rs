// padezh-cli: shared utilities for the command-line tools.
//
// Both binaries take the same lemma flags, logging switches and optional
// TOML configuration. The configuration supplies default flags and stress
// overrides that are registered in the engine before any word is read.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use padezh_core::{Forms, Gender, InflectionError, Lemma};
use padezh_ru::{Engine, StressPattern};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Arguments shared by all padezh tools.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Words to inflect (read from stdin, one per line, when omitted)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Grammatical gender: masculine, feminine, neuter or common
    #[arg(short, long, value_name = "GENDER")]
    pub gender: Option<Gender>,

    /// Treat the words as animate
    #[arg(short, long)]
    pub animate: bool,

    /// Treat the words as surnames (implies animate)
    #[arg(short, long)]
    pub surname: bool,

    /// Treat the words as indeclinable
    #[arg(short, long)]
    pub indeclinable: bool,

    /// The words exist only in the plural ("ножницы")
    #[arg(long)]
    pub plurale_tantum: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Build a lemma for `word` from the command-line flags, falling back to
    /// the configured defaults.
    pub fn lemma(&self, word: &str, defaults: &Defaults) -> Result<Lemma> {
        let lemma = Lemma::builder(word)
            .maybe_gender(self.gender.or(defaults.gender))
            .animate(self.animate || defaults.animate)
            .surname(self.surname)
            .indeclinable(self.indeclinable)
            .plurale_tantum(self.plurale_tantum)
            .build()
            .with_context(|| format!("cannot build lemma for {word:?}"))?;
        Ok(lemma)
    }
}

/// Initialize logging based on verbosity level.
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// CLI configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Lemma flags used when the command line does not give them
    #[serde(default)]
    pub defaults: Defaults,

    /// Stress patterns registered before processing
    #[serde(default)]
    pub overrides: Vec<StressOverride>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub gender: Option<Gender>,
    pub animate: bool,
}

/// One `[[overrides]]` entry.
#[derive(Debug, Deserialize)]
pub struct StressOverride {
    pub text: String,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub animate: bool,
    #[serde(default)]
    pub surname: bool,
    #[serde(default)]
    pub plurale_tantum: bool,
    /// Pattern in the `SEESESE-EEEEEE` notation
    pub stress: String,
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("invalid configuration")
    }
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config =
        Config::from_toml(&source).with_context(|| format!("in {}", path.display()))?;
    log::info!(
        "loaded {} with {} stress override(s)",
        path.display(),
        config.overrides.len()
    );
    Ok(config)
}

/// Create an engine with every configured stress override registered.
pub fn build_engine(config: &Config) -> Result<Engine> {
    let mut engine = Engine::new();
    for entry in &config.overrides {
        let lemma = Lemma::builder(entry.text.as_str())
            .maybe_gender(entry.gender)
            .animate(entry.animate)
            .surname(entry.surname)
            .plurale_tantum(entry.plurale_tantum)
            .build()
            .with_context(|| format!("stress override for {:?}", entry.text))?;
        let pattern: StressPattern = entry
            .stress
            .parse()
            .with_context(|| format!("stress override for {:?}", entry.text))?;
        log::debug!("stress override {:?} = {pattern}", entry.text);
        engine.put_stress(&lemma, pattern);
    }
    Ok(engine)
}

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// The words given on the command line, or stdin lines when there are none.
pub fn read_words(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let stdin = io::stdin();
    let mut words = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("error reading stdin")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Output cell for one inflection result: the forms joined by ", ", or "-"
/// when the form does not exist.
pub fn cell(result: Result<Forms, InflectionError>) -> Result<String> {
    match result {
        Ok(forms) => Ok(forms.to_string()),
        Err(InflectionError::UnsupportedForm(reason)) => {
            log::info!("{reason}");
            Ok("-".to_string())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use padezh_core::Case;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    const SAMPLE: &str = r#"
[defaults]
gender = "masculine"
animate = true

[[overrides]]
text = "кринж"
gender = "masculine"
stress = "SEESESE-EEEEEE"
"#;

    #[test]
    fn parses_sample_config() {
        let config = Config::from_toml(SAMPLE).unwrap();
        assert_eq!(config.defaults.gender, Some(Gender::Masculine));
        assert!(config.defaults.animate);
        assert_eq!(config.overrides.len(), 1);
        assert_eq!(config.overrides[0].text, "кринж");
    }

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.defaults.gender, None);
        assert!(config.overrides.is_empty());
        assert!(load_config(None).unwrap().overrides.is_empty());
    }

    #[test]
    fn overrides_reach_the_engine() {
        let config = Config::from_toml(SAMPLE).unwrap();
        let engine = build_engine(&config).unwrap();
        let cringe = Lemma::new("кринж", Gender::Masculine).unwrap();
        assert_eq!(
            engine.decline(&cringe, Case::Instrumental).unwrap().to_vec(),
            vec!["кринжом"]
        );
    }

    #[test]
    fn malformed_overrides_are_errors() {
        let bad_pattern = Config::from_toml(
            "[[overrides]]\ntext = \"кринж\"\ngender = \"masculine\"\nstress = \"SES\"\n",
        )
        .unwrap();
        assert!(build_engine(&bad_pattern).is_err());

        let no_gender =
            Config::from_toml("[[overrides]]\ntext = \"кринж\"\nstress = \"SEESESE-EEEEEE\"\n")
                .unwrap();
        assert!(build_engine(&no_gender).is_err());

        assert!(Config::from_toml("[defaults]\ngender = \"plural\"\n").is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = TestCli::parse_from(["padezh", "--gender", "feminine", "гора"]);
        let defaults = Defaults {
            gender: Some(Gender::Masculine),
            animate: false,
        };
        let lemma = cli.common.lemma("гора", &defaults).unwrap();
        assert_eq!(lemma.gender(), Some(Gender::Feminine));
        assert_eq!(cli.common.words, vec!["гора"]);

        let cli = TestCli::parse_from(["padezh", "-vv", "стол"]);
        assert_eq!(cli.common.verbose, 2);
        let lemma = cli.common.lemma("стол", &defaults).unwrap();
        assert_eq!(lemma.gender(), Some(Gender::Masculine));
    }

    #[test]
    fn missing_gender_is_reported() {
        let cli = TestCli::parse_from(["padezh", "стол"]);
        assert!(cli.common.lemma("стол", &Defaults::default()).is_err());
    }

    #[test]
    fn cells() {
        assert_eq!(cell(Ok(Forms::two("горой", "горою"))).unwrap(), "горой, горою");
        assert_eq!(
            cell(Err(InflectionError::UnsupportedForm("x".into()))).unwrap(),
            "-"
        );
        assert!(cell(Err(InflectionError::InvalidLemma("x".into()))).is_err());
    }
}
