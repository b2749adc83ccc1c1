// padezh-decline: Print the case forms of Russian nouns.
//
// Usage:
//   padezh-decline [OPTIONS] [WORD]...
//
// Prints one block per word: the word itself, then one line per case with
// the Russian case label and the singular form(s). With --plural a third
// column holds the plural form(s), declined from the preferred nominative
// plural. Missing forms are printed as "-".

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use padezh_core::Case;

#[derive(Debug, Parser)]
#[command(name = "padezh-decline", version, about = "Print the case forms of Russian nouns")]
struct Cli {
    #[command(flatten)]
    common: padezh_cli::CommonArgs,

    /// Also print the plural forms
    #[arg(short, long)]
    plural: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    padezh_cli::init_logging(cli.common.verbose, cli.common.quiet);

    let config = padezh_cli::load_config(cli.common.config.as_deref())?;
    let engine = padezh_cli::build_engine(&config)?;
    let words = padezh_cli::read_words(&cli.common.words)?;
    log::info!("declining {} word(s)", words.len());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (i, word) in words.iter().enumerate() {
        let lemma = cli.common.lemma(word, &config.defaults)?;
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", lemma.text())?;

        let plural = if cli.plural {
            match engine.pluralize(&lemma) {
                Ok(forms) => Some(forms.preferred().to_string()),
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            }
        } else {
            None
        };

        for case in Case::ALL {
            let singular = padezh_cli::cell(engine.decline(&lemma, case))?;
            if !cli.plural {
                writeln!(out, "{}\t{singular}", case.label())?;
                continue;
            }
            let plural = match &plural {
                Some(nominative) => {
                    padezh_cli::cell(engine.decline_plural(&lemma, case, nominative))?
                }
                None => "-".to_string(),
            };
            writeln!(out, "{}\t{singular}\t{plural}", case.label())?;
        }
    }

    out.flush()?;
    Ok(())
}
