// padezh-pluralize: Print the nominative plural of Russian nouns.
//
// Usage:
//   padezh-pluralize [OPTIONS] [WORD]...
//
// Prints "word<TAB>plural" per word; a second plural form, when the word
// has one, follows the preferred form after ", ".

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "padezh-pluralize", version, about = "Print the nominative plural of Russian nouns")]
struct Cli {
    #[command(flatten)]
    common: padezh_cli::CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    padezh_cli::init_logging(cli.common.verbose, cli.common.quiet);

    let config = padezh_cli::load_config(cli.common.config.as_deref())?;
    let engine = padezh_cli::build_engine(&config)?;
    let words = padezh_cli::read_words(&cli.common.words)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for word in &words {
        let lemma = cli.common.lemma(word, &config.defaults)?;
        let plural = padezh_cli::cell(engine.pluralize(&lemma))?;
        writeln!(out, "{}\t{plural}", lemma.text())?;
    }

    out.flush()?;
    Ok(())
}
