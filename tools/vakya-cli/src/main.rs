mod render;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use vakya_annotator::RuleBasedAnnotator;
use vakya_checker::{validate_sentence, CheckError, SentenceChecker};
use vakya_lexicon::{DataFiles, Lexicon};

#[derive(Parser)]
#[command(author, version, about = "Spelling and subject-verb agreement checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the JSON tables into a binary lexicon bundle
    Compile {
        #[command(flatten)]
        tables: TableArgs,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Check one sentence
    Check {
        #[command(flatten)]
        tables: TableArgs,

        /// Precompiled bundle; takes precedence over the JSON tables
        #[arg(short, long, value_name = "FILE", env = "VAKYA_BUNDLE")]
        bundle: Option<PathBuf>,

        /// Print the report as JSON instead of result cards
        #[arg(long)]
        json: bool,

        /// Words of the sentence (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        sentence: Vec<String>,
    },
}

#[derive(Args)]
struct TableArgs {
    /// Directory holding the dictionary, verb and rule tables
    #[arg(short, long, value_name = "DIR", env = "VAKYA_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    #[arg(long, value_name = "FILE", default_value = "dictionary.json")]
    dictionary: PathBuf,

    #[arg(long, value_name = "FILE", default_value = "verbs.json")]
    verbs: PathBuf,

    #[arg(long, value_name = "FILE", default_value = "rules.json")]
    rules: PathBuf,
}

impl TableArgs {
    fn files(&self) -> DataFiles {
        DataFiles {
            dictionary: self.dictionary.clone(),
            verbs: self.verbs.clone(),
            rules: self.rules.clone(),
        }
    }

    fn load(&self) -> anyhow::Result<Lexicon> {
        info!("Reading tables from {:?}", self.data_dir);
        Lexicon::load_dir(&self.data_dir, &self.files()).context(render::DATA_UNAVAILABLE)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vakya=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile { tables, output } => compile(&tables, &output),
        Command::Check {
            tables,
            bundle,
            json,
            sentence,
        } => {
            let output = check(&tables, bundle.as_deref(), json, &sentence.join(" "))?;
            print!("{output}");
            Ok(())
        }
    }
}

fn compile(tables: &TableArgs, output: &Path) -> anyhow::Result<()> {
    let lexicon = tables.load()?;

    info!(
        "Compiling {} words, {} verbs, {} rules",
        lexicon.words().len(),
        lexicon.verbs().len(),
        lexicon.rules().len()
    );
    let bytes = lexicon.to_bundle_bytes()?;

    fs::write(output, &bytes).with_context(|| format!("failed to write {}", output.display()))?;

    info!("Bundle written to {:?} ({} bytes)", output, bytes.len());
    Ok(())
}

/// Loads the lexicon, checks `input` and returns the rendered report.
fn check(
    tables: &TableArgs,
    bundle: Option<&Path>,
    json: bool,
    input: &str,
) -> anyhow::Result<String> {
    let sentence = match validate_sentence(input) {
        Ok(sentence) => sentence,
        Err(err @ CheckError::EmptySentence) => {
            anyhow::bail!("{} ({err})", render::EMPTY_SENTENCE_PROMPT)
        }
    };

    // No checking without a fully loaded lexicon
    let lexicon = match bundle {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))
                .context(render::DATA_UNAVAILABLE)?;
            Lexicon::from_bundle(&bytes).context(render::DATA_UNAVAILABLE)?
        }
        None => tables.load()?,
    };

    let checker = SentenceChecker::new(&lexicon, RuleBasedAnnotator::new(lexicon.verbs()));
    let report = checker.check(sentence);

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
    } else {
        Ok(render::cards(&report))
    }
}
