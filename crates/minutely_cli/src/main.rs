//! Minutely command-line entrypoint.

mod backend;
mod dictate;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use backend::TextFileBackend;
use clap::{Parser, Subcommand, ValueEnum};
use dictate::LineSpeech;
use minutely_client::{MeetingProcessor, Processor};
use minutely_core::export::{self, ArtifactKind};
use minutely_core::layout::monospace_measure;
use minutely_core::{CaptureSession, Config, GeneratedDocument, SpeechCapture};

/// Approximate width of one text column in page units (millimetres at the
/// default 11pt export size).
const COLUMN_WIDTH: f32 = 2.0;

#[derive(Parser)]
#[command(
    name = "minutely",
    about = "Turn meeting notes into a summary, minutes, and action items",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Summary,
    Minutes,
    Actions,
}

impl From<KindArg> for ArtifactKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Summary => Self::Summary,
            KindArg::Minutes => Self::Minutes,
            KindArg::Actions => Self::Actions,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Process notes into the three artifacts and save them as JSON.
    Process {
        /// Notes file; stdin is read when omitted.
        file: Option<PathBuf>,
        /// Treat stdin lines as live dictation merged into the notes.
        #[arg(long)]
        dictate: bool,
        /// Record an uploaded audio file marker in the notes.
        #[arg(long = "upload", value_name = "NAME")]
        uploads: Vec<String>,
        /// Where to write the artifacts JSON.
        #[arg(short, long, default_value = "minutes.json")]
        out: PathBuf,
    },
    /// Render one artifact into a paginated document file.
    Export {
        /// Which artifact to render.
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Artifacts JSON produced by `process`.
        #[arg(short, long)]
        input: PathBuf,
        /// Output document path.
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Print one artifact as plain text (clipboard-friendly).
    Copy {
        /// Which artifact to print.
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Artifacts JSON produced by `process`.
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Process {
            file,
            dictate,
            uploads,
            out,
        } => process(&config, file.as_deref(), dictate, &uploads, &out).await,
        Commands::Export { kind, input, out } => export_artifact(&config, kind, &input, &out),
        Commands::Copy { kind, input } => {
            let document = read_document(&input)?;
            print!("{}", export::plain_text(kind.into(), &document));
            Ok(())
        }
    }
}

/// Gather notes through the capture session, process them, and persist the
/// generated artifacts.
async fn process(
    config: &Config,
    file: Option<&Path>,
    dictate: bool,
    uploads: &[String],
    out: &Path,
) -> anyhow::Result<()> {
    let mut session = CaptureSession::new();

    if let Some(path) = file {
        let notes = std::fs::read_to_string(path)
            .with_context(|| format!("reading notes from {}", path.display()))?;
        session.edit(&notes);
    }
    for name in uploads {
        session.append_file_marker(name);
    }
    if dictate {
        let stdin = std::io::stdin();
        let mut speech = LineSpeech::new(stdin.lock());
        speech.start();
        session.start_listening();
        session.drain_speech(&mut speech);
        speech.stop();
        session.stop_listening();
    } else if file.is_none() {
        let mut notes = String::new();
        std::io::stdin()
            .read_to_string(&mut notes)
            .context("reading notes from stdin")?;
        session.edit(&notes);
    }

    if session.buffer().trim().is_empty() {
        anyhow::bail!("please enter meeting notes or record audio");
    }

    // A failed call leaves the session buffer untouched; nothing was
    // consumed, so the same notes can be resubmitted.
    let processor = Processor::from_config(config);
    let document = processor
        .process(session.buffer())
        .await
        .context("processing meeting notes")?;

    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(
        actions = document.action_items.len(),
        path = %out.display(),
        "artifacts saved"
    );

    for kind in [
        ArtifactKind::Summary,
        ArtifactKind::Minutes,
        ArtifactKind::Actions,
    ] {
        println!("=== {} ===", kind.title());
        println!("{}\n", export::plain_text(kind, &document));
    }
    println!("Saved artifacts to {}", out.display());
    Ok(())
}

fn export_artifact(
    config: &Config,
    kind: KindArg,
    input: &Path,
    out: &Path,
) -> anyhow::Result<()> {
    let document = read_document(input)?;
    let paged = export::render(
        kind.into(),
        &document,
        &config.geometry,
        monospace_measure(COLUMN_WIDTH),
    );
    let mut backend = TextFileBackend::default();
    export::export_document(&paged, &config.geometry, &mut backend, out)
        .context("export failed; the document was not written, please retry")?;
    println!(
        "Exported \"{}\" ({} pages) to {}",
        paged.title,
        paged.pages.len(),
        out.display()
    );
    Ok(())
}

fn read_document(path: &Path) -> anyhow::Result<GeneratedDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading artifacts from {}", path.display()))?;
    let document = serde_json::from_str(&raw)
        .with_context(|| format!("parsing artifacts from {}", path.display()))?;
    Ok(document)
}
