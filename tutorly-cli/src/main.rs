// Command-line interface for tutorly
//
// This binary turns the text of a class (a title, a list of topics, and notes or a transcript)
// into study guides. The heavy lifting lives in the tutorly-guide crate; this crate only reads
// inputs, loads configuration and decides where artifacts go.
//
// Usage:
//  tutorly generate --to <format> [--title T] [--audio-title A] [--topics FILE] [--notes FILE]
//                   [--author TAG] [--font NAME] [-o DIR]    - Generate a study guide
//  tutorly preview [--title T] [--topics FILE] [--notes FILE] - Print the preview pane
//  tutorly --list-formats                                     - List available formats
//
// Inputs:
//
// FILE arguments accept "-" to read from stdin (only one of --topics/--notes may do so).
// Missing topics or notes are treated as empty; generation fails when both are blank.
//
// Output:
//
// Text formats (latex, docdef) go to stdout unless -o DIR is given, in which case they are
// written to DIR under a filename derived from the audio title. Printable formats (pdf) always
// need -o DIR.

mod logging;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::io::{self, Read, Write};
use tutorly_config::{Loader, TutorlyConfig};
use tutorly_guide::formats::{ChromeLayoutEngine, DocDefFormat, LatexFormat, PdfFormat};
use tutorly_guide::preview::{GuidePreview, PreviewOptions};
use tutorly_guide::{
    default_title, publish, ExportAction, ExportJob, ExportTrigger, FileExporter, FormatRegistry,
    GuideError, PrintableArtifact, StudyGuideRequest,
};

/// Formats registered by [`registry_from_config`]; build.rs keeps a copy for completions.
const AVAILABLE_FORMATS: &[&str] = &["docdef", "latex", "pdf"];

fn input_args() -> [Arg; 4] {
    [
        Arg::new("title")
            .long("title")
            .value_name("TITLE")
            .help("Guide title (defaults to 'Class Notes - <audio title>')"),
        Arg::new("audio-title")
            .long("audio-title")
            .value_name("NAME")
            .help("Title of the recording, used for the default title and filenames"),
        Arg::new("topics")
            .long("topics")
            .value_name("FILE")
            .help("File with one topic per line ('-' for stdin)")
            .value_hint(ValueHint::FilePath),
        Arg::new("notes")
            .long("notes")
            .value_name("FILE")
            .help("File with notes or transcript text ('-' for stdin)")
            .value_hint(ValueHint::FilePath),
    ]
}

fn build_cli() -> Command {
    Command::new("tutorly")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate study guides from class notes and transcripts")
        .long_about(
            "tutorly turns a title, a list of topics and free-form notes into a study guide.\n\n\
            Commands:\n  \
            - generate: Render the guide as LaTeX, PDF or a JSON document definition\n  \
            - preview:  Print a short summary of what the guide will contain\n\n\
            Examples:\n  \
            tutorly generate --to latex --topics topics.txt --notes notes.txt\n  \
            tutorly generate --to pdf --notes notes.txt -o out/\n  \
            cat notes.txt | tutorly preview --notes -",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tutorly.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a study guide")
                .long_about(
                    "Generate a study guide in the requested format.\n\n\
                    Formats:\n  \
                    - latex:  LaTeX source (.tex)\n  \
                    - pdf:    Printable document laid out by headless Chrome (.pdf)\n  \
                    - docdef: JSON document definition handed to layout engines (.json)\n\n\
                    Text output goes to stdout by default, or use -o to write into a directory.",
                )
                .args(input_args())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("author")
                        .long("author")
                        .value_name("TAG")
                        .help("Author line for LaTeX output (overrides latex.author)"),
                )
                .arg(
                    Arg::new("font")
                        .long("font")
                        .value_name("NAME")
                        .help("Default font for pdf/docdef output (overrides pdf.default_font)"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Directory to write the artifact into (defaults to stdout)")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the preview of a study guide")
                .args(input_args()),
        )
}

fn main() {
    logging::init();

    let matches = build_cli().get_matches();
    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("generate", sub_matches)) => {
            apply_config_overrides(&mut config, sub_matches);
            let to = sub_matches.get_one::<String>("to").expect("to is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_generate_command(sub_matches, to, output, &config);
        }
        Some(("preview", sub_matches)) => {
            apply_config_overrides(&mut config, sub_matches);
            handle_preview_command(sub_matches, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the generate command
fn handle_generate_command(
    matches: &ArgMatches,
    to: &str,
    output: Option<&str>,
    config: &TutorlyConfig,
) {
    let request = read_request(matches, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let registry = registry_from_config(config);
    let job = ExportJob::new(&request, to).with_audio_title(config.guide.audio_title.clone());

    let result = match output {
        Some(dir) => {
            let mut exporter = FileExporter::new(dir);
            publish(&registry, job, &mut exporter).map(|action| {
                for path in exporter.written() {
                    println!("{}", path.display());
                }
                action
            })
        }
        None => publish(&registry, job, &mut StdoutExporter),
    };

    match result {
        Ok(ExportAction::Downloaded { filename, mime }) => {
            tracing::debug!(%filename, %mime, "guide exported");
        }
        Ok(ExportAction::Opened { filename }) => {
            tracing::debug!(%filename, "printable guide exported");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the preview command
fn handle_preview_command(matches: &ArgMatches, config: &TutorlyConfig) {
    let request = read_request(matches, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    let preview = GuidePreview::from_request(&request, PreviewOptions::from(&config.preview));
    print!("{preview}");
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &TutorlyConfig) {
    let registry = registry_from_config(config);
    println!("Available formats:\n");
    for name in registry.list_formats() {
        match registry.get(&name) {
            Ok(format) if !format.description().is_empty() => {
                println!("  {name:<8} {}", format.description());
            }
            _ => println!("  {name}"),
        }
    }
}

/// Offers text downloads on stdout. Printable artifacts need a real destination.
struct StdoutExporter;

impl ExportTrigger for StdoutExporter {
    fn open(&mut self, _artifact: &PrintableArtifact, _filename: &str) -> Result<(), GuideError> {
        Err(GuideError::Export(
            "Printable formats (like PDF) require an output directory. Use -o <dir>.".to_string(),
        ))
    }

    fn download(&mut self, payload: &str, _filename: &str, _mime: &str) -> Result<(), GuideError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(payload.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| GuideError::Export(format!("Failed to write to stdout: {e}")))
    }
}

fn registry_from_config(config: &TutorlyConfig) -> FormatRegistry {
    let engine = match &config.pdf.chrome_bin {
        Some(path) => ChromeLayoutEngine::with_binary(path),
        None => ChromeLayoutEngine::new(),
    };

    let mut registry = FormatRegistry::new();
    registry.register(LatexFormat::new(config.latex.author.clone()));
    registry.register(DocDefFormat::new(config.pdf.default_font.clone()));
    registry.register(PdfFormat::new(engine).with_default_font(config.pdf.default_font.clone()));
    registry
}

fn read_request(matches: &ArgMatches, config: &TutorlyConfig) -> Result<StudyGuideRequest, String> {
    let topics_path = matches.get_one::<String>("topics").map(|s| s.as_str());
    let notes_path = matches.get_one::<String>("notes").map(|s| s.as_str());
    if topics_path == Some("-") && notes_path == Some("-") {
        return Err("Only one of --topics and --notes can read from stdin".to_string());
    }

    let title = matches
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_else(|| default_title(&config.guide.audio_title));

    Ok(StudyGuideRequest::new(
        title,
        read_input(topics_path)?,
        read_input(notes_path)?,
    ))
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        None => Ok(String::new()),
        Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
            Ok(buffer)
        }
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("Error reading file '{path}': {e}"))
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TutorlyConfig {
    let loader = Loader::new().with_optional_file("tutorly.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Command-line flags win over configuration files.
fn apply_config_overrides(config: &mut TutorlyConfig, matches: &ArgMatches) {
    if let Some(audio_title) = matches.get_one::<String>("audio-title") {
        config.guide.audio_title = audio_title.clone();
    }
    if let Ok(Some(author)) = matches.try_get_one::<String>("author") {
        config.latex.author = author.clone();
    }
    if let Ok(Some(font)) = matches.try_get_one::<String>("font") {
        config.pdf.default_font = font.clone();
    }
}
