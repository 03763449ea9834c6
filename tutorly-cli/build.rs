use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_FORMATS: &[&str] = &["docdef", "latex", "pdf"];

fn input_args() -> [Arg; 4] {
    [
        Arg::new("title").long("title").value_name("TITLE"),
        Arg::new("audio-title").long("audio-title").value_name("NAME"),
        Arg::new("topics")
            .long("topics")
            .value_name("FILE")
            .value_hint(ValueHint::FilePath),
        Arg::new("notes")
            .long("notes")
            .value_name("FILE")
            .value_hint(ValueHint::FilePath),
    ]
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tutorly")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate study guides from class notes and transcripts")
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
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a study guide")
                .args(input_args())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        ))
                        .value_hint(ValueHint::Other),
                )
                .arg(Arg::new("author").long("author").value_name("TAG"))
                .arg(Arg::new("font").long("font").value_name("NAME"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the preview of a study guide")
                .args(input_args()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tutorly", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tutorly", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tutorly", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
