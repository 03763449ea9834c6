//! Export tests for LaTeX output (request → .tex source)

use crate::common;
use insta::assert_snapshot;
use tutorly_guide::formats::latex::{render_latex, suggested_filename, DEFAULT_AUTHOR};
use tutorly_guide::{build, generate_latex, GuideError, StudyGuideRequest};

#[test]
fn test_full_document() {
    let latex = generate_latex(&common::kitchen_sink(), DEFAULT_AUTHOR).unwrap();
    assert_snapshot!(latex, @r#"
\documentclass[12pt,a4paper]{article}
\usepackage[utf8]{inputenc}
\usepackage{amsmath}
\usepackage{amsfonts}
\usepackage{amssymb}
\usepackage{graphicx}
\usepackage[left=2cm,right=2cm,top=2cm,bottom=2cm]{geometry}
\usepackage{parskip}

\title{Week 1}
\author{Generated by Tutorly}
\date{\today}

\begin{document}
\maketitle
\thispagestyle{empty}
\clearpage

\section*{Main Topics}
\begin{itemize}
  \item Topic A
  \item Topic B
\end{itemize}

Intro \& overview.

Details at 100\%.



\vfill
\hfill \textit{Source: automatic class transcription.}
\end{document}
"#);
}

#[test]
fn test_title_escaping() {
    let request = StudyGuideRequest::new("100% & pass", "A", "");
    let latex = generate_latex(&request, DEFAULT_AUTHOR).unwrap();
    assert!(latex.contains("\\title{100\\% \\& pass}"));
}

#[test]
fn test_topics_only_has_no_paragraphs() {
    let latex = generate_latex(&common::topics_only(), DEFAULT_AUTHOR).unwrap();
    let body = latex.split("\\clearpage\n\n").nth(1).unwrap();
    assert!(body.starts_with("\\section*{Main Topics}\n\\begin{itemize}\n"));
    assert!(body.contains("\\end{itemize}\n\n\n\n\\vfill\n"));
}

#[test]
fn test_notes_only_uses_transcript_caption() {
    let latex = generate_latex(&common::notes_only(), DEFAULT_AUTHOR).unwrap();
    assert!(latex.contains("\\section*{Full Transcript}\nParagraph one.\n\nParagraph two.\n\n"));
    assert!(!latex.contains("\\begin{itemize}"));
}

#[test]
fn test_blank_request_is_rejected() {
    assert_eq!(
        generate_latex(&common::blank(), DEFAULT_AUTHOR),
        Err(GuideError::NoContent)
    );
}

#[test]
fn test_builder_output_without_guard_is_still_valid() {
    let latex = render_latex(&build(&common::blank()), DEFAULT_AUTHOR);
    assert!(latex.contains("\\section*{Full Transcript}\n\n\n\\vfill"));
    assert!(latex.ends_with("\\end{document}\n"));
}

#[test]
fn test_unescaped_characters_pass_through() {
    let request = StudyGuideRequest::new("x_1", "", "Cost is $5 {approx}");
    let latex = generate_latex(&request, DEFAULT_AUTHOR).unwrap();
    assert!(latex.contains("\\title{x_1}"));
    assert!(latex.contains("Cost is $5 {approx}\n\n"));
}

#[test]
fn test_rendering_is_deterministic() {
    let first = generate_latex(&common::kitchen_sink(), "A").unwrap();
    let second = generate_latex(&common::kitchen_sink(), "A").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_filename_for_audio_title() {
    assert_eq!(
        suggested_filename("Optimización Lineal"),
        "Optimización_Lineal_apuntes.tex"
    );
}
