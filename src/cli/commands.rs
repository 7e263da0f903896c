//! Command implementations for the doclex CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalyzerConfig;
use crate::document::Document;
use crate::document_analyzer::{DocumentAnalyzer, ReportOptions};
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: DoclexArgs) -> Result<()> {
    let analyzer = build_analyzer(&args)?;

    match &args.command {
        Command::Tokens(_) => show_tokens(&analyzer, &args),
        Command::Count(count_args) => count_words(count_args, &analyzer, &args),
        Command::Frequency(frequency_args) => show_frequency(frequency_args, &analyzer, &args),
        Command::Language(_) => show_language(&analyzer, &args),
        Command::Pos(pos_args) => show_pos_tags(pos_args, &analyzer, &args),
        Command::Lemmas(lemmas_args) => show_lemmas(lemmas_args, &analyzer, &args),
        Command::Stems(_) => show_stems(&analyzer, &args),
        Command::Report(report_args) => show_report(report_args, &analyzer, &args),
        Command::Show(_) => show_body(&analyzer, &args),
    }
}

/// Load the configuration, apply command line overrides and build the analyzer.
fn build_analyzer(args: &DoclexArgs) -> Result<DocumentAnalyzer> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AnalyzerConfig::from_json_file(path)?
        }
        None => AnalyzerConfig::default(),
    };

    if let Some(language) = &args.language {
        config.language = Some(language.clone());
    }

    let source = args.command.input().source();
    debug!("Resolved input to {source:?}");

    let document = Document::from_source(source)?;
    DocumentAnalyzer::from_config(document, &config)
}

fn show_tokens(analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    output_result(
        "Tokens",
        &TokensResult {
            tokens: analyzer.tokens()?,
        },
        cli_args,
    )
}

fn count_words(args: &CountArgs, analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    output_result(
        "Word count",
        &CountResult {
            count: analyzer.word_count(args.unique)?,
            unique: args.unique,
        },
        cli_args,
    )
}

fn show_frequency(
    args: &FrequencyArgs,
    analyzer: &DocumentAnalyzer,
    cli_args: &DoclexArgs,
) -> Result<()> {
    let frequency = analyzer.word_frequency()?;
    let frequencies = match args.top {
        Some(n) => frequency.top(n).to_vec(),
        None => frequency.top(frequency.len()).to_vec(),
    };

    output_result(
        "Word frequencies",
        &FrequencyResult {
            total: frequency.total(),
            distinct: frequency.len(),
            frequencies,
        },
        cli_args,
    )
}

fn show_language(analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    let code = analyzer.language()?;
    let name = code.english_name().map(str::to_string);

    output_result("Language", &LanguageResult { code, name }, cli_args)
}

fn show_pos_tags(args: &PosArgs, analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    let tokens = analyzer.tokens()?;
    let language = analyzer.language()?;

    if args.counts {
        let counts = analyzer.pos_tag_counts_of(&tokens, &language)?;
        output_result("POS tag counts", &PosCountsResult { language, counts }, cli_args)
    } else {
        let tags = analyzer.pos_tags_of(&tokens, &language, args.friendly)?;
        output_result("POS tags", &PosTagsResult { language, tags }, cli_args)
    }
}

fn show_lemmas(args: &LemmasArgs, analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    let tokens = analyzer.tokens()?;
    let language = analyzer.language()?;

    if args.count {
        let lemma_count = analyzer.lemma_count_of(&tokens, &language)?;
        output_result(
            "Lemma count",
            &LemmaCountResult {
                language,
                lemma_count,
            },
            cli_args,
        )
    } else {
        let lemmas = analyzer.lemmatize_of(&tokens, &language)?;
        output_result("Lemmas", &LemmasResult { language, lemmas }, cli_args)
    }
}

fn show_stems(analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    let tokens = analyzer.tokens()?;
    let language = analyzer.language()?;
    let stems = analyzer.stem_of(&tokens, &language)?;

    output_result("Stems", &StemsResult { language, stems }, cli_args)
}

fn show_report(args: &ReportArgs, analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    let report = analyzer.report(&ReportOptions {
        top: args.top,
        annotate: args.annotate,
    })?;

    output_result("Analysis report", &report, cli_args)
}

fn show_body(analyzer: &DocumentAnalyzer, cli_args: &DoclexArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            println!("{}", analyzer.body());
            Ok(())
        }
        OutputFormat::Json => output_result(
            "Document body",
            &BodyResult {
                body: analyzer.body().to_string(),
            },
            cli_args,
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::DoclexError;

    fn parse(argv: &[&str]) -> DoclexArgs {
        DoclexArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_language_override() {
        let args = parse(&["doclex", "--language", "swe", "stems", "hundarna"]);
        let analyzer = build_analyzer(&args).unwrap();
        assert_eq!(analyzer.language().unwrap().as_str(), "swe");
    }

    #[test]
    fn test_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"language": "deu"}}"#).unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let args = parse(&["doclex", "--config", &config_path, "language", "Hunde"]);
        let analyzer = build_analyzer(&args).unwrap();
        assert_eq!(analyzer.language().unwrap().as_str(), "deu");
    }

    #[test]
    fn test_unsupported_file_fails() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        let path = file.path().to_string_lossy().to_string();

        let args = parse(&["doclex", "count", &path]);
        assert!(matches!(
            execute_command(args),
            Err(DoclexError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_commands_succeed() {
        for command in ["tokens", "count", "frequency", "stems", "show"] {
            let args = parse(&[
                "doclex",
                "-q",
                "--language",
                "eng",
                command,
                "The cats are running. The dog ran.",
            ]);
            assert!(execute_command(args).is_ok(), "{command} failed");
        }

        let args = parse(&["doclex", "-q", "-l", "eng", "pos", "the dog ran", "--counts"]);
        assert!(execute_command(args).is_ok());

        let args = parse(&["doclex", "-q", "-f", "json", "-l", "eng", "report", "the dog ran"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_stem_language_error_propagates() {
        let args = parse(&["doclex", "-l", "fra", "stems", "les chats"]);
        assert!(matches!(
            execute_command(args),
            Err(DoclexError::UnsupportedStemLanguage(_))
        ));
    }
}
