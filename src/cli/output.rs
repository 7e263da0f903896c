//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{DoclexArgs, OutputFormat};
use crate::error::Result;
use crate::language::LanguageCode;
use crate::stats::PosTagMap;

/// Result structure for the tokens command.
#[derive(Debug, Serialize)]
pub struct TokensResult {
    pub tokens: Vec<String>,
}

/// Result structure for word counting.
#[derive(Debug, Serialize)]
pub struct CountResult {
    pub count: usize,
    pub unique: bool,
}

/// Result structure for word frequencies.
#[derive(Debug, Serialize)]
pub struct FrequencyResult {
    pub total: usize,
    pub distinct: usize,
    pub frequencies: Vec<(String, usize)>,
}

/// Result structure for language identification.
#[derive(Debug, Serialize)]
pub struct LanguageResult {
    pub code: LanguageCode,
    pub name: Option<String>,
}

/// Result structure for POS tagging.
#[derive(Debug, Serialize)]
pub struct PosTagsResult {
    pub language: LanguageCode,
    pub tags: PosTagMap,
}

/// Result structure for POS tag counts.
#[derive(Debug, Serialize)]
pub struct PosCountsResult {
    pub language: LanguageCode,
    pub counts: Vec<(String, usize)>,
}

/// Result structure for lemmatization.
#[derive(Debug, Serialize)]
pub struct LemmasResult {
    pub language: LanguageCode,
    pub lemmas: Vec<String>,
}

/// Result structure for the distinct lemma count.
#[derive(Debug, Serialize)]
pub struct LemmaCountResult {
    pub language: LanguageCode,
    pub lemma_count: usize,
}

/// Result structure for stemming.
#[derive(Debug, Serialize)]
pub struct StemsResult {
    pub language: LanguageCode,
    pub stems: Vec<String>,
}

/// Result structure for the show command.
#[derive(Debug, Serialize)]
pub struct BodyResult {
    pub body: String,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &DoclexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            print!("{}", format_human(&serde_json::to_value(result)?));
        }
        OutputFormat::Json => println!("{}", format_json(result, args.pretty)?),
    }
    Ok(())
}

/// Render a result as JSON.
pub fn format_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Render a result as `key: value` lines.
///
/// Maps and lists of `(key, count)` pairs are printed one entry per indented
/// line, keeping their order.
pub fn format_human(value: &Value) -> String {
    let mut out = String::new();

    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    Value::Object(entries) => {
                        out.push_str(&format!("{key}:\n"));
                        for (k, v) in entries {
                            out.push_str(&format!("  {k}: {}\n", format_value(v)));
                        }
                    }
                    Value::Array(items) if !items.is_empty() && items.iter().all(is_pair) => {
                        out.push_str(&format!("{key}:\n"));
                        for item in items {
                            if let Some([k, v]) = item.as_array().map(Vec::as_slice) {
                                out.push_str(&format!("  {}: {}\n", format_value(k), format_value(v)));
                            }
                        }
                    }
                    _ => out.push_str(&format!("{key}: {}\n", format_value(val))),
                }
            }
        }
        _ => out.push_str(&format!("{}\n", format_value(value))),
    }

    out
}

fn is_pair(value: &Value) -> bool {
    matches!(value.as_array(), Some(items) if items.len() == 2)
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        Value::Object(_) => "[object]".to_string(),
        Value::Null => "-".to_string(),
    }
}
