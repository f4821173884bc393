//! Minimal CLI: load → select → (coerce | kind)
use std::path::PathBuf;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, Args, ValueEnum};
use colored::Colorize;
use json_coerce::Value;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// coerce values in JSON/NDJSON documents into numbers, leniently
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// coerce each selected value and print the number (or the error)
    Coerce(CoerceOut),
    /// print the runtime type name of each selected value
    Kind(KindOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/price)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ filter selecting values from each document (applied after --json-pointer)
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    F64,
    Int,
    I64,
    U64,
}

#[derive(clap::Parser, Debug)]
struct CoerceOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// numeric type to coerce into
    #[arg(long, value_enum)]
    to: Target,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct KindOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Feed every selected value to `apply`, labelled with its source path.
    fn load_process(&self, mut apply: impl FnMut(&str, Value)) -> Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        tracing::debug!(inputs = source_paths.len(), "resolved input paths");
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read source file ({source_path_str})"))?;
            for document in self.parse_documents(&source, &source_path_str)? {
                for selected in self.select(document, &source_path_str)? {
                    apply(&source_path_str, Value::from(selected));
                }
            }
        }
        Ok(())
    }

    fn parse_documents(&self, source: &str, source_path_str: &str) -> Result<Vec<serde_json::Value>> {
        if !self.ndjson {
            let document = serde_json::from_str::<serde_json::Value>(source)
                .with_context(|| format!("failed to parse JSON source file ({source_path_str})"))?;
            return Ok(vec![document]);
        }
        json_coerce::decode::ndjson_from_reader::<serde_json::Value, _>(source.as_bytes())
            .with_context(|| format!("failed to parse NDJSON source file ({source_path_str})"))
    }

    fn select(&self, document: serde_json::Value, source_path_str: &str) -> Result<Vec<serde_json::Value>> {
        let document = match self.json_pointer.as_deref() {
            None => document,
            Some(pointer) => match document.pointer(pointer) {
                Some(node) => node.clone(),
                None => bail!("JSON pointer {pointer} matched nothing ({source_path_str})"),
            },
        };
        match self.jq_expr.as_deref() {
            None => Ok(vec![document]),
            Some(jq_expr) => crate::jq_exec::select(jq_expr, &document).with_context(|| {
                format!("failed to apply jq expression to source file ({source_path_str})")
            }),
        }
    }
}

impl Target {
    fn apply(self, value: &Value) -> Result<String, json_coerce::CoerceError> {
        Ok(match self {
            Target::F64 => value.as_f64()?.to_string(),
            Target::Int => value.as_int()?.to_string(),
            Target::I64 => value.as_i64()?.to_string(),
            Target::U64 => value.as_u64()?.to_string(),
        })
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    /// Returns `false` when at least one value failed to coerce.
    pub fn run(&self) -> Result<bool> {
        match &self.cmd {
            Command::Coerce(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(true)
                }
                let mut all_ok = true;
                target.input_settings.load_process(|source, value| {
                    match target.to.apply(&value) {
                        Ok(number) => println!("{number}"),
                        Err(error) => {
                            all_ok = false;
                            println!("{}", error_line(&error, source, &value));
                        }
                    }
                })?;
                Ok(all_ok)
            }
            Command::Kind(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(true)
                }
                target.input_settings.load_process(|_, value| {
                    println!("{}", value.type_name());
                })?;
                Ok(true)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn error_line(error: &json_coerce::CoerceError, source: &str, value: &Value) -> String {
    format!("{} {error} ({source}: {})", "error:".red().bold(), value.type_name())
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{' ))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
