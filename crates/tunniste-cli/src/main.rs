mod clipboard;
mod history;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use tunniste_core::{ConfigError, GeneratedArtifact, Validation};
use tunniste_generate::business_id;
use tunniste_generate::hetu::{self, Gender, HetuFormat, HetuOptions};
use tunniste_generate::iban::{self, IbanFormat, IbanOptions};
use tunniste_generate::password::{
    CharacterPasswordOptions, WordPasswordOptions, WordlistSource, character_password,
    word_password,
};
use tunniste_generate::template::{TemplateOptions, render_template};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "tunniste", version, about = "Finnish test identifier and secret generator")]
struct Cli {
    /// Render results as JSON including the meta fields.
    #[arg(long, global = true)]
    json: bool,
    /// Copy the generated value to the clipboard (best effort).
    #[arg(long, global = true)]
    copy: bool,
    /// Append generated values to a JSON-lines history file (best effort).
    #[arg(long, global = true, value_name = "PATH")]
    history: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an identifier or secret.
    #[command(subcommand)]
    Generate(GenerateCommand),
    /// Validate an identifier.
    #[command(subcommand)]
    Validate(ValidateCommand),
}

#[derive(Subcommand, Debug)]
enum GenerateCommand {
    /// Random string from a charset.
    String(StringArgs),
    /// Character-based password.
    Password(PasswordArgs),
    /// Word-based passphrase.
    Words(WordsArgs),
    /// Pattern-driven random string.
    Template(TemplateArgs),
    /// Finnish personal identity code.
    Hetu(HetuArgs),
    /// Finnish IBAN.
    Iban(IbanArgs),
    /// Finnish business ID.
    BusinessId,
}

#[derive(Subcommand, Debug)]
enum ValidateCommand {
    /// Validate a personal identity code.
    Hetu { value: String },
    /// Validate an IBAN.
    Iban { value: String },
    /// Validate a business ID.
    BusinessId { value: String },
}

#[derive(Args, Debug)]
struct StringArgs {
    /// Length of the string to generate.
    #[arg(long, default_value_t = 16)]
    length: usize,
    /// Preset name or literal alphabet.
    #[arg(long, default_value = "alnum")]
    charset: String,
}

#[derive(Args, Debug)]
struct PasswordArgs {
    #[arg(long, default_value_t = 20)]
    length: usize,
    /// Preset name or literal alphabet.
    #[arg(long, default_value = "ascii")]
    preset: String,
    /// Characters added to the preset.
    #[arg(long, default_value = "")]
    include: String,
    /// Characters removed from the preset.
    #[arg(long, default_value = "")]
    exclude: String,
}

#[derive(Args, Debug)]
struct WordsArgs {
    /// Number of words to draw.
    #[arg(long, default_value_t = 6)]
    words: usize,
    #[arg(long, default_value = "-")]
    separator: String,
    /// Named wordlist to draw from.
    #[arg(long, default_value = "eff")]
    wordlist: String,
}

#[derive(Args, Debug)]
struct TemplateArgs {
    /// Pattern: `X` default pool, `x` lower, `#` digit, `*` alnum,
    /// `{set}` custom charset, `\c` literal.
    pattern: String,
    /// Pool backing `X` placeholders.
    #[arg(long)]
    pool: Option<String>,
}

#[derive(Args, Debug)]
struct HetuArgs {
    /// Explicit date of birth (YYYY-MM-DD); sampled from the age range
    /// when absent.
    #[arg(long)]
    born: Option<chrono::NaiveDate>,
    /// Age range as `min-max`, in years.
    #[arg(long, default_value = "18-65")]
    age_range: String,
    #[arg(long, default_value = "any")]
    gender: Gender,
    /// `short` or `long`.
    #[arg(long, default_value = "short")]
    format: HetuFormat,
}

#[derive(Args, Debug)]
struct IbanArgs {
    #[arg(long, default_value = "FI")]
    country: String,
    /// 4-digit bank code; random when absent.
    #[arg(long)]
    bank: Option<String>,
    /// `compact` or `spaced`.
    #[arg(long, default_value = "compact")]
    format: IbanFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Command::Generate(ref command) => {
            let (kind, artifact) = generate(command)?;
            if cli.copy {
                clipboard::copy_to_clipboard(&artifact.value);
            }
            if let Some(path) = &cli.history {
                history::record(path, kind, &artifact.value, &artifact.meta);
            }
            println!("{}", output::render_artifact(&artifact, cli.json));
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(ref command) => {
            let result = validate(command);
            println!("{}", output::render_validation(&result, cli.json));
            if result.valid {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn generate(command: &GenerateCommand) -> Result<(&'static str, GeneratedArtifact), CliError> {
    match command {
        GenerateCommand::String(args) => {
            let options = CharacterPasswordOptions {
                length: args.length,
                preset: args.charset.clone(),
                ..CharacterPasswordOptions::default()
            };
            Ok(("string", character_password(&options)?))
        }
        GenerateCommand::Password(args) => {
            let options = CharacterPasswordOptions {
                length: args.length,
                preset: args.preset.clone(),
                include: args.include.clone(),
                exclude: args.exclude.clone(),
            };
            Ok(("password", character_password(&options)?))
        }
        GenerateCommand::Words(args) => {
            let options = WordPasswordOptions {
                words: args.words,
                wordlist: WordlistSource::Named(args.wordlist.clone()),
                separator: args.separator.clone(),
            };
            Ok(("words", word_password(&options)?))
        }
        GenerateCommand::Template(args) => {
            let options = TemplateOptions {
                pool: args.pool.clone(),
            };
            let value = render_template(&args.pattern, &options)?;
            let mut meta = serde_json::Map::new();
            meta.insert("pattern".to_string(), serde_json::json!(args.pattern));
            Ok(("template", GeneratedArtifact::new(value, meta)))
        }
        GenerateCommand::Hetu(args) => {
            let options = HetuOptions {
                born: args.born,
                age_range: parse_age_range(&args.age_range)?,
                gender: args.gender,
                format: args.format,
            };
            Ok(("hetu", hetu::generate(&options)?))
        }
        GenerateCommand::Iban(args) => {
            let options = IbanOptions {
                country: args.country.clone(),
                bank: args.bank.clone(),
                format: args.format,
            };
            Ok(("iban", iban::generate(&options)?))
        }
        GenerateCommand::BusinessId => Ok((
            "business-id",
            business_id::generate(&business_id::BusinessIdOptions::default())?,
        )),
    }
}

fn validate(command: &ValidateCommand) -> Validation {
    match command {
        ValidateCommand::Hetu { value } => hetu::validate(value),
        ValidateCommand::Iban { value } => iban::validate(value),
        ValidateCommand::BusinessId { value } => business_id::validate(value),
    }
}

fn parse_age_range(range: &str) -> Result<(u8, u8), CliError> {
    let Some((min, max)) = range.split_once('-') else {
        return Err(CliError::InvalidConfig(format!(
            "age range must look like 18-65, got {range}"
        )));
    };
    let min = min
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidConfig(format!("bad minimum age in {range}")))?;
    let max = max
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidConfig(format!("bad maximum age in {range}")))?;
    Ok((min, max))
}
