use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use editorjs_config::Config;
use editorjs_engine::{ImageUploader, ParseError, UploadMode, UploadedFile};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser)]
#[command(
    name = "editorjs-render",
    version,
    about = "Render EditorJS documents to HTML and store editor image uploads"
)]
struct Cli {
    /// Config file to use instead of ~/.config/editorjs-render/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a saved document to HTML
    Render {
        /// Document JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Validate blocks against these rules before rendering
        #[arg(long, value_name = "RULES")]
        rules: Option<PathBuf>,
        /// Fail on blocks with unsupported types instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Write the HTML here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Check a saved document against validation rules
    Validate {
        /// Document JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
        #[arg(long, value_name = "RULES")]
        rules: Option<PathBuf>,
    },
    /// Store an image in the configured upload directory
    Upload {
        /// Local image file
        #[arg(required_unless_present = "url", conflicts_with = "url")]
        file: Option<PathBuf>,
        /// Remote image to download instead of a local file
        #[arg(long)]
        url: Option<String>,
    },
}

fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            input,
            rules,
            strict,
            output,
        } => {
            if rules.is_some() {
                config.rules_path = rules;
            }
            config.strict |= strict;
            render(&config, &input, output.as_deref())
        }
        Command::Validate { input, rules } => {
            if rules.is_some() {
                config.rules_path = rules;
            }
            validate(&config, &input)
        }
        Command::Upload { file, url } => upload(&config, file.as_deref(), url.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found at {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!("No config file at {}", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read document from stdin")?;
        return Ok(content);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn render(config: &Config, input: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let converter = config.converter()?;
    let html = converter.convert(read_input(input)?)?;

    match output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes of HTML to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn validate(config: &Config, input: &Path) -> Result<ExitCode> {
    let converter = config.converter()?;
    if converter.schema().is_none() {
        bail!(
            "No validation rules given: pass --rules or set rules_path in {}",
            Config::config_path().display()
        );
    }

    match converter.blocks(read_input(input)?) {
        Ok(document) => {
            println!("Document is valid: {} blocks", document.len());
            Ok(ExitCode::SUCCESS)
        }
        Err(ParseError::Validation {
            index,
            field,
            reason,
        }) => {
            eprintln!("Block {index}, field `{field}`: {reason}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn upload(config: &Config, file: Option<&Path>, url: Option<&str>) -> Result<ExitCode> {
    let mut settings = config
        .upload_settings()
        .context("No [upload] section in the config file")?;
    if url.is_some() {
        settings.mode = UploadMode::Url;
    }
    let uploader = ImageUploader::new(settings)?;

    let uploaded = match (file, url) {
        (_, Some(url)) => match uploader.fetch_remote(url) {
            Ok(file) => Some(file),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        },
        (Some(path), None) => Some(
            UploadedFile::from_path(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let response = uploader.store(uploaded);
    println!("{}", serde_json::to_string(&response)?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
