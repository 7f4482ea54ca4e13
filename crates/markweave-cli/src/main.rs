use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use markweave_config::Config;
use markweave_engine::{Markdown, MessageLevel, RootParser, format_tree};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "markweave")]
#[command(about = "Parse, check and highlight markweave documents")]
struct Cli {
    /// Config file to use instead of ~/.config/markweave/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse documents and print their trees
    Parse {
        /// Files to parse; defaults to the configured input patterns
        files: Vec<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
    },
    /// Report invalid elements, failing when any reaches the failure level
    Check {
        files: Vec<PathBuf>,

        /// Overrides `parsing.failure_level` from the config
        #[arg(long)]
        failure_level: Option<MessageLevel>,
    },
    /// Highlight source code with a registered highlighter
    Highlight {
        #[arg(long, short)]
        language: String,

        /// Reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?;
    let parser = RootParser::new(&Markdown, &config.bundles()?);
    log::debug!("parser ready: {parser:?}");

    match cli.command {
        Command::Parse { files, format } => {
            for file in input_files(&config, files)? {
                let root = parse_file(&parser, &file)?;
                match format {
                    OutputFormat::Tree => {
                        println!("{}:", file.display());
                        print!("{}", format_tree(&root));
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&root)?),
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            files,
            failure_level,
        } => {
            let level = failure_level.unwrap_or(config.parsing.failure_level);
            let mut failed = 0;
            for file in input_files(&config, files)? {
                let root = parse_file(&parser, &file)?;
                for invalid in root.invalid_elements() {
                    println!(
                        "{}: {}: {} in {:?}",
                        file.display(),
                        invalid.message.level,
                        invalid.message.content,
                        invalid.source
                    );
                }
                if let Err(e) = root.check(level) {
                    log::error!("{}: {e}", file.display());
                    failed += 1;
                }
            }
            if failed > 0 {
                println!("{failed} document(s) failed at level {level}");
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Highlight { language, file } => {
            let code = match file {
                Some(file) => read_file(&file)?,
                None => {
                    let mut code = String::new();
                    std::io::stdin()
                        .read_to_string(&mut code)
                        .context("Failed to read stdin")?;
                    code
                }
            };
            for span in parser.highlight(&language, &code)? {
                let category = span.category.map_or("text", |c| c.as_str());
                println!("{category}\t{:?}", span.content);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    log::debug!("Config path: {}", config_path.display());
    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if path.is_some() => bail!("Config file not found: {}", config_path.display()),
        None => Ok(Config::default()),
    }
}

fn input_files(config: &Config, files: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    if !files.is_empty() {
        return Ok(files);
    }
    let files = config.input_files()?;
    if files.is_empty() {
        bail!("No input files given and no configured input pattern matched any file");
    }
    Ok(files)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_file(parser: &RootParser, path: &Path) -> Result<markweave_engine::RootElement> {
    let content = read_file(path)?;
    parser
        .parse(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_arguments() {
        let cli = Cli::try_parse_from(["markweave", "parse", "--format", "json", "a.md"]).unwrap();
        match cli.command {
            Command::Parse { files, format } => {
                assert_eq!(files, vec![PathBuf::from("a.md")]);
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn check_accepts_failure_level() {
        let cli = Cli::try_parse_from(["markweave", "check", "--failure-level", "warn"]).unwrap();
        match cli.command {
            Command::Check { failure_level, .. } => {
                assert_eq!(failure_level, Some(MessageLevel::Warning));
            }
            _ => panic!("expected check command"),
        }
    }
}
