use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use wikilint::front_matter::Classifier;
use wikilint::linter::{Diagnostic, Severity};
use wikilint::repository::{OfflineRepository, Repository, RepositoryError, SnapshotRepository};
use wikilint::{Config, parse};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = wikilint::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn open_repository(site: Option<&Path>) -> io::Result<Box<dyn Repository>> {
    match site {
        Some(path) => {
            let repository = SnapshotRepository::load(path).map_err(|e| match e {
                RepositoryError::Io(e) => e,
                other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
            })?;
            Ok(Box::new(repository))
        }
        None => {
            log::debug!("No site snapshot, redirects and hatnotes will not be resolved");
            Ok(Box::new(OfflineRepository))
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file } => {
            let input = read_all(file.as_ref())?;
            let document = parse(&input);
            println!("{:#?}", document.nodes());
            Ok(())
        }
        Commands::Lint { file, site, check } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let site = site.or_else(|| cfg.site.clone());
            let repository = open_repository(site.as_deref())?;
            let classifier = Classifier::from_config(repository, &cfg)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

            let input = read_all(file.as_ref())?;
            let document = parse(&input);
            let diagnostics = wikilint::linter::lint(&document, classifier, &cfg);

            if diagnostics.is_empty() {
                if !check {
                    println!("No issues found");
                }
                return Ok(());
            }

            print_diagnostics(&diagnostics, file.as_ref());

            if check {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic], file: Option<&PathBuf>) {
    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",     // red
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };

        println!(
            "{severity_str}[{}]: {} at {}:{}:{}",
            diag.code, diag.message, file_name, diag.location.line, diag.location.column
        );
    }

    println!("\nFound {} issue(s)", diagnostics.len());
}
