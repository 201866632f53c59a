use std::env;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};

use clap::{Command, CommandFactory};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "wikilint";

fn write_man_page(cmd: Command, title: &str, dir: &Path) -> Result<()> {
    let mut page = Vec::new();
    Man::new(cmd).title(title).render(&mut page)?;
    fs::write(dir.join(format!("{title}.1")), page)
}

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let mut cmd = cli::Cli::command();

    if let Some(out_dir) = env::var_os("OUT_DIR") {
        for shell in [Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh] {
            generate_to(shell, &mut cmd, BIN, &out_dir)?;
        }
    }

    // wikilint.1, wikilint-lint.1, wikilint-parse.1
    let man_dir = PathBuf::from("target/man");
    fs::create_dir_all(&man_dir)?;
    write_man_page(cmd.clone(), BIN, &man_dir)?;
    for sub in cmd.get_subcommands().filter(|sub| sub.get_name() != "help") {
        write_man_page(sub.clone(), &format!("{BIN}-{}", sub.get_name()), &man_dir)?;
    }

    Ok(())
}
