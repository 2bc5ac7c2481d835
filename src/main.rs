use anyhow::Context;
use clap::Parser;
use gitsim::{telemetry, HashStrategy, Session, Settings};
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitsim")]
#[command(about = "In-memory git command simulator")]
#[command(version = "0.1.0")]
struct Cli {
    /// Run this command line; repeat to run several in order
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,
    /// Run command lines from a file, one per line
    #[arg(long)]
    script: Option<PathBuf>,
    /// Settings file (defaults to ~/.gitsim.json when present)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// How commit hashes are generated
    #[arg(long, value_enum)]
    hash: Option<HashStrategy>,
    /// Program name every line must start with
    #[arg(long)]
    program: Option<String>,
    #[arg(long)]
    no_color: bool,
    /// Print each line before its output in batch mode
    #[arg(long)]
    echo: bool,
    /// Print the repository state as JSON before exiting
    #[arg(long)]
    dump_state: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let mut settings = Settings::load(cli.settings.as_deref())?;
    if let Some(hash) = cli.hash {
        settings.hash_strategy = hash;
    }
    if let Some(program) = &cli.program {
        settings.program = program.clone();
    }
    if cli.no_color {
        settings.color = false;
    }
    if !settings.color {
        colored::control::set_override(false);
    }

    let mut session = Session::new(&settings);

    if !cli.commands.is_empty() || cli.script.is_some() {
        let mut lines = cli.commands.clone();
        if let Some(path) = &cli.script {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            lines.extend(script_lines(&script));
        }
        run_batch(&mut session, &lines, cli.echo);
    } else if std::io::stdin().is_terminal() {
        run_interactive(&mut session, &settings)?;
    } else {
        let lines = std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read commands from stdin")?;
        let lines: Vec<String> = lines
            .iter()
            .flat_map(|line| script_lines(line))
            .collect();
        run_batch(&mut session, &lines, cli.echo);
    }

    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(session.repository())?);
    }

    Ok(())
}

/// Non-blank lines that are not `#` comments.
fn script_lines(script: &str) -> Vec<String> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn run_batch(session: &mut Session, lines: &[String], echo: bool) {
    for line in lines {
        if echo {
            println!("$ {}", line);
        }
        println!("{}", session.submit(line).colorize());
    }
}

fn run_interactive(session: &mut Session, settings: &Settings) -> anyhow::Result<()> {
    println!(
        "Git practice environment. Type '{} <command>', 'history', or 'exit'.",
        settings.program
    );

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", settings.prompt);
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "exit" | "quit" => break,
            "history" => {
                for entry in session.history() {
                    println!("{}", entry);
                }
            }
            input => println!("{}", session.submit(input).colorize()),
        }
    }

    Ok(())
}
