use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};

use pyjig::placement::ModuleKind;
use pyjig::project::{self, Project, ProjectType};
use pyjig::toolchain;

mod commands;

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Template driven new project creation",
    long_about = None,
    disable_help_flag = true
)]
struct Cli {
    /// Create a package type project
    #[arg(long, value_name = "NAME")]
    pkg: Option<String>,

    /// Create an application type project
    #[arg(long, value_name = "NAME", conflicts_with = "pkg")]
    app: Option<String>,

    /// Add extension module(s) to the project
    #[arg(long, value_name = "NAME", num_args = 1..)]
    ext: Vec<String>,

    /// Add source file(s) to the project
    #[arg(value_name = "SOURCE")]
    source: Vec<String>,

    /// Do not initialize a git repository
    #[arg(short = 'x', long)]
    excludegit: bool,

    /// Accept template defaults without prompting
    #[arg(short, long)]
    quiet: bool,

    /// Generate diagnostic output
    #[arg(short, long)]
    debug: bool,

    /// Show this help message and exit
    #[arg(short = '?', short_alias = 'h', long, action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        println!(">>> Option: Debug enabled");
    }
    if cli.excludegit {
        println!(">>> Option: Do not initialize git repo.");
    }
    if let Some(name) = &cli.app {
        println!(">>> Option: Create new application '{name}'.");
    }
    if let Some(name) = &cli.pkg {
        println!(">>> Option: Create new package '{name}'.");
    }
    if !cli.source.is_empty() {
        println!(">>> Option: Add new sourcefile(s) '{}'.", cli.source.join(","));
    }
    if !cli.ext.is_empty() {
        println!(">>> Option: Add new extension(s) '{}'.", cli.ext.join(","));
    }

    // Usage errors abort before any filesystem mutation
    if cli.app.is_none() && cli.pkg.is_none() && cli.source.is_empty() && cli.ext.is_empty() {
        eprintln!(">>> Must either create a project or add source/extension modules.");
        Cli::command().print_help()?;
        std::process::exit(2);
    }

    // Environment errors too: every required tool, before touching anything
    toolchain::verify()?;

    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    // Creation flags name the project directly; otherwise the enclosing
    // project (if any) is discovered from the sentinel file. No sentinel
    // means rootless mode: modules land in the current directory and git
    // staging is skipped.
    let project: Option<Project> = if let Some(name) = &cli.app {
        let project = Project::new(ProjectType::App, name, &cwd);
        commands::create::execute(&project, &cwd, cli.quiet, cli.excludegit, cli.debug)?;
        // Re-read the sentinel the template wrote, so module additions in
        // this same invocation see exactly what later invocations will see
        Some(project::load(&project.root)?)
    } else if let Some(name) = &cli.pkg {
        let project = Project::new(ProjectType::Pkg, name, &cwd);
        commands::create::execute(&project, &cwd, cli.quiet, cli.excludegit, cli.debug)?;
        Some(project::load(&project.root)?)
    } else {
        project::discover(&cwd)?
    };

    if cli.debug {
        match &project {
            Some(p) => println!(">>> Project root: {}", p.root.display()),
            None => println!(">>> Not inside a project, operating rootless."),
        }
    }

    if !cli.source.is_empty() {
        commands::add::execute(
            &cli.source,
            ModuleKind::Source,
            project.as_ref(),
            &cwd,
            cli.quiet,
            cli.excludegit,
            cli.debug,
        )?;
    }
    if !cli.ext.is_empty() {
        commands::add::execute(
            &cli.ext,
            ModuleKind::Extension,
            project.as_ref(),
            &cwd,
            cli.quiet,
            cli.excludegit,
            cli.debug,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_app_and_pkg_conflict() {
        let parsed = Cli::try_parse_from(["pyjig", "--app", "myapp", "--pkg", "mypkg"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_sources_and_extensions_may_combine() {
        let cli = Cli::try_parse_from(["pyjig", "s1", "s2", "--ext", "e1"]).unwrap();
        assert_eq!(cli.source, vec!["s1", "s2"]);
        assert_eq!(cli.ext, vec!["e1"]);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["pyjig", "-x", "-q", "-d", "s1"]).unwrap();
        assert!(cli.excludegit);
        assert!(cli.quiet);
        assert!(cli.debug);
    }
}
