use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use human_panic::setup_panic;
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use orfprofile::{
    discover, input, logging, pipeline::profile_supplied, profile_discovered, report,
    ui::render_ui, AnnotationEvidence, App, PipelineConfig,
};

/// Find genes in a DNA sequence and characterize the proteins they encode
#[derive(Debug, Parser)]
#[command(name = "orfprofile", version, about)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// DNA text file, optionally gzip-compressed (.gz)
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Reference pH for charge estimates [default: 7.0 or ORFPROFILE_PH]
    #[arg(long)]
    ph: Option<f64>,

    /// Minimum protein length in residues [default: 50 or ORFPROFILE_MIN_LENGTH]
    #[arg(long)]
    min_length: Option<usize>,

    /// Print a plain-text report instead of opening the terminal UI
    #[arg(long, conflicts_with = "fasta")]
    report: bool,

    /// Print the retained proteins as FASTA instead of opening the terminal UI
    #[arg(long)]
    fasta: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Profile one protein from an external record
    Profile(ProfileArgs),
}

#[derive(Debug, Args)]
struct ProfileArgs {
    /// Amino acid sequence, one-letter codes
    #[arg(long)]
    sequence: String,

    /// Measured mass in Da; estimated from length when absent
    #[arg(long)]
    mass: Option<f64>,

    /// Reference pH for the charge estimate [default: 7.0 or ORFPROFILE_PH]
    #[arg(long)]
    ph: Option<f64>,

    /// Subcellular location, e.g. "Secreted" (repeatable)
    #[arg(long = "localization", value_name = "LOCATION")]
    localizations: Vec<String>,

    /// Interaction partner label (repeatable)
    #[arg(long = "interaction", value_name = "LABEL")]
    interactions: Vec<String>,

    /// Regulation remark, e.g. "Inhibited by" (repeatable)
    #[arg(long = "regulation", value_name = "TEXT")]
    regulations: Vec<String>,

    /// EC number (repeatable)
    #[arg(long = "ec", value_name = "EC")]
    ec_numbers: Vec<String>,

    /// PTM or cofactor remark (repeatable, informational)
    #[arg(long = "cofactor", value_name = "TEXT")]
    cofactors: Vec<String>,
}

impl ProfileArgs {
    fn evidence(&self) -> AnnotationEvidence {
        AnnotationEvidence {
            cofactors: self.cofactors.clone(),
            localization: self.localizations.clone(),
            interactions: self.interactions.clone(),
            regulation: self.regulations.clone(),
            ec_numbers: self.ec_numbers.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();
    let cli = Cli::parse();

    logging::set_log_level();
    if let Err(e) = logging::init_logging(&logging::default_log_dir()) {
        eprintln!("Failed to initialize logging: {e}");
    }
    logging::log_system_info();

    let result = match &cli.command {
        Some(Commands::Profile(args)) => run_profile(args),
        None => run_scan(&cli),
    };

    logging::log_shutdown();
    result
}

fn run_profile(args: &ProfileArgs) -> Result<(), Box<dyn Error>> {
    let config = PipelineConfig::from_env().with_overrides(args.ph, None);
    info!("Profiling a supplied protein with {config:?}");

    let profile = profile_supplied(&args.sequence, args.mass, &args.evidence(), config.ph);
    let mut out = io::stdout().lock();
    report::write_profile(&mut out, &profile, config.ph)?;
    Ok(())
}

fn run_scan(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = PipelineConfig::from_env().with_overrides(cli.ph, cli.min_length);
    info!("Running with {config:?}");

    let Some(path) = cli.input.as_deref() else {
        return Err("no input file given".into());
    };
    let dna = input::read_dna_file(path).map_err(|e| {
        logging::log_critical_error(&e.to_string(), Some("input"));
        e
    })?;
    let source = path.display().to_string();

    if cli.report || cli.fasta {
        let discovery = discover(&dna, config.min_protein_length);
        let mut out = io::stdout().lock();
        if cli.fasta {
            report::write_fasta(&mut out, &discovery)?;
        } else {
            let profiles = profile_discovered(&discovery, config.ph);
            report::write_report(&mut out, &source, &dna, &config, &discovery, &profiles)?;
        }
    } else {
        let mut app = App::new(source, dna, config);
        run_terminal(&mut app)?;
    }

    Ok(())
}

fn run_terminal(app: &mut App) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logging::log_critical_error(&e.to_string(), Some("terminal"));
    }
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Down | KeyCode::Char('j') => app.next_protein(),
                KeyCode::Up | KeyCode::Char('k') => app.prev_protein(),
                KeyCode::Char('+') | KeyCode::Char('=') => app.raise_ph(),
                KeyCode::Char('-') => app.lower_ph(),
                _ => {}
            }
        }
    }

    Ok(())
}
