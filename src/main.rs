// maze-viewer: live terminal viewer for wall-coded maze grids

use std::fs::{self, File};
use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use maze_viewer::config::{self, Command, Config, DEFAULT_MAZE};
use maze_viewer::maze::parse_maze;
use maze_viewer::render::describe_outcome;
use maze_viewer::ui::App;

/// Send logs to `config.log_file`, if one was given.
///
/// The terminal is owned by the UI while it runs, so logs never go to stderr.
fn init_logging(config: &Config) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("maze-viewer");

    let config = match Config::from_args(args.iter().skip(1).cloned()) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            println!("{}", config::usage(program_name));
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", config::usage(program_name));
            std::process::exit(1);
        }
    };

    init_logging(&config)?;
    log::info!("starting with {:?}", config);

    // Read the initial maze text
    let maze_text = match &config.maze_file {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => {
                log::info!(
                    "loaded {} ({})",
                    path.display(),
                    describe_outcome(&parse_maze(&text))
                );
                text
            }
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => DEFAULT_MAZE.to_string(),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&maze_text, config.show_values, config.frame_interval());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("terminal error: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
