use clap::Parser;
use log::{info, LevelFilter};

use mazerace::{
    logging,
    maze::{Maze, MazeGenerator},
    race::{Race, RaceReport},
    random,
    render::{Canvas, TermRenderer},
    settings::{self, Settings},
    Error,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazerace")]
struct Args {
    #[clap(short, long, value_parser = parse_size, help = "Side of the maze, odd and at least 5")]
    size: Option<usize>,
    #[clap(long, help = "Seed for the maze generator")]
    seed: Option<u64>,
    #[clap(short, long, help = "Pause before each visit is drawn, in milliseconds")]
    delay: Option<u64>,
    #[clap(short, long, action, help = "Print the finished race to stdout instead of animating it")]
    print: bool,
    #[clap(long, action, help = "Quit right after the race instead of waiting for a key")]
    no_wait: bool,
    #[clap(short, long, action, help = "Show debug logs")]
    verbose: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    settings::check_size(size).map_err(|e| e.to_string())
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let settings_path = Settings::default_path();

    if args.reset_config {
        return Settings::reset_config(&settings_path);
    }

    if args.show_config_path {
        match settings_path.to_str() {
            Some(s) => println!("{}", s),
            None => println!("{:?}", settings_path),
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(&settings_path)?);
        return Ok(());
    }

    logging::init(LevelFilter::Warn);
    let mut settings = Settings::load(&settings_path)?;
    if let Some(size) = args.size {
        settings = settings.set_size(size);
    }
    if let Some(seed) = args.seed {
        settings = settings.set_seed(seed);
    }
    if let Some(delay) = args.delay {
        settings = settings.set_delay_ms(delay);
    }

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        settings.get_log_level().into()
    };
    logging::init(level);
    better_panic::install();

    let size = settings::check_size(settings.get_size())?;
    let (mut rng, seed) = random::seeded(settings.get_seed());
    let maze = MazeGenerator::square(size)?.generate(&mut rng)?;
    info!("generated {size}x{size} maze from seed {seed}");

    let header = format!("seed {seed}, {size}x{size}");

    if args.print {
        return print_race(&maze, &settings, &header);
    }

    let mut term = TermRenderer::new(settings.get_theme())?;
    let report = Race::new(&maze)
        .delay(settings.get_delay())
        .run(&mut term)?;

    let mut status = status_lines(&header, &report);
    if !args.no_wait {
        status.push("press any key to quit".to_string());
    }
    term.draw_status(&status)?;
    term.draw_logs(logging::get_logger(), status.len() as u16)?;

    if !args.no_wait {
        term.wait_for_key()?;
    }

    Ok(())
}

fn status_lines(header: &str, report: &RaceReport) -> Vec<String> {
    let mut lines = vec![header.to_string()];
    lines.extend(report.summary());
    lines
}

fn print_race(maze: &Maze, settings: &Settings, header: &str) -> Result<(), Error> {
    let mut canvas = Canvas::new(maze.rows(), maze.columns());
    let report = Race::new(maze).run(&mut canvas)?;

    print!("{}", canvas.to_colored_text(&settings.get_theme()));
    for line in status_lines(header, &report) {
        println!("{line}");
    }
    for log in logging::get_logger().get_logs() {
        eprintln!("[{}] {} -> {}", log.level, log.source, log.message);
    }

    Ok(())
}
