use capture_chess::{Console, Error};
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Two-player console chess, won by capturing the king")]
struct Args {
    /// Enable debug logging (rejected moves and their reasons)
    #[arg(short, long)]
    debug: bool,

    /// Do not redraw the board before every move
    #[arg(long)]
    no_board: bool,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the board on stdout.
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&args) {
        log::error!("fatal error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.show_board(!args.no_board);
    console.run()?;
    Ok(())
}
