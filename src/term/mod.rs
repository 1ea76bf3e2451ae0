extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use funge::lang::{Dialect, Error, Source};
use funge::mach::{Event, Input, Runtime};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Befunge-93 and Funge-98 interpreter
#[derive(Parser, Debug)]
#[command(name = "funge", version, about)]
struct Args {
    /// Program file. Without one the grid is typed in row by row and ends
    /// with an empty line.
    file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Dialect::Befunge93)]
    dialect: Dialect,

    /// Print a trace line before every instruction
    #[arg(long)]
    debug: bool,

    /// Type the grid in even when a file is given
    #[arg(short, long)]
    interactive: bool,

    /// Seed for `?`
    #[arg(long)]
    seed: Option<u64>,

    /// Instructions run between checks for Ctrl-C
    #[arg(long, default_value_t = 5000, value_parser = clap::value_parser!(u64).range(1..))]
    cycles: u64,
}

pub fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let code = match main_loop(args, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };
    std::process::exit(code);
}

fn main_loop(args: Args, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let interface = Interface::new("funge")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut runtime = match load(&args) {
        Ok(runtime) => runtime.with_debug(args.debug),
        Err(error) => {
            write_error(&interface, &error)?;
            return Ok(1);
        }
    };
    if let Some(seed) = args.seed {
        runtime = runtime.with_seed(seed);
    }
    let mut failed = false;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(args.cycles as usize) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(output) => {
                interface.write_fmt(format_args!("{}", output))?;
            }
            Event::Trace(trace) => {
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().dimmed().paint(trace.to_string())
                ))?;
            }
            Event::Input(input) => {
                let prompt = match input {
                    Input::Number => "& ".to_string(),
                    Input::Char => "~ ".to_string(),
                    Input::Row => format!("{:>2}| ", runtime.space().height() + 1),
                };
                interface.set_prompt(&prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(line) => {
                        if input == Input::Row && !line.is_empty() {
                            interface.add_history(line.clone());
                        }
                        runtime.enter(&line);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        runtime.interrupt();
                    }
                    ReadResult::Eof if input == Input::Row => runtime.enter(""),
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    write_error(&interface, error)?;
                }
                failed |= runtime.is_halted();
            }
        }
    }
    if failed {
        Ok(1)
    } else {
        Ok(runtime.exit_code() as i32)
    }
}

fn load(args: &Args) -> Result<Runtime, Error> {
    match &args.file {
        Some(path) if !args.interactive => {
            let source = Source::from_file(path, args.dialect)?;
            tracing::debug!(
                path = %path.display(),
                height = source.height(),
                width = source.width(),
                "starting program"
            );
            Ok(Runtime::new(&source))
        }
        _ => {
            tracing::debug!(dialect = %args.dialect, "starting interactive grid");
            Ok(Runtime::interactive(args.dialect))
        }
    }
}

fn write_error(interface: &Interface<DefaultTerminal>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}
