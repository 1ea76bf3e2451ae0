#![allow(dead_code)]
use funge::lang::Dialect;
use funge::mach::{Event, Runtime};

pub fn runtime(rows: &[&str], dialect: Dialect) -> Runtime {
    Runtime::from_lines(rows, dialect).unwrap().with_seed(0)
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(output) => {
                s.push_str(&output.to_string());
            }
            Event::Trace(trace) => {
                s.push_str(&format!("{}\n", trace));
            }
            Event::Input(_) => {
                break;
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
