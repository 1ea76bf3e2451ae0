use crate::lang::Dialect;
use crate::mach::{Event, Runtime, Value, Vector};

mod befunge93_test;

fn runtime(rows: &[&str], dialect: Dialect) -> Runtime {
    Runtime::from_lines(rows, dialect).unwrap().with_seed(0)
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
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

fn stack_of(rows: &[&str], dialect: Dialect) -> Vec<Value> {
    let mut r = runtime(rows, dialect);
    run(&mut r);
    r.stack().to_vec()
}

fn halted_at(rows: &[&str], dialect: Dialect) -> Vector {
    let mut r = runtime(rows, dialect);
    run(&mut r);
    assert!(r.is_halted());
    r.ip().position().clone()
}
