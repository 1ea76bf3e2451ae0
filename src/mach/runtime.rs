use super::{
    Channel, Heading, InstructionPointer, Opcode, Operation, ProgramSpace, StackMachine, Trace,
    Value, Vector,
};
use crate::error;
use crate::lang::{Dialect, Error, Source, UnknownPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::convert::TryFrom;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

const CYCLES: usize = 5000;

/// What the runtime is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A decimal number for `&`.
    Number,
    /// A line whose first character is pushed by `~`.
    Char,
    /// The next row of an interactive grid; an empty row completes it.
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Number(Value),
    Char(char),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Output::Number(n) => write!(f, "{} ", n),
            Output::Char(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Awaiting(Input),
    Halted,
}

/// ## Events
///
/// Returned by [`Runtime::execute`]. `Input` repeats until the runtime is
/// given what it asked for with [`Runtime::enter`].
#[derive(Debug)]
pub enum Event {
    Errors(Arc<Vec<Error>>),
    Input(Input),
    Print(Output),
    Trace(Trace),
    Running,
    Stopped,
}

/// Outcome of one instruction, applied by the run loop.
enum Signal {
    Advance(usize),
    Reflect,
    Emit(Output),
    Await(Input),
    Halt,
}

/// ## Funge runtime
///
/// Owns the program space, the stack of stacks and the instruction pointer.
/// Each instruction is looked up in the dialect's opcode table, executed,
/// and then the IP moves along its delta.

pub struct Runtime {
    policy: UnknownPolicy,
    space: ProgramSpace,
    stacks: StackMachine,
    ip: InstructionPointer,
    state: State,
    moves: usize,
    row_entered: bool,
    debug: bool,
    traced: bool,
    rng: StdRng,
    exit_code: Value,
    errors: Vec<Error>,
}

impl Runtime {
    pub fn new(source: &Source) -> Runtime {
        Runtime::with_space(ProgramSpace::load(source), State::Running)
    }

    /// A runtime whose grid is typed in one row at a time. It asks for the
    /// first row right away and for another whenever the IP moves down
    /// before the grid is complete.
    pub fn interactive(dialect: Dialect) -> Runtime {
        Runtime::with_space(
            ProgramSpace::interactive(dialect),
            State::Awaiting(Input::Row),
        )
    }

    pub fn from_lines<S: AsRef<str>>(lines: &[S], dialect: Dialect) -> Result<Runtime> {
        Ok(Runtime::new(&Source::from_lines(lines, dialect)?))
    }

    fn with_space(space: ProgramSpace, state: State) -> Runtime {
        let dialect = space.dialect();
        let dimension = dialect.dimension();
        Runtime {
            policy: dialect.unknown_policy(),
            space,
            stacks: StackMachine::new(dimension),
            ip: InstructionPointer::new(dimension),
            state,
            moves: 0,
            row_entered: false,
            debug: false,
            traced: false,
            rng: StdRng::from_entropy(),
            exit_code: 0,
            errors: vec![],
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Runtime {
        self.debug = debug;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Runtime {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_policy(mut self, policy: UnknownPolicy) -> Runtime {
        self.policy = policy;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.space.dialect()
    }

    pub fn space(&self) -> &ProgramSpace {
        &self.space
    }

    pub fn stacks(&self) -> &StackMachine {
        &self.stacks
    }

    /// The active stack, bottom first.
    pub fn stack(&self) -> &[Value] {
        self.stacks.toss().as_slice()
    }

    pub fn ip(&self) -> &InstructionPointer {
        &self.ip
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }

    pub fn exit_code(&self) -> Value {
        self.exit_code
    }

    pub fn interrupt(&mut self) {
        if self.state != State::Halted {
            self.errors.push(error!(Interrupted, self.ip.position()));
            self.state = State::Halted;
        }
    }

    /// Supplies the input the runtime is waiting for. A number that does
    /// not parse is reported and asked for again; a blank line does not
    /// satisfy `~`.
    pub fn enter(&mut self, line: &str) {
        match self.state {
            State::Awaiting(Input::Number) => match line.trim().parse::<Value>() {
                Ok(number) => self.enter_number(number),
                Err(_) => self.errors.push(error!(InvalidNumber; line.trim())),
            },
            State::Awaiting(Input::Char) => {
                if let Some(ch) = line.chars().next() {
                    self.enter_char(ch);
                }
            }
            State::Awaiting(Input::Row) => self.enter_row(line),
            State::Running | State::Halted => {}
        }
    }

    pub fn enter_number(&mut self, number: Value) {
        if self.state == State::Awaiting(Input::Number) {
            self.stacks.push(number);
            self.resume();
        }
    }

    pub fn enter_char(&mut self, ch: char) {
        if self.state == State::Awaiting(Input::Char) {
            self.stacks.push(ch as Value);
            self.resume();
        }
    }

    fn enter_row(&mut self, row: &str) {
        match self.space.append_row(row) {
            Ok(()) => {
                self.row_entered = !row.is_empty();
                self.state = State::Running;
            }
            Err(error) => {
                self.state = State::Halted;
                self.errors.push(error);
            }
        }
    }

    fn resume(&mut self) {
        self.state = State::Running;
        self.moves = 1;
    }

    /// Runs at most `cycles` steps and reports why it stopped.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.errors.is_empty() {
            return Event::Errors(Arc::new(std::mem::take(&mut self.errors)));
        }
        for _ in 0..cycles {
            match self.state {
                State::Halted => return Event::Stopped,
                State::Awaiting(input) => return Event::Input(input),
                State::Running => {}
            }
            if self.moves > 0 {
                self.advance();
                continue;
            }
            if self.debug && !self.traced {
                self.traced = true;
                return Event::Trace(self.trace());
            }
            self.traced = false;
            if let Some(event) = self.step() {
                return event;
            }
        }
        Event::Running
    }

    /// Runs to completion, servicing input and output through `channel`.
    pub fn run(&mut self, channel: &mut dyn Channel) -> Result<()> {
        loop {
            match self.execute(CYCLES) {
                Event::Running => {}
                Event::Stopped => return Ok(()),
                Event::Print(Output::Char(ch)) => channel.write_char(ch)?,
                Event::Print(output) => channel.write_text(&output.to_string())?,
                Event::Trace(trace) => channel.write_trace(&trace)?,
                Event::Input(Input::Number) => {
                    let number = channel.read_int()?;
                    self.enter_number(number);
                }
                Event::Input(Input::Char) | Event::Input(Input::Row) => {
                    let line = channel.read_line()?;
                    self.enter(&line);
                }
                Event::Errors(errors) => {
                    return Err(errors
                        .first()
                        .cloned()
                        .unwrap_or_else(|| error!(InternalError)))
                }
            }
        }
    }

    fn trace(&self) -> Trace {
        let position = self.ip.position().clone();
        Trace {
            command: self.space.get(&position) as char,
            position,
            string_mode: self.ip.is_string_mode(),
            stack: self.stack().to_vec(),
        }
    }

    fn advance(&mut self) {
        if !self.space.is_complete() {
            let dy = self.ip.delta().y();
            if dy < 0 || (dy > 0 && !self.row_entered) {
                self.state = State::Awaiting(Input::Row);
                return;
            }
        }
        self.row_entered = false;
        self.ip.advance(&self.space);
        self.moves -= 1;
    }

    fn step(&mut self) -> Option<Event> {
        let position = self.ip.position().clone();
        let byte = self.space.get(&position);
        if self.ip.is_string_mode() {
            if byte == b'"' {
                self.ip.toggle_string_mode();
            } else {
                self.stacks.push(byte as Value);
            }
            self.moves = 1;
            return None;
        }
        let opcode = Opcode::decode(self.dialect(), byte);
        tracing::trace!(%position, %opcode, "step");
        match self.dispatch(opcode, &position, byte) {
            Ok(Signal::Advance(moves)) => self.moves = moves,
            Ok(Signal::Reflect) => {
                self.ip.reflect();
                self.moves = 1;
            }
            Ok(Signal::Emit(output)) => {
                self.moves = 1;
                return Some(Event::Print(output));
            }
            Ok(Signal::Await(input)) => self.state = State::Awaiting(input),
            Ok(Signal::Halt) => {
                tracing::debug!(%position, exit_code = self.exit_code, "halted");
                self.state = State::Halted;
            }
            Err(error) => {
                self.state = State::Halted;
                let error = error.in_instruction(&position, byte as char);
                tracing::debug!(%error, "stopped on error");
                return Some(Event::Errors(Arc::new(vec![error])));
            }
        }
        None
    }

    fn dispatch(&mut self, opcode: Opcode, position: &Vector, byte: u8) -> Result<Signal> {
        use Opcode::*;
        match opcode {
            Digit(d) => self.stacks.push(d as Value),
            Quote => self.ip.toggle_string_mode(),
            Fetch => {
                let at = self.ip.ahead(&self.space);
                self.stacks.push(self.space.get(&at) as Value);
                return Ok(Signal::Advance(2));
            }
            Store => {
                let at = self.ip.ahead(&self.space);
                let value = self.stacks.pop();
                self.space.put(&at, value);
                return Ok(Signal::Advance(2));
            }

            Add => self.binary(Operation::sum),
            Sub => self.binary(Operation::subtract),
            Mul => self.binary(Operation::multiply),
            Div => self.binary(Operation::divide),
            Mod => self.binary(Operation::remainder),
            Not => {
                let val = self.stacks.pop();
                self.stacks.push(Operation::not(val));
            }
            Greater => {
                let (b, a) = (self.stacks.pop(), self.stacks.pop());
                self.stacks.push(Operation::greater(a, b));
            }

            Dup => self.stacks.duplicate(),
            Swap => self.stacks.swap(),
            Discard => self.stacks.discard(),
            Clear => self.stacks.clear(),
            BeginBlock => match self.stacks.begin_block(self.ip.storage_offset()) {
                Ok(()) => {
                    let offset = self.ip.position() + self.ip.delta();
                    self.ip.set_storage_offset(offset);
                }
                Err(error) if error.reflects() => return Ok(Signal::Reflect),
                Err(error) => return Err(error),
            },
            EndBlock => match self.stacks.end_block() {
                Ok(offset) => self.ip.set_storage_offset(offset),
                Err(error) if error.reflects() => return Ok(Signal::Reflect),
                Err(error) => return Err(error),
            },
            StackUnderStack => match self.stacks.stack_under_stack() {
                Ok(()) => {}
                Err(error) if error.reflects() => return Ok(Signal::Reflect),
                Err(error) => return Err(error),
            },

            Go(heading) => self.ip.set_heading(heading),
            Random => {
                let choices = 2 * self.stacks.dimension();
                let heading = Heading::ALL[self.rng.gen_range(0..choices)];
                self.ip.set_heading(heading);
            }
            IfHorizontal => {
                let heading = if self.stacks.pop() == 0 {
                    Heading::East
                } else {
                    Heading::West
                };
                self.ip.set_heading(heading);
            }
            IfVertical => {
                let heading = if self.stacks.pop() == 0 {
                    Heading::South
                } else {
                    Heading::North
                };
                self.ip.set_heading(heading);
            }
            Trampoline => return Ok(Signal::Advance(2)),
            Reflect => return Ok(Signal::Reflect),
            TurnLeft => self.ip.turn_left(),
            TurnRight => self.ip.turn_right(),
            Compare => {
                let (b, a) = (self.stacks.pop(), self.stacks.pop());
                if a < b {
                    self.ip.turn_left();
                } else if a > b {
                    self.ip.turn_right();
                }
            }
            SetDelta => {
                let delta = self.stacks.pop_vector();
                self.ip.set_delta(delta);
            }
            JumpForward => {
                let count = self.stacks.pop();
                self.ip.jump(count, &self.space);
            }
            JumpOver => {
                for _ in 0..self.space.orbit(self.ip.position(), self.ip.delta()) {
                    self.ip.advance(&self.space);
                    if self.space.get(self.ip.position()) == b';' {
                        break;
                    }
                }
            }
            Nop => {}

            Put => self.put(),
            Get => self.get(),

            PrintNumber => return Ok(Signal::Emit(Output::Number(self.stacks.pop()))),
            PrintChar => {
                let ch = u32::try_from(self.stacks.pop())
                    .ok()
                    .and_then(std::char::from_u32)
                    .unwrap_or(std::char::REPLACEMENT_CHARACTER);
                return Ok(Signal::Emit(Output::Char(ch)));
            }
            ReadNumber => return Ok(Signal::Await(Input::Number)),
            ReadChar => return Ok(Signal::Await(Input::Char)),

            Halt => return Ok(Signal::Halt),
            Quit => {
                self.exit_code = self.stacks.pop();
                return Ok(Signal::Halt);
            }

            Unknown => {
                if self.policy == UnknownPolicy::Halt {
                    return Err(error!(InvalidInstruction, position, byte as char));
                }
            }
        }
        Ok(Signal::Advance(1))
    }

    fn binary(&mut self, op: fn(Value, Value) -> Value) {
        let a = self.stacks.pop();
        let b = self.stacks.pop();
        self.stacks.push(op(a, b));
    }

    /// Befunge-93 `p` addresses cells from 1 and falls back to the origin;
    /// Funge-98 addresses them from 0 relative to the storage offset.
    fn put(&mut self) {
        if self.dialect().is_bounded() {
            let y = self.stacks.pop();
            let x = self.stacks.pop();
            let value = self.stacks.pop();
            let at = Vector::from([x.wrapping_sub(1), y.wrapping_sub(1)]);
            self.space.put(&at, value);
        } else {
            let at = &self.stacks.pop_vector() + self.ip.storage_offset();
            let value = self.stacks.pop();
            self.space.put(&at, value);
        }
    }

    fn get(&mut self) {
        let value = if self.dialect().is_bounded() {
            let y = self.stacks.pop();
            let x = self.stacks.pop();
            let at = Vector::from([x, y]);
            if self.space.contains(&at) {
                self.space.peek(&at) as Value
            } else {
                0
            }
        } else {
            let at = &self.stacks.pop_vector() + self.ip.storage_offset();
            self.space.peek(&at) as Value
        };
        self.stacks.push(value);
    }
}
