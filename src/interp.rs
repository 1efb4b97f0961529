//! The dispatch loop: fetch one instruction at a time and apply it to the
//! tape, the I/O adapter, and the loop return-address stack.

use std::io::{self, Write};

use crate::error::InterpreterError;
use crate::hexdump::HexDumper;
use crate::input::InputBuffer;
use crate::program::{Instr, Program};
use crate::tape::{Strictness, Tape};

/// A callable accepting one output byte per `.` instruction.
pub type ByteSink = Box<dyn FnMut(u8)>;

/// What to do with the program counter after one instruction.
///
/// Loop instructions decide the next counter themselves; keeping that
/// decision an explicit value keeps the transition table testable apart
/// from tape contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Move to the next instruction.
    Advance,
    /// Continue at the given position.
    Jump(usize),
    /// The counter fell off the end of the program.
    Halt,
}

/// A single program run: the program, its tape, the execution state, and
/// the I/O hooks.
///
/// Instances are fully independent; running two programs concurrently means
/// two interpreters with nothing shared.
pub struct Interpreter {
    program: Program,
    tape: Tape,
    pc: usize,
    loop_stack: Vec<usize>,
    input: InputBuffer,
    output: ByteSink,
    diag: Box<dyn Write>,
}

impl Interpreter {
    /// Build an interpreter for `source`, validating the program.
    ///
    /// Defaults: line-at-a-time stdin input, stdout output, stderr
    /// diagnostics, permissive arithmetic.
    pub fn new(source: &str) -> Result<Self, InterpreterError> {
        Ok(Self {
            program: Program::parse(source)?,
            tape: Tape::new(Strictness::default()),
            pc: 0,
            loop_stack: Vec::new(),
            input: InputBuffer::from_stdin(),
            output: Box::new(|byte| {
                let _ = io::stdout().write_all(&[byte]);
            }),
            diag: Box::new(io::stderr()),
        })
    }

    /// Replace the input source. `,` pulls one line per invocation from it;
    /// `None` means the input is exhausted.
    pub fn set_input_source<F>(&mut self, source: F)
    where
        F: FnMut() -> Option<String> + 'static,
    {
        self.input = InputBuffer::new(Box::new(source));
    }

    /// Replace the output sink. `.` hands it one byte per execution.
    pub fn set_output_sink<F>(&mut self, sink: F)
    where
        F: FnMut(u8) + 'static,
    {
        self.output = Box::new(sink);
    }

    /// Redirect `#` diagnostics away from stderr.
    pub fn set_diagnostic_sink<W>(&mut self, sink: W)
    where
        W: Write + 'static,
    {
        self.diag = Box::new(sink);
    }

    /// Select the arithmetic boundary policy.
    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.tape.set_strictness(strictness);
    }

    /// The tape in its current state.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The current program counter.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Execute until the program counter falls off the end of the program.
    ///
    /// There is no halt instruction; termination is running out of
    /// instructions. Errors abort the run immediately.
    pub fn run(&mut self) -> Result<(), InterpreterError> {
        while self.step()? != Flow::Halt {}
        Ok(())
    }

    /// Execute one instruction and apply its control-flow directive to the
    /// program counter.
    fn step(&mut self) -> Result<Flow, InterpreterError> {
        let Some(instr) = self.program.instr(self.pc) else {
            return Ok(Flow::Halt);
        };
        let flow = self.exec(instr)?;
        match flow {
            Flow::Advance => self.pc += 1,
            Flow::Jump(target) => self.pc = target,
            Flow::Halt => {}
        }
        Ok(flow)
    }

    /// The transition table: one exhaustive match from instruction to
    /// effect plus directive.
    fn exec(&mut self, instr: Instr) -> Result<Flow, InterpreterError> {
        match instr {
            Instr::Incr => self.tape.increment()?,
            Instr::Decr => self.tape.decrement()?,
            Instr::MoveLeft => self.tape.move_left(),
            Instr::MoveRight => self.tape.move_right(),
            Instr::Write => (self.output)(self.tape.read_cell()),
            Instr::Read => {
                let byte = self.input.next_byte()?;
                self.tape.write_cell(byte);
            }
            Instr::Dump => self.dump_state(),
            Instr::LoopBegin => return self.loop_begin(),
            Instr::LoopEnd => return self.loop_end(),
            Instr::Nop => {}
        }
        Ok(Flow::Advance)
    }

    /// `[`: with a zero cell, skip past the matching `]`; otherwise record
    /// this position and enter the body. The only consumer of the loop
    /// matcher.
    fn loop_begin(&mut self) -> Result<Flow, InterpreterError> {
        if self.tape.read_cell() == 0 {
            let end = match self.program.loop_end(self.pc) {
                Some(end) => end,
                None => self.program.find_loop_end(self.pc)?,
            };
            Ok(Flow::Jump(end + 1))
        } else {
            self.loop_stack.push(self.pc);
            Ok(Flow::Advance)
        }
    }

    /// `]`: with a zero cell the loop has run its course -- drop its entry
    /// and fall through. Otherwise jump back to the first body instruction;
    /// the loop-begin condition is not re-tested on re-entry.
    fn loop_end(&mut self) -> Result<Flow, InterpreterError> {
        if self.tape.read_cell() == 0 {
            self.loop_stack
                .pop()
                .ok_or(InterpreterError::LoopEndWithoutEntry { ip: self.pc })?;
            Ok(Flow::Advance)
        } else {
            let begin = self
                .loop_stack
                .last()
                .copied()
                .ok_or(InterpreterError::LoopEndWithoutEntry { ip: self.pc })?;
            Ok(Flow::Jump(begin + 1))
        }
    }

    /// `#`: program counter and tape pointer as 4-digit hex, then the whole
    /// tape as a hex dump. Diagnostics only; the output sink never sees
    /// any of it.
    fn dump_state(&mut self) {
        let _ = writeln!(
            self.diag,
            "pc={:04x} ptr={:04x}",
            self.pc,
            self.tape.position()
        );
        let dump = HexDumper::default().dump_string(self.tape.cells());
        let _ = self.diag.write_all(dump.as_bytes());
        let _ = self.diag.flush();
    }
}
