//! An extended Brainfuck interpreter.
//!
//! The dialect adds two things to the classic eight instructions:
//!
//! - `/* ... */` block comments, stripped before validation (non-greedy,
//!   multiline, non-nesting), so programs can be documented without relying
//!   on every stray character being ignored;
//! - `#`, which dumps the interpreter state -- program counter, tape
//!   pointer, and the whole tape as an xxd-style hex dump -- to the
//!   diagnostic stream without disturbing program output.
//!
//! Behaviors:
//! - The tape starts as a single zero cell and grows in both directions on
//!   demand; the pointer never runs off it.
//! - Cell arithmetic stops silently at the `[0, 255]` boundaries by
//!   default; strict mode turns boundary hits into errors. Cells never
//!   wrap.
//! - Input (`,`) is pulled from a line-oriented source and buffered; one
//!   read consumes one byte. Reading past the end of input is an error.
//! - Output (`.`) hands one byte per instruction to the output sink.
//! - Unrecognized characters are inert.
//!
//! Quick start:
//!
//! ```
//! use bfx::Interpreter;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let out = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&out);
//!
//! // 8 * 8 + 1 = 65: print "A".
//! let mut interp = Interpreter::new("++++++++[>++++++++<-]>+.").expect("program loads");
//! interp.set_output_sink(move |byte| sink.borrow_mut().push(byte));
//! interp.run().expect("program runs");
//!
//! assert_eq!(out.borrow().as_slice(), b"A");
//! ```

mod error;
mod hexdump;
mod input;
mod interp;
mod program;
mod tape;

pub use error::InterpreterError;
pub use hexdump::HexDumper;
pub use input::{InputBuffer, LineSource};
pub use interp::{ByteSink, Interpreter};
pub use program::{Instr, Program, strip_comments};
pub use tape::{Strictness, Tape};
