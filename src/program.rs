//! Program loading: comment stripping, instruction decoding, and loop
//! bracket matching.

use crate::error::InterpreterError;

/// The instruction set.
///
/// Every input character decodes to exactly one variant; characters outside
/// the alphabet become `Nop`, so prose between instructions is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// `+` add 1 to the current cell
    Incr,
    /// `-` subtract 1 from the current cell
    Decr,
    /// `.` hand the current cell to the output sink
    Write,
    /// `,` read one byte of input into the current cell
    Read,
    /// `<` move the pointer left
    MoveLeft,
    /// `>` move the pointer right
    MoveRight,
    /// `#` dump the interpreter state to the diagnostic sink
    Dump,
    /// `[` loop begin
    LoopBegin,
    /// `]` loop end
    LoopEnd,
    /// any other character
    Nop,
}

impl From<char> for Instr {
    fn from(c: char) -> Self {
        match c {
            '+' => Instr::Incr,
            '-' => Instr::Decr,
            '.' => Instr::Write,
            ',' => Instr::Read,
            '<' => Instr::MoveLeft,
            '>' => Instr::MoveRight,
            '#' => Instr::Dump,
            '[' => Instr::LoopBegin,
            ']' => Instr::LoopEnd,
            _ => Instr::Nop,
        }
    }
}

/// Strip `/* ... */` block comments from source text.
///
/// Matching is non-greedy (each `/*` closes at the nearest following `*/`)
/// and spans line boundaries. Comments do not nest. An unterminated `/*` is
/// not a comment and stays in the source.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(open) = rest.find("/*") {
        let Some(close) = rest[open + 2..].find("*/") else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + 2 + close + 2..];
    }
    out.push_str(rest);
    out
}

/// An immutable instruction sequence plus its loop-end index.
#[derive(Debug)]
pub struct Program {
    instrs: Vec<Instr>,
    loop_ends: Vec<Option<usize>>,
}

impl Program {
    /// Load a program from source text.
    ///
    /// Comments are stripped first, then the loop brackets are counted. A
    /// count mismatch is the only load-time rejection; the check is
    /// deliberately weaker than structural well-formedness (`][` loads), so
    /// the set of accepted programs is exactly the count rule.
    pub fn parse(source: &str) -> Result<Self, InterpreterError> {
        let instrs: Vec<Instr> = strip_comments(source).chars().map(Instr::from).collect();

        let begins = instrs.iter().filter(|i| **i == Instr::LoopBegin).count();
        let ends = instrs.iter().filter(|i| **i == Instr::LoopEnd).count();
        if begins != ends {
            return Err(InterpreterError::UnbalancedLoops { begins, ends });
        }

        // Pair the brackets up in one forward pass. Ill-nested positions are
        // left unpaired rather than rejected; if execution ever reaches one,
        // the scan in `find_loop_end` has the last word.
        let mut loop_ends = vec![None; instrs.len()];
        let mut open: Vec<usize> = Vec::new();
        for (i, instr) in instrs.iter().enumerate() {
            match instr {
                Instr::LoopBegin => open.push(i),
                Instr::LoopEnd => {
                    if let Some(begin) = open.pop() {
                        loop_ends[begin] = Some(i);
                    }
                }
                _ => {}
            }
        }

        Ok(Self { instrs, loop_ends })
    }

    pub fn len(&self) -> usize {
        self.instrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }

    /// The instruction at `ip`, or `None` past the end of the program.
    pub fn instr(&self, ip: usize) -> Option<Instr> {
        self.instrs.get(ip).copied()
    }

    /// Precomputed matching loop end for the loop begin at `ip`.
    pub fn loop_end(&self, ip: usize) -> Option<usize> {
        self.loop_ends.get(ip).copied().flatten()
    }

    /// Locate the structurally matching loop end for the loop begin at
    /// `start`: scan forward with a depth counter starting at 1, each `[`
    /// incrementing and each `]` decrementing it; the position where depth
    /// reaches 0 is the match.
    ///
    /// This is the reference algorithm. Execution prefers the precomputed
    /// index and scans only for positions the index could not pair.
    pub fn find_loop_end(&self, start: usize) -> Result<usize, InterpreterError> {
        if self.instr(start) != Some(Instr::LoopBegin) {
            return Err(InterpreterError::NotALoopBegin { ip: start });
        }
        let mut depth = 1usize;
        for (i, instr) in self.instrs.iter().enumerate().skip(start + 1) {
            match instr {
                Instr::LoopBegin => depth += 1,
                Instr::LoopEnd => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            }
        }
        Err(InterpreterError::UnclosedLoop { ip: start })
    }
}
