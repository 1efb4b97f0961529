/// Errors that can occur while loading or running a program.
///
/// Every failure mode shares this one kind; all of them are fatal to the
/// current run. Output already handed to the sink stays emitted.
#[derive(Debug, thiserror::Error)]
pub enum InterpreterError {
    /// The program's `[` and `]` counts differ. This is the only load-time
    /// rejection; nesting order is not checked.
    #[error("number of loop begin/end instructions does not match ({begins} '[' vs {ends} ']')")]
    UnbalancedLoops { begins: usize, ends: usize },

    /// Strict mode: the current cell was already 255 when `+` ran.
    #[error("cell overflow at tape position {pos}")]
    CellOverflow { pos: usize },

    /// Strict mode: the current cell was already 0 when `-` ran.
    #[error("cell underflow at tape position {pos}")]
    CellUnderflow { pos: usize },

    /// The loop matcher was asked for the end of something that is not a
    /// loop begin.
    #[error("instruction {ip} is not a loop begin")]
    NotALoopBegin { ip: usize },

    /// A matching scan for the loop begin at `ip` ran off the end of the
    /// program. Reachable only for ill-nested programs, which the count
    /// check deliberately accepts.
    #[error("loop begin at instruction {ip} has no matching end")]
    UnclosedLoop { ip: usize },

    /// A `]` executed while no loop was open. Also an ill-nesting symptom.
    #[error("loop end at instruction {ip} without an open loop")]
    LoopEndWithoutEntry { ip: usize },

    /// `,` ran but the input source had nothing more to give.
    #[error("input exhausted")]
    InputExhausted,
}
