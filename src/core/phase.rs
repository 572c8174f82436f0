//! Phases of the calculator state machine.

use crate::state_enum;

state_enum! {
    /// Position of the calculator in its input cycle.
    ///
    /// The phase is derived from [`CalculatorState`](crate::engine::CalculatorState)
    /// on demand; it is never stored alongside the data it describes.
    #[derive(Copy, Eq)]
    pub enum Phase {
        /// No operator has been accepted since the last clear.
        Idle,
        /// An operator is set and the next digit starts the second operand.
        OperatorPending,
        /// Digits are being entered for the second operand.
        Accumulating,
        /// The error marker is showing; everything else is cleared.
        Error,
    }
    error: [Error]
}
