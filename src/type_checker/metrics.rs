use std::fmt::Display;

/// Usage counters gathered during one checking pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Variable declarations
    pub variables: usize,
    /// `while` and `do-while` loops
    pub loops: usize,
    /// `if` statements and ternaries
    pub conditionals: usize,
    /// Operator occurrences
    pub operators: usize,
}

impl Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{VAR:{}, WHILE:{}, IF:{}, OP:{}}}",
            self.variables, self.loops, self.conditionals, self.operators
        )
    }
}
