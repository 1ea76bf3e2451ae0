use super::{Value, Vector};

/// ## Debug trace
///
/// Snapshot taken just before an instruction runs. Rows and columns are
/// shown starting at 1.

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub command: char,
    pub position: Vector,
    pub string_mode: bool,
    pub stack: Vec<Value>,
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let stack: Vec<String> = self.stack.iter().map(|v| v.to_string()).collect();
        write!(f, "evaluate command [ {} ] at ", self.command)?;
        if self.position.dimension() > 1 {
            write!(f, "Y: {} ", self.position.y() + 1)?;
        }
        write!(
            f,
            "X: {}, string mode: {}, stack: [ {} ]",
            self.position.x() + 1,
            self.string_mode,
            stack.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_empty_stack() {
        let trace = Trace {
            command: '@',
            position: Vector::zero(2),
            string_mode: false,
            stack: vec![],
        };
        assert_eq!(
            trace.to_string(),
            "evaluate command [ @ ] at Y: 1 X: 1, string mode: false, stack: [  ]"
        );
    }

    #[test]
    fn test_trace_unefunge() {
        let trace = Trace {
            command: '+',
            position: Vector::from([4]),
            string_mode: true,
            stack: vec![1, -2],
        };
        assert_eq!(
            trace.to_string(),
            "evaluate command [ + ] at X: 5, string mode: true, stack: [ 1,-2 ]"
        );
    }
}
