use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "\u{00D7}",
            Self::Divide => "\u{00F7}",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            // Division by zero shows 0 rather than an error state.
            Self::Divide if rhs == 0.0 => 0.0,
            Self::Divide => lhs / rhs,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CalcAction {
    Digit(char),
    Decimal,
    Binary(BinaryOp),
    Equals,
    Clear,
}

/// Four-function calculator with a pending operation and a "start a new number" flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct CalculatorState {
    display: String,
    previous: Option<f64>,
    pending_op: Option<BinaryOp>,
    new_number: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            pending_op: None,
            new_number: true,
        }
    }
}

impl CalculatorState {
    pub(crate) fn apply(&mut self, action: CalcAction) {
        match action {
            CalcAction::Digit(digit) => self.input_digit(digit),
            CalcAction::Decimal => self.input_decimal(),
            CalcAction::Binary(op) => self.set_pending_operation(op),
            CalcAction::Equals => self.equals(),
            CalcAction::Clear => *self = Self::default(),
        }
    }

    pub(crate) fn display_text(&self) -> &str {
        &self.display
    }

    pub(crate) fn pending_text(&self) -> String {
        match (self.previous, self.pending_op) {
            (Some(previous), Some(op)) => format!("{} {}", format_number(previous), op.symbol()),
            _ => String::new(),
        }
    }

    fn current_value(&self) -> f64 {
        self.display.parse::<f64>().unwrap_or(0.0)
    }

    fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.new_number {
            self.display = digit.to_string();
            self.new_number = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// After an operator the point starts a fresh `0.` operand; otherwise it extends the display,
    /// including a result just produced by `=`.
    fn input_decimal(&mut self) {
        if self.new_number && self.pending_op.is_some() {
            self.display = "0.".to_string();
        } else if !self.display.contains('.') {
            self.display.push('.');
        } else {
            return;
        }
        self.new_number = false;
    }

    fn set_pending_operation(&mut self, op: BinaryOp) {
        let current = self.current_value();
        match (self.previous, self.pending_op, self.new_number) {
            (Some(previous), Some(pending), false) => {
                let result = pending.apply(previous, current);
                self.display = format_number(result);
                self.previous = Some(result);
            }
            // A second operator in a row only swaps the pending operation.
            (Some(_), Some(_), true) => {}
            _ => self.previous = Some(current),
        }
        self.pending_op = Some(op);
        self.new_number = true;
    }

    fn equals(&mut self) {
        let (Some(previous), Some(op)) = (self.previous, self.pending_op) else {
            return;
        };
        let result = op.apply(previous, self.current_value());
        self.display = format_number(result);
        self.previous = None;
        self.pending_op = None;
        self.new_number = true;
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0.
        return "0".to_string();
    }
    value.to_string()
}
