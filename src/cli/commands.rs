//! Command dispatch: operation lookup, operand parsing, invocation, rendering

use tracing::{debug, instrument};

use crate::calculator::{add, divide, multiply, power, square_root, subtract};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;

/// Fixed operation table, built once and never mutated.
const OPERATIONS: &[(&str, Operation)] = &[
    ("add", Operation::Add),
    ("subtract", Operation::Subtract),
    ("multiply", Operation::Multiply),
    ("divide", Operation::Divide),
    ("sqrt", Operation::Sqrt),
    ("power", Operation::Power),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
    Power,
}

impl Operation {
    /// Look up an operation by its CLI name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Operation> {
        OPERATIONS
            .iter()
            .find(|(table_name, _)| *table_name == name)
            .map(|(_, operation)| *operation)
    }

    pub fn name(self) -> &'static str {
        OPERATIONS
            .iter()
            .find(|(_, operation)| *operation == self)
            .map(|(table_name, _)| *table_name)
            .unwrap_or("?")
    }

    /// Number of operands the operation consumes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Sqrt => 1,
            _ => 2,
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match cli.operation.as_deref() {
        Some(name) => {
            let rendered = evaluate(name, &cli.operands)?;
            output::result(&rendered);
            Ok(())
        }
        None => Ok(()),
    }
}

/// Resolve the operation name, parse the operand tokens, invoke the
/// arithmetic function, and render the result.
///
/// Anything that is neither a table miss nor a domain failure (bad token,
/// wrong operand count) surfaces as the generic [`CliError::Unexpected`].
#[instrument]
pub fn evaluate(name: &str, operands: &[String]) -> CliResult<String> {
    let operation =
        Operation::from_name(name).ok_or_else(|| CliError::UnknownOperation(name.to_string()))?;
    let values = parse_operands(operands)?;
    debug!("operation: {:?}, operands: {:?}", operation, values);

    let result = match (operation, values.as_slice()) {
        (Operation::Add, [a, b]) => add(*a, *b),
        (Operation::Subtract, [a, b]) => subtract(*a, *b),
        (Operation::Multiply, [a, b]) => multiply(*a, *b),
        (Operation::Divide, [a, b]) => divide(*a, *b)?,
        (Operation::Sqrt, [x]) => square_root(*x)?,
        (Operation::Power, [base, exponent]) => power(*base, *exponent),
        _ => {
            return Err(CliError::Unexpected(format!(
                "{} takes exactly {} operand(s) ({} given)",
                operation.name(),
                operation.arity(),
                values.len()
            )))
        }
    };
    Ok(output::format_value(result))
}

fn parse_operands(tokens: &[String]) -> CliResult<Vec<f64>> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| CliError::Unexpected(format!("invalid operand '{}': {}", token, e)))
        })
        .collect()
}
