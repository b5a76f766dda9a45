use repostore::calculator::{self, Calculator};

/// Arithmetic operation selected on the command line
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

pub fn run(operation: Operation, a: f64, b: f64) {
    let calc = Calculator::new();
    let result = match operation {
        Operation::Add => calc.add(a, b),
        Operation::Subtract => calc.subtract(a, b),
        Operation::Multiply => calculator::multiply(a, b),
    };
    println!("{}", result);
}
