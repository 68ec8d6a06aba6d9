use super::Var;
use crate::error;
use crate::lang::{ast::Expression, Error};

type Result<T> = std::result::Result<T, Error>;

impl Expression {
    /// Integer evaluation. Division truncates toward zero.
    pub fn eval(&self, vars: &Var) -> Result<i32> {
        match self {
            Expression::Integer(n) => Ok(*n),
            Expression::Var(name) => vars.fetch(name),
            Expression::Add(lhs, rhs) => checked(lhs.eval(vars)?.checked_add(rhs.eval(vars)?)),
            Expression::Subtract(lhs, rhs) => checked(lhs.eval(vars)?.checked_sub(rhs.eval(vars)?)),
            Expression::Multiply(lhs, rhs) => checked(lhs.eval(vars)?.checked_mul(rhs.eval(vars)?)),
            Expression::Divide(lhs, rhs) => {
                let lhs = lhs.eval(vars)?;
                let rhs = rhs.eval(vars)?;
                if rhs == 0 {
                    return Err(error!(DivideByZero));
                }
                checked(lhs.checked_div(rhs))
            }
        }
    }
}

fn checked(n: Option<i32>) -> Result<i32> {
    n.ok_or_else(|| error!(Overflow))
}
