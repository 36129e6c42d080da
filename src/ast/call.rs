use std::fmt;

use crate::{ast::Expr, schema::DataType};

/// A parsed aggregate function invocation: `name(arg0, arg1, ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self { name: name.into(), args }
    }

    pub fn arg(&self, position: usize) -> Option<&Expr> {
        self.args.get(position)
    }

    pub fn arg_types(&self) -> Vec<DataType> {
        self.args.iter().map(Expr::data_type).collect()
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args.iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({})", self.name, args)
    }
}
