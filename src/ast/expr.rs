use std::fmt;

use crate::{ast::Literal, schema::DataType};

/// One argument expression of an aggregate call, as handed over by the
/// planner. Field references already carry their resolved type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    Field { name: String, ty: DataType },
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn field(name: impl Into<String>, ty: DataType) -> Self {
        Expr::Field { name: name.into(), ty }
    }

    /// Type the planner feeds into `Op::data_type` for this argument.
    pub fn data_type(&self) -> DataType {
        match self {
            Expr::Literal(literal) => DataType::of_literal(literal),
            Expr::Field { ty, .. } => *ty,
        }
    }

    /// The value of a string literal, `None` for any other expression kind.
    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(literal) => literal.as_str(),
            Expr::Field { .. } => None,
        }
    }

    pub fn as_string_literal_mut(&mut self) -> Option<&mut String> {
        match self {
            Expr::Literal(Literal::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(l) => write!(f, "{}", l),
            Expr::Field { name, .. } => write!(f, "{}", name),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(l) => write!(f, "Literal({:?})", l),
            Expr::Field { name, ty } => write!(f, "Field({}::{})", name, ty),
        }
    }
}
