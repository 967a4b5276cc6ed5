use std::fmt::Display;

use super::expressions::Expr;

/// A function signature: its name and parameter names.
///
/// Parameter names are not checked for uniqueness. An empty name marks the
/// anonymous function wrapping a top-level expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub args: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            args,
        }
    }

    pub fn anonymous() -> Self {
        Prototype::new("", Vec::new())
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub proto: Prototype,
    pub body: Expr,
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "def {} {}", self.proto, self.body)
    }
}

/// One construct handed back to the driver per parse call.
#[derive(Debug, Clone, PartialEq)]
pub enum TopLevel {
    Definition(Function),
    Extern(Prototype),
    /// A bare expression, wrapped in an anonymous zero-argument function
    Expression(Function),
}

impl Display for TopLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevel::Definition(function) => write!(f, "{}", function),
            TopLevel::Extern(proto) => write!(f, "extern {}", proto),
            TopLevel::Expression(function) => write!(f, "{}", function.body),
        }
    }
}
