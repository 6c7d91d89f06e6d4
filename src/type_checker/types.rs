use std::fmt::Display;

/// The four value types of the language. There is no subtyping and no
/// promotion between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Float,
    Bool,
    List,
}

impl VarType {
    /// Resolves a declared type keyword.
    pub fn from_keyword(keyword: &str) -> Option<VarType> {
        match keyword {
            "int" => Some(VarType::Int),
            "float" => Some(VarType::Float),
            "bool" => Some(VarType::Bool),
            "list" => Some(VarType::List),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, VarType::Int | VarType::Float)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Float => "float",
            VarType::Bool => "bool",
            VarType::List => "list",
        }
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

// Expression checking yields `None` for nodes that produce no value (an empty
// value wrapper, or an identifier outside value position). These predicates
// treat such an absent type as matching nothing numeric.

pub fn is_numeric(ty: Option<VarType>) -> bool {
    ty.is_some_and(|ty| ty.is_numeric())
}

pub fn types_equal(a: Option<VarType>, b: Option<VarType>) -> bool {
    a == b
}
