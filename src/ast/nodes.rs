use std::fmt::Display;

use super::visitor::NodeVisitor;

/// A parse node of the abstract syntax tree. The set of variants is closed;
/// operations on the tree live in [`NodeVisitor`] implementations, so adding
/// a variant is a compile-checked change in every visitor.
///
/// Each node exclusively owns its children; a successful parse returns a
/// tree rooted at exactly one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable(String),
    UnaryOperator {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
    BinaryOperator {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    Function {
        name: String,
        parameters: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
}

impl Node {
    /// Forwards to the visitor operation matching this variant. Nodes do no
    /// tree walking themselves; the visitor decides whether and how to
    /// recurse into the children it is handed.
    pub fn accept(&self, visitor: &mut dyn NodeVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Variable(name) => visitor.visit_variable(name),
            Node::UnaryOperator { operator, operand } => {
                visitor.visit_unary_operator(*operator, operand)
            }
            Node::BinaryOperator {
                operator,
                left,
                right,
            } => visitor.visit_binary_operator(*operator, left, right),
            Node::Function { name, parameters } => visitor.visit_function(name, parameters),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        };

        write!(f, "{}", symbol)
    }
}
