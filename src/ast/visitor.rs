use super::nodes::{BinaryOperator, Node, UnaryOperator};

/// The double-dispatch contract for consuming an AST: one operation per node
/// variant. Evaluators, printers and analyzers implement this trait and are
/// handed child nodes to recurse into as they see fit.
pub trait NodeVisitor {
    fn visit_number(&mut self, value: f64);
    fn visit_variable(&mut self, name: &str);
    fn visit_unary_operator(&mut self, operator: UnaryOperator, operand: &Node);
    fn visit_binary_operator(&mut self, operator: BinaryOperator, left: &Node, right: &Node);
    fn visit_function(&mut self, name: &str, parameters: &[Node]);
}
