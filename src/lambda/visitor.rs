use super::nodes::LambdaExpression;

/// Visitor contract for lambda terms, one operation per variant.
pub trait LambdaVisitor {
    fn visit_variable(&mut self, name: &str);
    fn visit_abstraction(&mut self, parameter: &str, body: &LambdaExpression);
    fn visit_application(&mut self, function: &LambdaExpression, argument: &LambdaExpression);
}
