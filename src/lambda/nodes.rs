use super::visitor::LambdaVisitor;

/// A node of a lambda calculus term.
#[derive(Debug, Clone, PartialEq)]
pub enum LambdaExpression {
    Variable(String),
    Abstraction {
        parameter: String,
        body: Box<LambdaExpression>,
    },
    Application {
        function: Box<LambdaExpression>,
        argument: Box<LambdaExpression>,
    },
}

impl LambdaExpression {
    pub fn accept(&self, visitor: &mut dyn LambdaVisitor) {
        match self {
            LambdaExpression::Variable(name) => visitor.visit_variable(name),
            LambdaExpression::Abstraction { parameter, body } => {
                visitor.visit_abstraction(parameter, body)
            }
            LambdaExpression::Application { function, argument } => {
                visitor.visit_application(function, argument)
            }
        }
    }
}
