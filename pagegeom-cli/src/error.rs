use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("{message}"))]
    Syntax { message: String },

    #[snafu(display("{source}"))]
    Geometry { source: pagegeom::Error },

    #[snafu(display("Unsupported operand types for {op}: {lhs} and {rhs}"))]
    Unsupported {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[snafu(display("Unsupported operand type for unary {op}: {operand}"))]
    UnsupportedUnary {
        op: &'static str,
        operand: &'static str,
    },

    #[snafu(display("Can't infer a geometry type from {got} values"))]
    Arity { got: usize },

    #[snafu(display("Division of number by zero"))]
    ZeroDivisor,

    #[snafu(display("Unknown paper format: {name}"))]
    UnknownPaper { name: String },
}
