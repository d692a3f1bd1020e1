//! Plain-text rendering of captured IR, for debugging and golden tests.

use strata_ir::{BinaryOp, Expr, ExprId, Interner, ModelIr, Stmt, StmtId};

/// Renders an expression tree to text.
///
/// Binary expressions are fully parenthesized so the rendered text mirrors
/// the captured tree shape rather than any precedence rules.
pub fn render_expr(ir: &ModelIr, interner: &Interner, id: ExprId) -> String {
    match &ir.exprs[id] {
        Expr::Const(value) => value.to_string(),
        Expr::NamedConst(konst) => interner.resolve(ir.consts[*konst].name).to_owned(),
        Expr::Var(var) => interner.resolve(ir.vars[*var].name).to_owned(),
        Expr::Port(port) => interner.resolve(ir.ports[*port].name).to_owned(),
        Expr::MemCell { index } => {
            format!("memory[{}]", render_expr(ir, interner, *index))
        }
        Expr::Binary { op, lhs, rhs } => format!(
            "({} {} {})",
            render_expr(ir, interner, *lhs),
            op_symbol(*op),
            render_expr(ir, interner, *rhs)
        ),
    }
}

/// Renders a statement to text.
pub fn render_stmt(ir: &ModelIr, interner: &Interner, id: StmtId) -> String {
    match &ir.stmts[id] {
        Stmt::Assign { target, value } => format!(
            "{} = {}",
            render_expr(ir, interner, *target),
            render_expr(ir, interner, *value)
        ),
        Stmt::If {
            predicate,
            then_stmt,
            else_stmt,
        } => {
            let mut text = format!(
                "if {} {{ {} }}",
                render_expr(ir, interner, *predicate),
                render_stmt(ir, interner, *then_stmt)
            );
            if let Some(else_stmt) = else_stmt {
                text.push_str(&format!(" else {{ {} }}", render_stmt(ir, interner, *else_stmt)));
            }
            text
        }
        Stmt::Return { values } => {
            let rendered: Vec<String> = values
                .iter()
                .map(|v| render_expr(ir, interner, *v))
                .collect();
            format!("return {}", rendered.join(", "))
        }
    }
}

fn op_symbol(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Mod => "%",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Le => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    }
}
