//! Control flow type checking (if, while, break, continue).

use crate::checker::core::TypeChecker;
use crate::checker::loops::LoopContext;
use slate_core::{Error, Result, Span};
use slate_parser::control_flow::{If, While};
use tracing::trace;

impl TypeChecker {
    /// Checks an if statement with its `else if` and `else` branches.
    ///
    /// All conditions are validated before any branch body.
    pub(crate) fn check_if(&mut self, if_stmt: &If) -> Result<()> {
        for (index, branch) in if_stmt.branches.iter().enumerate() {
            let construct = if index == 0 { "if" } else { "else if" };
            self.check_bool_condition(&branch.condition, construct, branch.span)?;
        }

        for branch in &if_stmt.branches {
            self.check_block(&branch.block)?;
        }
        if let Some(else_block) = &if_stmt.else_block {
            self.check_block(else_block)?;
        }

        Ok(())
    }

    /// Checks a while loop.
    pub(crate) fn check_while(&mut self, while_loop: &While) -> Result<()> {
        self.check_bool_condition(&while_loop.condition, "while", while_loop.span)?;

        self.loop_stack.push(LoopContext::new(while_loop.span));
        let body = self.check_block(&while_loop.body);
        let context = self.loop_stack.pop();
        body?;

        if let Some(context) = context {
            trace!(
                line = context.span.line(),
                has_break = context.has_break,
                "loop checked"
            );
        }
        Ok(())
    }

    /// Checks a break statement.
    pub(crate) fn check_break(&mut self, span: Span) -> Result<()> {
        let context = self.loop_stack.last_mut().ok_or_else(|| {
            Error::IllegalConstruct("Break statement must be within a loop.".to_string(), span)
        })?;
        context.has_break = true;
        Ok(())
    }

    /// Checks a continue statement.
    pub(crate) fn check_continue(&self, span: Span) -> Result<()> {
        if self.loop_stack.is_empty() {
            return Err(Error::IllegalConstruct(
                "Continue statement must be within a loop.".to_string(),
                span,
            ));
        }
        Ok(())
    }
}
