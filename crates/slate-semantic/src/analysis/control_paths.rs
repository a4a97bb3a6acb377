//! Exhaustive-return analysis over a function body.
//!
//! The body is mirrored into a small tree holding only the statements that
//! matter for control flow: returns, if chains, while loops and nested blocks.
//! Each node gets a verdict, "every path through here returns", computed once
//! from the leaves up.

use slate_parser::{Block, If, Statement, While};

/// Index of a node in a [`ControlPathTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Block,
    /// An `if` with its `else if` branches; children are the branch bodies.
    IfChain { has_else: bool },
    /// A `while`; its single child is the loop body.
    WhileLoop,
    ReturnLeaf,
}

#[derive(Debug)]
struct ControlNode {
    kind: ControlKind,
    children: Vec<NodeId>,
    returns: bool,
}

/// Control-flow skeleton of one function body.
#[derive(Debug)]
pub struct ControlPathTree {
    nodes: Vec<ControlNode>,
    root: NodeId,
}

impl ControlPathTree {
    /// Builds the tree for `body` and computes every verdict.
    pub fn build(body: &Block) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        tree.root = tree.add_block(body);
        tree.resolve();
        tree
    }

    fn push(&mut self, kind: ControlKind, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ControlNode {
            kind,
            children,
            returns: false,
        });
        id
    }

    fn add_block(&mut self, block: &Block) -> NodeId {
        let children = block
            .statements
            .iter()
            .filter_map(|statement| self.add_statement(statement))
            .collect();
        self.push(ControlKind::Block, children)
    }

    fn add_statement(&mut self, statement: &Statement) -> Option<NodeId> {
        match statement {
            Statement::Return { .. } => Some(self.push(ControlKind::ReturnLeaf, Vec::new())),
            Statement::Block(block) => Some(self.add_block(block)),
            Statement::If(if_stmt) => Some(self.add_if(if_stmt)),
            Statement::While(while_loop) => Some(self.add_while(while_loop)),
            _ => None,
        }
    }

    fn add_if(&mut self, if_stmt: &If) -> NodeId {
        let mut children: Vec<NodeId> = if_stmt
            .branches
            .iter()
            .map(|branch| self.add_block(&branch.block))
            .collect();
        if let Some(else_block) = &if_stmt.else_block {
            children.push(self.add_block(else_block));
        }
        self.push(
            ControlKind::IfChain {
                has_else: if_stmt.has_else(),
            },
            children,
        )
    }

    fn add_while(&mut self, while_loop: &While) -> NodeId {
        let body = self.add_block(&while_loop.body);
        self.push(ControlKind::WhileLoop, vec![body])
    }

    /// Children are always pushed before their parent, so one pass in
    /// index order sees every child's verdict before it is needed.
    fn resolve(&mut self) {
        for index in 0..self.nodes.len() {
            let returns = self.compute(&self.nodes[index]);
            self.nodes[index].returns = returns;
        }
    }

    fn compute(&self, node: &ControlNode) -> bool {
        match node.kind {
            ControlKind::ReturnLeaf => true,
            ControlKind::IfChain { has_else } => {
                has_else && node.children.iter().all(|&child| self.returns(child))
            }
            ControlKind::Block | ControlKind::WhileLoop => match node.children.as_slice() {
                [] => false,
                [only] => self.returns(*only),
                children => children
                    .iter()
                    .filter(|&&child| !self.is_open_if(child))
                    .any(|&child| self.returns(child)),
            },
        }
    }

    fn is_open_if(&self, id: NodeId) -> bool {
        matches!(
            self.nodes[id.0].kind,
            ControlKind::IfChain { has_else: false }
        )
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, id: NodeId) -> ControlKind {
        self.nodes[id.0].kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Whether every path through the node ends in a return.
    pub fn returns(&self, id: NodeId) -> bool {
        self.nodes[id.0].returns
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Returns whether every path through `body` ends in a return statement.
pub fn returns_on_all_paths(body: &Block) -> bool {
    let tree = ControlPathTree::build(body);
    tree.returns(tree.root())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_parser::Function;

    fn body_of(source: &str) -> Block {
        let tokens = slate_lexer::tokenize(source).unwrap();
        let program = slate_parser::parse(&tokens).unwrap();
        match program.statements.into_iter().next() {
            Some(Statement::Function(Function { body, .. })) => body,
            other => panic!("Expected function, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_does_not_return() {
        let body = body_of("fn f() -> int { }");
        let tree = ControlPathTree::build(&body);

        assert_eq!(tree.len(), 1);
        assert!(!tree.returns(tree.root()));
    }

    #[test]
    fn test_plain_statements_make_no_nodes() {
        let body = body_of("fn f() -> int { let x: int = 1; x = 2; return x; }");
        let tree = ControlPathTree::build(&body);

        assert_eq!(tree.children(tree.root()).len(), 1);
        assert!(returns_on_all_paths(&body));
    }

    #[test]
    fn test_if_without_else() {
        let body = body_of("fn f(a: bool) -> int { if (a) { return 1; } }");
        assert!(!returns_on_all_paths(&body));
    }

    #[test]
    fn test_if_with_else() {
        let body = body_of(
            "fn f(a: bool) -> int { if (a) { return 1; } else { return 2; } }",
        );
        let tree = ControlPathTree::build(&body);

        let chain = tree.children(tree.root())[0];
        assert_eq!(tree.kind(chain), ControlKind::IfChain { has_else: true });
        assert!(tree.returns(chain));
    }

    #[test]
    fn test_if_chain_with_missing_branch_return() {
        let body = body_of(
            "fn f(a: bool, b: bool) -> int {
                if (a) { return 1; } else if (b) { putInt(2); } else { return 3; }
            }",
        );
        assert!(!returns_on_all_paths(&body));
    }

    #[test]
    fn test_open_if_followed_by_return() {
        let body = body_of("fn f(a: bool) -> int { if (a) { return 1; } return 2; }");
        assert!(returns_on_all_paths(&body));
    }

    #[test]
    fn test_nested_blocks() {
        let body = body_of("fn f() -> int { { { return 1; } } }");
        assert!(returns_on_all_paths(&body));
    }

    #[test]
    fn test_while_inherits_body_verdict() {
        let returning = body_of("fn f(a: bool) -> int { while (a) { return 1; } }");
        let tree = ControlPathTree::build(&returning);
        let loop_node = tree.children(tree.root())[0];
        assert_eq!(tree.kind(loop_node), ControlKind::WhileLoop);
        assert!(returns_on_all_paths(&returning));

        let empty = body_of("fn f(a: bool) -> int { while (a) { } }");
        assert!(!returns_on_all_paths(&empty));
    }
}
