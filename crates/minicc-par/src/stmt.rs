//! Statement parsing: declarations, control flow, blocks, and expression
//! statements.

use std::io::Read;

use minicc_lex::TokenKind;

use crate::ast::Node;
use crate::items::data_type_for;
use crate::Parser;

impl<'a, R: Read> Parser<'a, R> {
    /// Parses one statement, dispatching on the current token.
    ///
    /// Returns `None` when nothing was produced and the caller should run
    /// panic-mode recovery; the failing token has deliberately not been
    /// consumed by then, so recovery is what guarantees forward progress.
    pub(crate) fn parse_statement(&mut self) -> Option<Node> {
        match self.current_kind() {
            TokenKind::Int | TokenKind::Char | TokenKind::Void => self.parse_declaration(),
            TokenKind::If => Some(self.parse_if_statement()),
            TokenKind::While => Some(self.parse_while_statement()),
            TokenKind::Return => Some(self.parse_return_statement()),
            TokenKind::LBrace => Some(self.parse_compound_statement()),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a local variable declaration beginning at its type
    /// specifier.
    pub(crate) fn parse_declaration(&mut self) -> Option<Node> {
        let data_type = data_type_for(self.current_kind());
        self.advance();

        if !self.check(TokenKind::Identifier) {
            self.error("Expected identifier in variable declaration");
            return None;
        }
        let name = self.current().lexeme.clone();
        self.advance();

        Some(self.parse_variable_tail(name, data_type))
    }

    /// Parses a `{ ... }` block, recovering at statement granularity so
    /// one bad statement does not take the rest of the block with it.
    pub(crate) fn parse_compound_statement(&mut self) -> Node {
        let mut block = Node::compound_stmt();

        self.expect(TokenKind::LBrace);

        while !self.check(TokenKind::RBrace) && !self.check(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => block.push_child(statement),
                None => self.recover_to_stmt_sync(),
            }
        }

        self.expect(TokenKind::RBrace);

        block
    }

    /// Parses `if (cond) stmt (else stmt)?`.
    ///
    /// The dangling else resolves itself: the recursive call for the if
    /// branch greedily claims an `else` before this level ever sees it, so
    /// an `else` binds to the nearest unmatched `if`.
    pub(crate) fn parse_if_statement(&mut self) -> Node {
        self.expect(TokenKind::If);
        self.expect(TokenKind::LParen);

        let condition = self.parse_expression().map(Box::new);

        self.expect(TokenKind::RParen);

        let if_branch = self.parse_statement().map(Box::new);

        let else_branch = if self.eat(TokenKind::Else) {
            self.parse_statement().map(Box::new)
        } else {
            None
        };

        Node::IfStmt {
            condition,
            if_branch,
            else_branch,
        }
    }

    /// Parses `while (cond) stmt`.
    pub(crate) fn parse_while_statement(&mut self) -> Node {
        self.expect(TokenKind::While);
        self.expect(TokenKind::LParen);

        let condition = self.parse_expression().map(Box::new);

        self.expect(TokenKind::RParen);

        let body = self.parse_statement().map(Box::new);

        Node::WhileStmt { condition, body }
    }

    /// Parses `return expr? ;`.
    pub(crate) fn parse_return_statement(&mut self) -> Node {
        self.expect(TokenKind::Return);

        let value = if !self.check(TokenKind::Semicolon) {
            self.parse_expression().map(Box::new)
        } else {
            None
        };

        self.expect(TokenKind::Semicolon);

        Node::ReturnStmt { value }
    }

    /// Parses an expression statement, which may be just `;`.
    ///
    /// When no expression can be started at all, returns `None` without
    /// consuming, handing the offending token to recovery.
    pub(crate) fn parse_expression_statement(&mut self) -> Option<Node> {
        if self.eat(TokenKind::Semicolon) {
            return Some(Node::ExprStmt { expr: None });
        }

        match self.parse_expression() {
            Some(expr) => {
                self.expect(TokenKind::Semicolon);
                Some(Node::ExprStmt {
                    expr: Some(Box::new(expr)),
                })
            },
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::Parser;
    use minicc_lex::Lexer;
    use minicc_util::Handler;

    fn parse(source: &str) -> (Node, Handler) {
        let handler = Handler::new();
        let lexer = Lexer::new(source.as_bytes(), &handler);
        let mut parser = Parser::new(lexer, &handler);
        let program = parser.parse_program();
        (program, handler)
    }

    /// The body of the first function in the parsed program.
    fn body_of(program: &Node) -> &Node {
        match &program.children()[0] {
            Node::Function { body, .. } => body.as_ref().expect("function has a body"),
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body() {
        let (program, handler) = parse("void f(void) { }");
        assert_eq!(handler.error_count(), 0);
        assert_eq!(body_of(&program).children().len(), 0);
    }

    #[test]
    fn test_local_declaration_with_initializer() {
        let (program, handler) = parse("int f(void) { int x = 3; }");
        assert_eq!(handler.error_count(), 0);
        match &body_of(&program).children()[0] {
            Node::VariableDecl { name, initializer, .. } => {
                assert_eq!(name, "x");
                assert_eq!(
                    initializer.as_deref(),
                    Some(&Node::Integer { value: 3 })
                );
            },
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_statement() {
        let (program, handler) = parse("void f(void) { ; ; }");
        assert_eq!(handler.error_count(), 0);
        let body = body_of(&program);
        assert_eq!(body.children().len(), 2);
        assert_eq!(body.children()[0], Node::ExprStmt { expr: None });
    }

    #[test]
    fn test_nested_compound() {
        let (program, handler) = parse("void f(void) { { { int x; } } }");
        assert_eq!(handler.error_count(), 0);
        let outer = body_of(&program);
        assert_eq!(outer.children().len(), 1);
        let middle = &outer.children()[0];
        assert!(matches!(middle, Node::CompoundStmt { .. }));
        assert_eq!(middle.children().len(), 1);
    }

    #[test]
    fn test_if_without_else() {
        let (program, handler) = parse("void f(void) { if (x) y = 1; }");
        assert_eq!(handler.error_count(), 0);
        match &body_of(&program).children()[0] {
            Node::IfStmt {
                condition,
                if_branch,
                else_branch,
            } => {
                assert!(condition.is_some());
                assert!(if_branch.is_some());
                assert!(else_branch.is_none());
            },
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_if_with_else() {
        let (program, handler) = parse("void f(void) { if (x) y = 1; else y = 2; }");
        assert_eq!(handler.error_count(), 0);
        match &body_of(&program).children()[0] {
            Node::IfStmt { else_branch, .. } => assert!(else_branch.is_some()),
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_else_binds_to_nearest_if() {
        let (program, handler) = parse("void f(void) { if (a) if (b) x = 1; else x = 2; }");
        assert_eq!(handler.error_count(), 0);
        match &body_of(&program).children()[0] {
            Node::IfStmt {
                if_branch,
                else_branch,
                ..
            } => {
                // Outer if has no else; the inner one claimed it.
                assert!(else_branch.is_none());
                match if_branch.as_deref() {
                    Some(Node::IfStmt {
                        else_branch: inner_else,
                        ..
                    }) => assert!(inner_else.is_some()),
                    other => panic!("expected nested if, got {:?}", other),
                }
            },
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_while_statement() {
        let (program, handler) = parse("int f(void) { while (n > 0) { n = n - 1; } return n; }");
        assert_eq!(handler.error_count(), 0);
        let body = body_of(&program);
        assert_eq!(body.children().len(), 2);
        match &body.children()[0] {
            Node::WhileStmt { condition, body } => {
                assert!(condition.is_some());
                assert!(matches!(body.as_deref(), Some(Node::CompoundStmt { .. })));
            },
            other => panic!("expected while, got {:?}", other),
        }
        assert!(matches!(&body.children()[1], Node::ReturnStmt { value: Some(_) }));
    }

    #[test]
    fn test_return_without_value() {
        let (program, handler) = parse("void f(void) { return; }");
        assert_eq!(handler.error_count(), 0);
        assert_eq!(
            body_of(&program).children()[0],
            Node::ReturnStmt { value: None }
        );
    }

    #[test]
    fn test_if_condition_error_leaves_null_slot() {
        let (program, handler) = parse("void f(void) { if () x = 1; }");
        assert!(handler.error_count() >= 1);
        match &body_of(&program).children()[0] {
            Node::IfStmt { condition, if_branch, .. } => {
                assert!(condition.is_none());
                assert!(if_branch.is_some());
            },
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_recovery_makes_progress() {
        // The stray `)` can start no statement; recovery must consume it
        // (and everything up to the `;`) and continue with the rest of
        // the block instead of re-examining the same token forever.
        let (program, handler) = parse("void f(void) { ) ; int x; }");
        assert!(handler.error_count() >= 1);
        let body = body_of(&program);
        assert_eq!(body.children().len(), 1);
        assert!(matches!(&body.children()[0], Node::VariableDecl { .. }));
    }

    #[test]
    fn test_recovery_consumes_terminating_semicolon() {
        let (program, handler) = parse("void f(void) { @ 1 2 ; int x; }");
        assert!(handler.error_count() >= 1);
        let body = body_of(&program);
        assert!(body
            .children()
            .iter()
            .any(|s| matches!(s, Node::VariableDecl { .. })));
    }

    #[test]
    fn test_missing_identifier_in_declaration() {
        let (program, handler) = parse("void f(void) { int ; int x; }");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.message == "Expected identifier in variable declaration"));
        let body = body_of(&program);
        assert_eq!(body.children().len(), 1);
    }

    #[test]
    fn test_unclosed_block_stops_at_eof() {
        let (program, handler) = parse("void f(void) { int x;");
        assert!(handler.error_count() >= 1);
        assert_eq!(body_of(&program).children().len(), 1);
    }
}
