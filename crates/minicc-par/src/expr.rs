//! Expression parsing by precedence climbing: one rule per precedence
//! level, each left-associative except assignment, which recurses on
//! itself to get right associativity.
//!
//! Failure is soft everywhere below statement level. A rule that cannot
//! start an expression reports `Expected expression` and yields `None`;
//! enclosing rules keep going and leave the hole as an empty (`NULL`)
//! child slot, so `x = ;` still produces an assignment node with one error
//! rather than abandoning the statement.

use std::io::Read;

use minicc_lex::TokenKind;

use crate::ast::{BinaryOp, Node, UnaryOp};
use crate::Parser;

impl<'a, R: Read> Parser<'a, R> {
    /// Parses one expression.
    pub(crate) fn parse_expression(&mut self) -> Option<Node> {
        self.parse_assignment_expression()
    }

    /// assignment := logical_or ( '=' assignment )?   (right-associative)
    fn parse_assignment_expression(&mut self) -> Option<Node> {
        let expr = self.parse_logical_or_expression();

        if self.eat(TokenKind::Assign) {
            let value = self.parse_assignment_expression();
            return Some(Node::AssignExpr {
                target: expr.map(Box::new),
                value: value.map(Box::new),
            });
        }

        expr
    }

    /// logical_or := logical_and ( '||' logical_and )*
    fn parse_logical_or_expression(&mut self) -> Option<Node> {
        let mut left = self.parse_logical_and_expression();

        while self.eat(TokenKind::Or) {
            let right = self.parse_logical_and_expression();
            left = Some(Node::BinaryExpr {
                op: BinaryOp::LogicalOr,
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
        }

        left
    }

    /// logical_and := equality ( '&&' equality )*
    fn parse_logical_and_expression(&mut self) -> Option<Node> {
        let mut left = self.parse_equality_expression();

        while self.eat(TokenKind::And) {
            let right = self.parse_equality_expression();
            left = Some(Node::BinaryExpr {
                op: BinaryOp::LogicalAnd,
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
        }

        left
    }

    /// equality := relational ( ('==' | '!=') relational )*
    fn parse_equality_expression(&mut self) -> Option<Node> {
        let mut left = self.parse_relational_expression();

        loop {
            let op = match self.current_kind() {
                TokenKind::Eq => BinaryOp::Eq,
                TokenKind::Neq => BinaryOp::Neq,
                _ => break,
            };
            self.advance();

            let right = self.parse_relational_expression();
            left = Some(Node::BinaryExpr {
                op,
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
        }

        left
    }

    /// relational := additive ( ('<' | '>' | '<=' | '>=') additive )*
    fn parse_relational_expression(&mut self) -> Option<Node> {
        let mut left = self.parse_additive_expression();

        loop {
            let op = match self.current_kind() {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::Lte => BinaryOp::Lte,
                TokenKind::Gte => BinaryOp::Gte,
                _ => break,
            };
            self.advance();

            let right = self.parse_additive_expression();
            left = Some(Node::BinaryExpr {
                op,
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
        }

        left
    }

    /// additive := multiplicative ( ('+' | '-') multiplicative )*
    fn parse_additive_expression(&mut self) -> Option<Node> {
        let mut left = self.parse_multiplicative_expression();

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Subtract,
                _ => break,
            };
            self.advance();

            let right = self.parse_multiplicative_expression();
            left = Some(Node::BinaryExpr {
                op,
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
        }

        left
    }

    /// multiplicative := unary ( ('*' | '/' | '%') unary )*
    fn parse_multiplicative_expression(&mut self) -> Option<Node> {
        let mut left = self.parse_unary_expression();

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOp::Multiply,
                TokenKind::Slash => BinaryOp::Divide,
                TokenKind::Percent => BinaryOp::Modulo,
                _ => break,
            };
            self.advance();

            let right = self.parse_unary_expression();
            left = Some(Node::BinaryExpr {
                op,
                left: left.map(Box::new),
                right: right.map(Box::new),
            });
        }

        left
    }

    /// unary := ('-' | '!' | '~') unary | postfix
    fn parse_unary_expression(&mut self) -> Option<Node> {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Negate,
            TokenKind::Not => UnaryOp::LogicalNot,
            TokenKind::BitNot => UnaryOp::BitwiseNot,
            _ => return self.parse_postfix_expression(),
        };
        self.advance();

        let operand = self.parse_unary_expression();
        Some(Node::UnaryExpr {
            op,
            operand: operand.map(Box::new),
        })
    }

    /// postfix := primary ( '[' expression ']' | '(' args? ')' | '++' | '--' )*
    fn parse_postfix_expression(&mut self) -> Option<Node> {
        let mut expr = self.parse_primary_expression();

        loop {
            match self.current_kind() {
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expression();
                    self.expect(TokenKind::RBracket);
                    expr = Some(Node::SubscriptExpr {
                        array: expr.map(Box::new),
                        index: index.map(Box::new),
                    });
                },
                TokenKind::LParen => {
                    self.advance();
                    let arguments = if !self.check(TokenKind::RParen) {
                        let mut args = Node::arg_list();
                        if let Some(arg) = self.parse_expression() {
                            args.push_child(arg);
                        }
                        while self.eat(TokenKind::Comma) {
                            if let Some(arg) = self.parse_expression() {
                                args.push_child(arg);
                            }
                        }
                        Some(Box::new(args))
                    } else {
                        None
                    };
                    self.expect(TokenKind::RParen);
                    expr = Some(Node::CallExpr {
                        callee: expr.map(Box::new),
                        arguments,
                    });
                },
                TokenKind::Inc => {
                    self.advance();
                    expr = Some(Node::UnaryExpr {
                        op: UnaryOp::PostIncrement,
                        operand: expr.map(Box::new),
                    });
                },
                TokenKind::Dec => {
                    self.advance();
                    expr = Some(Node::UnaryExpr {
                        op: UnaryOp::PostDecrement,
                        operand: expr.map(Box::new),
                    });
                },
                _ => break,
            }
        }

        expr
    }

    /// primary := IDENTIFIER | INTEGER | CHARACTER | STRING | '(' expression ')'
    fn parse_primary_expression(&mut self) -> Option<Node> {
        match self.current_kind() {
            TokenKind::Identifier => {
                let name = self.current().lexeme.clone();
                self.advance();
                Some(Node::Identifier { name })
            },
            TokenKind::Integer => {
                let value = self.current().lexeme.parse().unwrap_or(0);
                self.advance();
                Some(Node::Integer { value })
            },
            TokenKind::Character => {
                let value = self.current().lexeme.as_bytes().first().copied().unwrap_or(0);
                self.advance();
                Some(Node::Character { value })
            },
            TokenKind::String => {
                let value = self.current().lexeme.clone();
                self.advance();
                Some(Node::String { value })
            },
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression();
                self.expect(TokenKind::RParen);
                expr
            },
            _ => {
                self.error("Expected expression");
                None
            },
        }
    }
}
