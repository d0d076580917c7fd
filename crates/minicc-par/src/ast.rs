//! AST node definitions and the tree printer.
//!
//! The tree is a single sum type, [`Node`]. List-shaped kinds (`Program`,
//! `ParamList`, `CompoundStmt`, `ArgList`) own an ordered children vector;
//! every other kind owns named child slots. A child slot is
//! `Option<Box<Node>>`: when a sub-parse fails the parent is still built
//! and the empty slot is rendered as `NULL` by the printer, so a partial
//! tree stays printable. Ownership is strictly tree-shaped; dropping a
//! node releases its whole subtree.
//!
//! The printer (the `Display` impl) is the golden-output oracle for the
//! test suite: one line per node, two-space indent per level, child counts
//! on the list-shaped kinds.

use std::fmt;

/// Primitive data types of the source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Void,
    Int,
    Char,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Void => write!(f, "void"),
            DataType::Int => write!(f, "int"),
            DataType::Char => write!(f, "char"),
        }
    }
}

/// Binary operators.
///
/// The bitwise and shift operators are tokenized by the lexer but no
/// expression rule produces them yet; they exist here so the model covers
/// the full operator set of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Shl,
    Shr,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Lte => "<=",
            BinaryOp::Gte => ">=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::BitwiseAnd => "&",
            BinaryOp::BitwiseOr => "|",
            BinaryOp::BitwiseXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        };
        f.write_str(symbol)
    }
}

/// Unary operators, prefix and postfix.
///
/// The pre-increment/decrement forms are part of the model but the grammar
/// only produces the postfix forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    LogicalNot,
    BitwiseNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOp::Negate => "-",
            UnaryOp::LogicalNot => "!",
            UnaryOp::BitwiseNot => "~",
            UnaryOp::PreIncrement => "++",
            UnaryOp::PreDecrement => "--",
            UnaryOp::PostIncrement => "++ (post)",
            UnaryOp::PostDecrement => "-- (post)",
        };
        f.write_str(symbol)
    }
}

/// An AST node.
///
/// Invariants maintained by the parser:
/// - `Program` children are only `Function` or `VariableDecl`;
/// - `ParamList` children are only `Parameter`;
/// - `CompoundStmt` children are only statements;
/// - `ArgList` children are only expressions;
/// - `is_array` implies `array_size >= 0`, where 0 means the programmer
///   omitted the size.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Translation unit: top-level declarations and functions.
    Program {
        children: Vec<Node>,
    },
    /// Function definition or forward declaration (`body` is `None`).
    Function {
        name: String,
        return_type: DataType,
        parameters: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },
    /// Ordered list of `Parameter` nodes.
    ParamList {
        children: Vec<Node>,
    },
    Parameter {
        name: String,
        data_type: DataType,
        is_array: bool,
    },
    /// `{ ... }` block of statements.
    CompoundStmt {
        children: Vec<Node>,
    },
    VariableDecl {
        name: String,
        data_type: DataType,
        is_array: bool,
        array_size: i64,
        initializer: Option<Box<Node>>,
    },
    IfStmt {
        condition: Option<Box<Node>>,
        if_branch: Option<Box<Node>>,
        else_branch: Option<Box<Node>>,
    },
    WhileStmt {
        condition: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },
    ReturnStmt {
        value: Option<Box<Node>>,
    },
    /// Expression statement; `expr` is `None` for the empty statement `;`.
    ExprStmt {
        expr: Option<Box<Node>>,
    },
    BinaryExpr {
        op: BinaryOp,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
    AssignExpr {
        target: Option<Box<Node>>,
        value: Option<Box<Node>>,
    },
    UnaryExpr {
        op: UnaryOp,
        operand: Option<Box<Node>>,
    },
    CallExpr {
        callee: Option<Box<Node>>,
        /// `None` when the call has no arguments at all; otherwise an
        /// `ArgList`.
        arguments: Option<Box<Node>>,
    },
    /// Ordered list of argument expressions.
    ArgList {
        children: Vec<Node>,
    },
    SubscriptExpr {
        array: Option<Box<Node>>,
        index: Option<Box<Node>>,
    },
    Identifier {
        name: String,
    },
    Integer {
        value: i64,
    },
    Character {
        value: u8,
    },
    String {
        value: String,
    },
}

/// Initial capacity for the children vector of list-shaped nodes.
const INITIAL_CHILDREN_CAPACITY: usize = 4;

impl Node {
    /// Creates an empty `Program` node.
    pub fn program() -> Node {
        Node::Program {
            children: Vec::with_capacity(INITIAL_CHILDREN_CAPACITY),
        }
    }

    /// Creates an empty `ParamList` node.
    pub fn param_list() -> Node {
        Node::ParamList {
            children: Vec::with_capacity(INITIAL_CHILDREN_CAPACITY),
        }
    }

    /// Creates an empty `CompoundStmt` node.
    pub fn compound_stmt() -> Node {
        Node::CompoundStmt {
            children: Vec::with_capacity(INITIAL_CHILDREN_CAPACITY),
        }
    }

    /// Creates an empty `ArgList` node.
    pub fn arg_list() -> Node {
        Node::ArgList {
            children: Vec::with_capacity(INITIAL_CHILDREN_CAPACITY),
        }
    }

    /// Appends a child to a list-shaped node.
    ///
    /// On any other kind this is a no-op; list membership is part of the
    /// node kind, not something a caller can create by appending.
    pub fn push_child(&mut self, child: Node) {
        match self {
            Node::Program { children }
            | Node::ParamList { children }
            | Node::CompoundStmt { children }
            | Node::ArgList { children } => children.push(child),
            _ => {},
        }
    }

    /// The ordered children of a list-shaped node, empty for the rest.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Program { children }
            | Node::ParamList { children }
            | Node::CompoundStmt { children }
            | Node::ArgList { children } => children,
            _ => &[],
        }
    }

    fn fmt_indent(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write_indent(f, indent)?;
        match self {
            Node::Program { children } => {
                writeln!(f, "Program ({} children)", children.len())?;
                for child in children {
                    child.fmt_indent(f, indent + 1)?;
                }
            },
            Node::Function {
                name,
                return_type,
                parameters,
                body,
            } => {
                writeln!(f, "Function: {}, Return Type: {}", name, return_type)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Parameters:")?;
                match parameters {
                    Some(parameters) => parameters.fmt_indent(f, indent + 2)?,
                    None => {
                        write_indent(f, indent + 2)?;
                        writeln!(f, "(none)")?;
                    },
                }

                write_indent(f, indent + 1)?;
                writeln!(f, "Body:")?;
                match body {
                    Some(body) => body.fmt_indent(f, indent + 2)?,
                    None => {
                        write_indent(f, indent + 2)?;
                        writeln!(f, "(none - function declaration only)")?;
                    },
                }
            },
            Node::ParamList { children } => {
                writeln!(f, "Parameter List ({} parameters)", children.len())?;
                for child in children {
                    child.fmt_indent(f, indent + 1)?;
                }
            },
            Node::Parameter {
                name,
                data_type,
                is_array,
            } => {
                writeln!(
                    f,
                    "Parameter: {}, Type: {}{}",
                    name,
                    data_type,
                    if *is_array { "[]" } else { "" }
                )?;
            },
            Node::CompoundStmt { children } => {
                writeln!(f, "Compound Statement ({} statements)", children.len())?;
                for child in children {
                    child.fmt_indent(f, indent + 1)?;
                }
            },
            Node::VariableDecl {
                name,
                data_type,
                is_array,
                array_size,
                initializer,
            } => {
                write!(
                    f,
                    "Variable Declaration: {}, Type: {}{}",
                    name,
                    data_type,
                    if *is_array { "[]" } else { "" }
                )?;
                if *is_array && *array_size > 0 {
                    write!(f, "[{}]", array_size)?;
                }
                writeln!(f)?;

                if let Some(initializer) = initializer {
                    write_indent(f, indent + 1)?;
                    writeln!(f, "Initializer:")?;
                    initializer.fmt_indent(f, indent + 2)?;
                }
            },
            Node::IfStmt {
                condition,
                if_branch,
                else_branch,
            } => {
                writeln!(f, "If Statement")?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Condition:")?;
                write_slot(f, condition, indent + 2)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "If Branch:")?;
                write_slot(f, if_branch, indent + 2)?;

                if else_branch.is_some() {
                    write_indent(f, indent + 1)?;
                    writeln!(f, "Else Branch:")?;
                    write_slot(f, else_branch, indent + 2)?;
                }
            },
            Node::WhileStmt { condition, body } => {
                writeln!(f, "While Statement")?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Condition:")?;
                write_slot(f, condition, indent + 2)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Body:")?;
                write_slot(f, body, indent + 2)?;
            },
            Node::ReturnStmt { value } => {
                writeln!(f, "Return Statement")?;

                if let Some(value) = value {
                    write_indent(f, indent + 1)?;
                    writeln!(f, "Value:")?;
                    value.fmt_indent(f, indent + 2)?;
                }
            },
            Node::ExprStmt { expr } => {
                writeln!(f, "Expression Statement")?;

                if let Some(expr) = expr {
                    expr.fmt_indent(f, indent + 1)?;
                }
            },
            Node::BinaryExpr { op, left, right } => {
                writeln!(f, "Binary Expression: {}", op)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Left:")?;
                write_slot(f, left, indent + 2)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Right:")?;
                write_slot(f, right, indent + 2)?;
            },
            Node::AssignExpr { target, value } => {
                writeln!(f, "Assignment Expression")?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Left (target):")?;
                write_slot(f, target, indent + 2)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Right (value):")?;
                write_slot(f, value, indent + 2)?;
            },
            Node::UnaryExpr { op, operand } => {
                writeln!(f, "Unary Expression: {}", op)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Operand:")?;
                write_slot(f, operand, indent + 2)?;
            },
            Node::CallExpr { callee, arguments } => {
                writeln!(f, "Function Call")?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Function:")?;
                write_slot(f, callee, indent + 2)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Arguments:")?;
                match arguments {
                    Some(arguments) => arguments.fmt_indent(f, indent + 2)?,
                    None => {
                        write_indent(f, indent + 2)?;
                        writeln!(f, "(none)")?;
                    },
                }
            },
            Node::ArgList { children } => {
                writeln!(f, "Argument List ({} arguments)", children.len())?;
                for child in children {
                    child.fmt_indent(f, indent + 1)?;
                }
            },
            Node::SubscriptExpr { array, index } => {
                writeln!(f, "Array Subscript")?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Array:")?;
                write_slot(f, array, indent + 2)?;

                write_indent(f, indent + 1)?;
                writeln!(f, "Index:")?;
                write_slot(f, index, indent + 2)?;
            },
            Node::Identifier { name } => {
                writeln!(f, "Identifier: {}", name)?;
            },
            Node::Integer { value } => {
                writeln!(f, "Integer: {}", value)?;
            },
            Node::Character { value } => {
                if (32..=126).contains(value) {
                    writeln!(f, "Character: '{}'", *value as char)?;
                } else {
                    writeln!(f, "Character: '\\x{:02X}'", value)?;
                }
            },
            Node::String { value } => {
                writeln!(f, "String: \"{}\"", value)?;
            },
        }
        Ok(())
    }
}

/// The dump format used as the golden-output oracle.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indent(f, 0)
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        f.write_str("  ")?;
    }
    Ok(())
}

/// Prints an owned child slot, rendering an empty slot as `NULL`.
fn write_slot(f: &mut fmt::Formatter<'_>, slot: &Option<Box<Node>>, indent: usize) -> fmt::Result {
    match slot {
        Some(node) => node.fmt_indent(f, indent),
        None => {
            write_indent(f, indent)?;
            writeln!(f, "NULL")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_child_on_list_node() {
        let mut program = Node::program();
        assert_eq!(program.children().len(), 0);
        program.push_child(Node::Integer { value: 1 });
        program.push_child(Node::Integer { value: 2 });
        assert_eq!(program.children().len(), 2);
    }

    #[test]
    fn test_push_child_on_leaf_is_noop() {
        let mut leaf = Node::Integer { value: 7 };
        leaf.push_child(Node::Integer { value: 8 });
        assert!(leaf.children().is_empty());
        assert_eq!(leaf, Node::Integer { value: 7 });
    }

    #[test]
    fn test_dump_empty_program() {
        assert_eq!(Node::program().to_string(), "Program (0 children)\n");
    }

    #[test]
    fn test_dump_literals() {
        assert_eq!(Node::Integer { value: 42 }.to_string(), "Integer: 42\n");
        assert_eq!(
            Node::Identifier {
                name: "main".to_string()
            }
            .to_string(),
            "Identifier: main\n"
        );
        assert_eq!(
            Node::String {
                value: "hi".to_string()
            }
            .to_string(),
            "String: \"hi\"\n"
        );
    }

    #[test]
    fn test_dump_printable_character() {
        assert_eq!(
            Node::Character { value: b'c' }.to_string(),
            "Character: 'c'\n"
        );
    }

    #[test]
    fn test_dump_nonprintable_character_as_hex() {
        assert_eq!(
            Node::Character { value: b'\n' }.to_string(),
            "Character: '\\x0A'\n"
        );
        assert_eq!(Node::Character { value: 0 }.to_string(), "Character: '\\x00'\n");
        assert_eq!(
            Node::Character { value: 0xFF }.to_string(),
            "Character: '\\xFF'\n"
        );
    }

    #[test]
    fn test_dump_missing_slot_prints_null() {
        let expr = Node::BinaryExpr {
            op: BinaryOp::Add,
            left: Some(Box::new(Node::Integer { value: 1 })),
            right: None,
        };
        assert_eq!(
            expr.to_string(),
            "Binary Expression: +\n  Left:\n    Integer: 1\n  Right:\n    NULL\n"
        );
    }

    #[test]
    fn test_dump_variable_decl_with_array_size() {
        let decl = Node::VariableDecl {
            name: "a".to_string(),
            data_type: DataType::Int,
            is_array: true,
            array_size: 10,
            initializer: None,
        };
        assert_eq!(
            decl.to_string(),
            "Variable Declaration: a, Type: int[][10]\n"
        );
    }

    #[test]
    fn test_dump_variable_decl_with_omitted_size() {
        let decl = Node::VariableDecl {
            name: "a".to_string(),
            data_type: DataType::Char,
            is_array: true,
            array_size: 0,
            initializer: None,
        };
        assert_eq!(decl.to_string(), "Variable Declaration: a, Type: char[]\n");
    }

    #[test]
    fn test_dump_postfix_unary_annotation() {
        let expr = Node::UnaryExpr {
            op: UnaryOp::PostIncrement,
            operand: Some(Box::new(Node::Identifier {
                name: "i".to_string(),
            })),
        };
        assert_eq!(
            expr.to_string(),
            "Unary Expression: ++ (post)\n  Operand:\n    Identifier: i\n"
        );
    }

    #[test]
    fn test_dump_forward_declaration_body() {
        let func = Node::Function {
            name: "f".to_string(),
            return_type: DataType::Void,
            parameters: None,
            body: None,
        };
        assert_eq!(
            func.to_string(),
            "Function: f, Return Type: void\n  Parameters:\n    (none)\n  Body:\n    (none - function declaration only)\n"
        );
    }

    #[test]
    fn test_printer_does_not_mutate() {
        let mut list = Node::arg_list();
        list.push_child(Node::Integer { value: 3 });
        let before = list.clone();
        let _ = list.to_string();
        assert_eq!(list, before);
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(BinaryOp::LogicalAnd.to_string(), "&&");
        assert_eq!(BinaryOp::Shl.to_string(), "<<");
        assert_eq!(UnaryOp::BitwiseNot.to_string(), "~");
        assert_eq!(UnaryOp::PostDecrement.to_string(), "-- (post)");
    }
}
