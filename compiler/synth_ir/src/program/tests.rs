use pretty_assertions::assert_eq;

use super::*;
use crate::{CallableId, ParamSymbol};

#[test]
fn test_new_knows_throwable() {
    let program = Program::new();
    let builtins = program.builtins();
    assert_eq!(
        builtins.throwable_class.display(program.interner()),
        THROWABLE
    );
    assert_eq!(program.types().class_of(builtins.throwable), Some(builtins.throwable_class));
    assert!(program.no_arg_constructor(builtins.throwable_class).is_some());
}

#[test]
fn test_with_std_hierarchy() {
    let program = Program::with_std();
    let throwable = program.builtins().throwable_class;
    let illegal_state = program.class_id("java.lang.IllegalStateException");
    let exception = program.class_id("java.lang.Exception");

    assert!(program.is_subclass(illegal_state, throwable));
    assert!(program.is_subclass(illegal_state, exception));
    assert!(!program.is_subclass(exception, illegal_state));
    assert!(program.no_arg_constructor(illegal_state).is_some());
}

#[test]
fn test_no_arg_constructor_skips_parameterized() {
    let mut program = Program::new();
    let class = program.class_id("demo.Failure");
    program.declare_class(class, Some(program.builtins().throwable_class));

    let message = ValueParameter::new(
        ParamSymbol::from_raw(100),
        program.interner().intern("message"),
        TypeId::STRING,
    );
    program.add_constructor(class, vec![message]);
    assert_eq!(program.no_arg_constructor(class), None);

    let no_arg = program.add_constructor(class, Vec::new());
    assert_eq!(program.no_arg_constructor(class), Some(no_arg));
}

#[test]
fn test_no_arg_constructor_unknown_class() {
    let program = Program::new();
    let missing = program.class_id("demo.Missing");
    assert_eq!(program.no_arg_constructor(missing), None);
}

#[test]
fn test_functions_keep_declaration_order() {
    let mut program = Program::new();
    let package = program.interner().intern("demo");
    let names = ["b", "a", "c"];
    for name in names {
        let id = CallableId::top_level(package, program.interner().intern(name));
        let symbol = program.symbols().fresh_function();
        program.add_function(FunctionDecl::new(symbol, id, TypeId::UNIT));
    }

    let order: Vec<&str> = program
        .functions()
        .map(|f| program.interner().lookup(f.name()))
        .collect();
    assert_eq!(order, names);
}
