//! Program builders shared by unit tests.

use synth_ir::{
    CallableId, FqName, FunctionDecl, FunctionSymbol, ParamFlags, Program, TypeId, ValueParameter,
};

use crate::{register_predicates, ProgramHost, SynthConfig};

pub(crate) const GENERATE_OR_NULL: &str = "org.itmo.my.pretty.plugin.GenerateOrNull";
pub(crate) const THROWS: &str = "org.itmo.my.pretty.plugin.Throws";
pub(crate) const GENERATE_OR_THROW: &str = "org.itmo.my.pretty.plugin.GenerateOrThrow";

/// `demo.g` style path to a top-level identity.
pub(crate) fn top_level(program: &Program, path: &str) -> CallableId {
    let interner = program.interner();
    match path.rsplit_once('.') {
        Some((package, name)) => CallableId::top_level(interner.intern(package), interner.intern(name)),
        None => CallableId::top_level(synth_ir::Name::EMPTY, interner.intern(path)),
    }
}

/// Member `name` of `class`, declaring the class on first use.
pub(crate) fn member(program: &mut Program, class: &str, name: &str) -> CallableId {
    let class_id = program.class_id(class);
    if program.class(class_id).is_none() {
        program.declare_class(class_id, None);
        program.add_constructor(class_id, Vec::new());
    }
    CallableId::member(class_id, program.interner().intern(name))
}

pub(crate) fn add_function(
    program: &mut Program,
    callable_id: CallableId,
    params: &[(&str, TypeId)],
    return_type: TypeId,
    markers: &[&str],
) -> FunctionSymbol {
    let symbol = program.symbols().fresh_function();
    let mut decl = FunctionDecl::new(symbol, callable_id, return_type);
    for &(name, ty) in params {
        decl.params.push(ValueParameter::new(
            program.symbols().fresh_param(),
            program.interner().intern(name),
            ty,
        ));
    }
    for marker in markers {
        decl.annotations.push(FqName::new(program.interner(), marker));
    }
    program.add_function(decl)
}

/// Mark parameter `index` of `symbol` with `flags`.
pub(crate) fn set_param_flags(
    program: &mut Program,
    symbol: FunctionSymbol,
    index: usize,
    flags: ParamFlags,
) {
    let mut decl = program
        .function(symbol)
        .cloned()
        .unwrap_or_else(|| panic!("no function {symbol:?}"));
    decl.params[index].flags = flags;
    program.add_function(decl);
}

/// A host over `program` with the default predicates registered.
pub(crate) fn registered_host(program: &Program) -> ProgramHost<'_> {
    let mut host = ProgramHost::new(program);
    register_predicates(&SynthConfig::default(), program.interner(), &mut host);
    host
}
