//! Symbol-to-declaration lookup shared by the printer, the validator and
//! the host boundary.

use crate::{ConstructorDecl, ConstructorSymbol, FunctionDecl, FunctionSymbol, Program};

/// Read access to resolved declarations by symbol.
pub trait DeclLookup {
    fn function(&self, symbol: FunctionSymbol) -> Option<&FunctionDecl>;
    fn constructor(&self, symbol: ConstructorSymbol) -> Option<&ConstructorDecl>;
}

impl DeclLookup for Program {
    fn function(&self, symbol: FunctionSymbol) -> Option<&FunctionDecl> {
        Program::function(self, symbol)
    }

    fn constructor(&self, symbol: ConstructorSymbol) -> Option<&ConstructorDecl> {
        Program::constructor(self, symbol)
    }
}
