//! Types and the scoped symbol table.
//!
//! The symbol table is the one subsystem whose chaining/shadowing
//! behaviour is carried over from the reference implementation almost
//! unchanged: callers depend on "most recent definition wins" and
//! "redefinition is only checked within the current scope" holding
//! exactly.

pub mod symtable;
pub mod types;

pub use symtable::{Entry, FunctionEntry, SymbolTable, VariableEntry};
pub use types::Type;
