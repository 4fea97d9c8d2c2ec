//! A chaining symbol table keyed by interned name, with per-entry
//! scope levels.
//!
//! Insertion always prepends to the bucket for its name: the most
//! recently inserted entry for a name is found first by [`SymbolTable::find`].
//! This gives "innermost declaration shadows outer ones" without any
//! special-casing in lookup — it falls out of prepend-and-scan.
//! Scope exit deletes every entry whose `scope_level` equals the level
//! being exited, after checking that every variable/constant at that
//! level was used.

use rustc_hash::FxHashMap;

use crate::types::{ParamKind, Type};
use ifjc_util::Symbol;

#[derive(Debug, Clone)]
pub struct FunctionEntry {
    pub name: Symbol,
    pub defined: bool,
    pub params: Vec<ParamKind>,
    pub return_type: Type,
}

#[derive(Debug, Clone)]
pub struct VariableEntry {
    pub name: Symbol,
    pub declared_type: Type,
    pub is_const: bool,
    pub used: bool,
}

#[derive(Debug, Clone)]
pub enum Entry {
    Function(FunctionEntry),
    Variable(VariableEntry),
}

struct Bucket {
    entry: Entry,
    scope_level: u32,
}

/// The scoped symbol table. Scope 0 holds the fixed built-in
/// functions and is never exited.
pub struct SymbolTable {
    buckets: FxHashMap<Symbol, Vec<Bucket>>,
    current_scope: u32,
}

impl SymbolTable {
    /// Creates a table pre-populated with the 13 fixed built-ins at
    /// scope 0, matching `built_in_func` in the reference
    /// implementation's symbol table.
    pub fn new(interner: &mut ifjc_util::Interner) -> Self {
        let mut table = SymbolTable {
            buckets: FxHashMap::default(),
            current_scope: 0,
        };
        table.install_builtins(interner);
        table
    }

    fn install_builtins(&mut self, interner: &mut ifjc_util::Interner) {
        use ParamKind::{AnyNonNull, Exact};
        use Type::*;

        let builtins: &[(&str, &[ParamKind], Type)] = &[
            ("ifj.readstr", &[], NullableStr),
            ("ifj.readi32", &[], NullableInt),
            ("ifj.readf64", &[], NullableFloat),
            ("ifj.write", &[AnyNonNull], Void),
            ("ifj.i2f", &[Exact(Int)], Float),
            ("ifj.f2i", &[Exact(Float)], Int),
            ("ifj.string", &[AnyNonNull], Str),
            ("ifj.length", &[Exact(Str)], Int),
            ("ifj.concat", &[Exact(Str), Exact(Str)], Str),
            (
                "ifj.substring",
                &[Exact(Str), Exact(Int), Exact(Int)],
                NullableStr,
            ),
            ("ifj.strcmp", &[Exact(Str), Exact(Str)], Int),
            ("ifj.ord", &[Exact(Str), Exact(Int)], Int),
            ("ifj.chr", &[Exact(Int)], Str),
        ];

        for &(name, params, ret) in builtins {
            let sym = interner.intern(name);
            self.insert_function(
                sym,
                FunctionEntry {
                    name: sym,
                    defined: true,
                    params: params.to_vec(),
                    return_type: ret,
                },
            );
        }
    }

    pub fn enter_scope(&mut self) {
        self.current_scope += 1;
    }

    /// Exits the current scope. Returns the name of the first unused
    /// variable/constant found at this level, if any — the caller
    /// turns that into error 9 with the right span. Entries are
    /// always removed, even when an unused variable is reported, so
    /// the table never leaks stale entries up an error path.
    pub fn exit_scope(&mut self) -> Option<Symbol> {
        let level = self.current_scope;
        let mut unused = None;

        for (name, chain) in self.buckets.iter() {
            for bucket in chain.iter() {
                if bucket.scope_level != level {
                    continue;
                }
                if let Entry::Variable(v) = &bucket.entry {
                    if !v.used && unused.is_none() {
                        unused = Some(*name);
                    }
                }
            }
        }

        for chain in self.buckets.values_mut() {
            chain.retain(|b| b.scope_level != level);
        }

        self.current_scope -= 1;
        unused
    }

    pub fn insert_function(&mut self, name: Symbol, entry: FunctionEntry) {
        self.buckets.entry(name).or_default().insert(
            0,
            Bucket {
                entry: Entry::Function(entry),
                scope_level: self.current_scope,
            },
        );
    }

    pub fn insert_variable(&mut self, name: Symbol, entry: VariableEntry) {
        self.buckets.entry(name).or_default().insert(
            0,
            Bucket {
                entry: Entry::Variable(entry),
                scope_level: self.current_scope,
            },
        );
    }

    /// Finds the most recently inserted entry for `name`, across all
    /// currently visible scopes.
    pub fn find(&self, name: Symbol) -> Option<&Entry> {
        self.buckets.get(&name)?.first().map(|b| &b.entry)
    }

    pub fn find_mut(&mut self, name: Symbol) -> Option<&mut Entry> {
        self.buckets.get_mut(&name)?.first_mut().map(|b| &mut b.entry)
    }

    /// Finds an entry for `name` that was introduced exactly at the
    /// current scope level — used to detect redefinition within a
    /// single scope, as opposed to shadowing an outer one.
    pub fn find_in_current_scope(&self, name: Symbol) -> Option<&Entry> {
        let level = self.current_scope;
        self.buckets
            .get(&name)?
            .iter()
            .find(|b| b.scope_level == level)
            .map(|b| &b.entry)
    }

    pub fn current_scope_level(&self) -> u32 {
        self.current_scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifjc_util::Interner;

    #[test]
    fn builtins_are_installed_at_scope_zero() {
        let mut interner = Interner::new();
        let table = SymbolTable::new(&mut interner);
        let write = interner.intern("ifj.write");
        match table.find(write) {
            Some(Entry::Function(f)) => assert_eq!(f.return_type, Type::Void),
            _ => panic!("expected ifj.write to be registered"),
        }
    }

    #[test]
    fn shadowing_returns_the_innermost_entry() {
        let mut interner = Interner::new();
        let mut table = SymbolTable::new(&mut interner);
        let x = interner.intern("x");
        table.insert_variable(
            x,
            VariableEntry {
                name: x,
                declared_type: Type::Int,
                is_const: false,
                used: true,
            },
        );
        table.enter_scope();
        table.insert_variable(
            x,
            VariableEntry {
                name: x,
                declared_type: Type::Float,
                is_const: false,
                used: true,
            },
        );
        match table.find(x) {
            Some(Entry::Variable(v)) => assert_eq!(v.declared_type, Type::Float),
            _ => panic!("expected inner x"),
        }
        table.exit_scope();
        match table.find(x) {
            Some(Entry::Variable(v)) => assert_eq!(v.declared_type, Type::Int),
            _ => panic!("expected outer x after exiting inner scope"),
        }
    }

    #[test]
    fn exit_scope_reports_an_unused_variable() {
        let mut interner = Interner::new();
        let mut table = SymbolTable::new(&mut interner);
        table.enter_scope();
        let y = interner.intern("y");
        table.insert_variable(
            y,
            VariableEntry {
                name: y,
                declared_type: Type::Int,
                is_const: false,
                used: false,
            },
        );
        let unused = table.exit_scope();
        assert_eq!(unused, Some(y));
    }

    #[test]
    fn redefinition_in_the_same_scope_is_detectable() {
        let mut interner = Interner::new();
        let mut table = SymbolTable::new(&mut interner);
        let z = interner.intern("z");
        table.insert_variable(
            z,
            VariableEntry {
                name: z,
                declared_type: Type::Int,
                is_const: false,
                used: true,
            },
        );
        assert!(table.find_in_current_scope(z).is_some());
    }
}
