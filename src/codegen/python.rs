//! Python backend: `run_solution` scaffold plus `typing` import
//! bookkeeping.

use std::collections::BTreeSet;

use crate::codegen::CodeGenerator;
use crate::ir::{Primitive, Ty};
use crate::schema::SignatureSchema;

/// Canonical entry-point name for generated Python scaffolds.
pub const ENTRY_POINT: &str = "run_solution";

#[derive(Debug, Default)]
pub struct PythonGenerator {
    /// `typing` symbols the current render needs. BTreeSet keeps the
    /// import line lexicographic regardless of registration order.
    imports: BTreeSet<&'static str>,
}

impl PythonGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeGenerator for PythonGenerator {
    fn type_expr(&mut self, ty: &Ty) -> String {
        match ty {
            Ty::Primitive { kind } => match kind {
                Primitive::Int => "int".to_string(),
                Primitive::Float => "float".to_string(),
                Primitive::String => "str".to_string(),
                Primitive::Boolean => "bool".to_string(),
                Primitive::Null => "None".to_string(),
            },
            Ty::Array { items } => format!("list[{}]", self.type_expr(items)),
            // Inline objects become dict (could use TypedDict for more precision)
            Ty::Object { .. } => "dict".to_string(),
            Ty::Map {
                key_type,
                value_type,
            } => format!(
                "dict[{}, {}]",
                self.type_expr(key_type),
                self.type_expr(value_type)
            ),
            Ty::Tuple { items } => {
                let mut elems = Vec::new();
                for item in items {
                    elems.push(self.type_expr(item));
                }
                format!("tuple[{}]", elems.join(", "))
            }
            Ty::Union { types } => {
                // Simplify T | None to Optional[T]
                let (non_null, has_null) = Ty::split_nullable(types);
                if has_null && non_null.len() == 1 {
                    self.imports.insert("Optional");
                    return format!("Optional[{}]", self.type_expr(non_null[0]));
                }
                self.imports.insert("Union");
                let mut arms = Vec::new();
                for t in types {
                    arms.push(self.type_expr(t));
                }
                format!("Union[{}]", arms.join(", "))
            }
            // Forward reference as a string literal, valid before (or
            // without) the named declaration.
            Ty::Reference { name } => format!("\"{name}\""),
        }
    }

    fn type_declarations(&mut self, schema: &SignatureSchema) -> String {
        let mut decls = Vec::new();
        for named in &schema.named_types {
            match &named.definition {
                Ty::Object { properties } => {
                    let mut members = Vec::new();
                    for (name, ty) in properties {
                        members.push(format!("    {name}: {}", self.type_expr(ty)));
                    }
                    decls.push(format!("class {}:\n{}", named.name, members.join("\n")));
                }
                other => decls.push(format!("{} = {}", named.name, self.type_expr(other))),
            }
        }
        decls.join("\n\n")
    }

    fn scaffold(&mut self, schema: &SignatureSchema) -> String {
        let mut params = Vec::new();
        for param in &schema.parameters {
            let ty = self.type_expr(&param.ty);
            if param.optional {
                self.imports.insert("Optional");
                params.push(format!("{}: Optional[{ty}] = None", param.name));
            } else {
                params.push(format!("{}: {ty}", param.name));
            }
        }
        let return_type = self.type_expr(&schema.return_type);
        format!(
            "def {ENTRY_POINT}({}) -> {return_type}:\n    # TODO: implement your solution here\n    raise NotImplementedError()",
            params.join(", ")
        )
    }

    fn preamble(&self) -> Option<String> {
        if self.imports.is_empty() {
            return None;
        }
        let symbols = self.imports.iter().copied().collect::<Vec<_>>();
        Some(format!("from typing import {}", symbols.join(", ")))
    }

    fn reset(&mut self) {
        self.imports.clear();
    }
}

// ------------------------------- Tests ------------------------------------ //
