//! TypeScript backend: `runSolution` scaffold. Every rendering idiom here
//! is ambient in TypeScript, so import accumulation is a permanent no-op
//! and the preamble is always omitted.

use crate::codegen::CodeGenerator;
use crate::ir::{Primitive, Ty};
use crate::schema::SignatureSchema;

/// Canonical entry-point name for generated TypeScript scaffolds.
pub const ENTRY_POINT: &str = "runSolution";

#[derive(Debug, Default)]
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn type_expr(&mut self, ty: &Ty) -> String {
        match ty {
            Ty::Primitive { kind } => match kind {
                Primitive::Int | Primitive::Float => "number".to_string(),
                Primitive::String => "string".to_string(),
                Primitive::Boolean => "boolean".to_string(),
                Primitive::Null => "null".to_string(),
            },
            Ty::Array { items } => format!("{}[]", self.type_expr(items)),
            Ty::Object { properties } => {
                let mut props = Vec::new();
                for (name, ty) in properties {
                    props.push(format!("{name}: {}", self.type_expr(ty)));
                }
                format!("{{ {} }}", props.join("; "))
            }
            Ty::Map {
                key_type,
                value_type,
            } => format!(
                "Record<{}, {}>",
                self.type_expr(key_type),
                self.type_expr(value_type)
            ),
            Ty::Tuple { items } => {
                let mut elems = Vec::new();
                for item in items {
                    elems.push(self.type_expr(item));
                }
                format!("[{}]", elems.join(", "))
            }
            Ty::Union { types } => {
                // Canonicalize nullable unions with the null arm last, so
                // both declaration orders render the same text.
                let (non_null, has_null) = Ty::split_nullable(types);
                if has_null && non_null.len() == 1 {
                    return format!("{} | null", self.type_expr(non_null[0]));
                }
                let mut arms = Vec::new();
                for t in types {
                    arms.push(self.type_expr(t));
                }
                arms.join(" | ")
            }
            Ty::Reference { name } => name.clone(),
        }
    }

    fn type_declarations(&mut self, schema: &SignatureSchema) -> String {
        let mut decls = Vec::new();
        for named in &schema.named_types {
            match &named.definition {
                Ty::Object { properties } => {
                    let mut members = Vec::new();
                    for (name, ty) in properties {
                        members.push(format!("  {name}: {};", self.type_expr(ty)));
                    }
                    decls.push(format!(
                        "interface {} {{\n{}\n}}",
                        named.name,
                        members.join("\n")
                    ));
                }
                other => decls.push(format!("type {} = {};", named.name, self.type_expr(other))),
            }
        }
        decls.join("\n\n")
    }

    fn scaffold(&mut self, schema: &SignatureSchema) -> String {
        let mut params = Vec::new();
        for param in &schema.parameters {
            let marker = if param.optional { "?" } else { "" };
            params.push(format!(
                "{}{marker}: {}",
                param.name,
                self.type_expr(&param.ty)
            ));
        }
        let return_type = self.type_expr(&schema.return_type);
        format!(
            "function {ENTRY_POINT}({}): {return_type} {{\n  // TODO: implement your solution here\n  throw new Error(\"Not implemented\");\n}}",
            params.join(", ")
        )
    }

    fn preamble(&self) -> Option<String> {
        None
    }

    fn reset(&mut self) {}
}

// ------------------------------- Tests ------------------------------------ //
