//! The rendering contract every target backend satisfies, plus the
//! per-language dispatch entry point.

pub mod python;
pub mod typescript;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::ir::Ty;
use crate::schema::SignatureSchema;

/// Closed set of supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Typescript,
}

/// One implementation per output language. The only mutable state a
/// backend carries is its import accumulator; `starter_code` resets it at
/// the start of every call, so a backend value stays reusable across
/// sequential renders (calls must not share one instance concurrently).
pub trait CodeGenerator {
    /// Render one type node as a type expression for this target,
    /// registering any import symbol the chosen idiom requires.
    ///
    /// Recursion is structural and always terminates: `reference` nodes
    /// render as opaque name tokens and are never expanded.
    fn type_expr(&mut self, ty: &Ty) -> String;

    /// Render the named-type declaration block, one declaration per
    /// schema entry in schema order, joined by blank lines. Empty when
    /// the schema declares no named types; callers omit the block.
    fn type_declarations(&mut self, schema: &SignatureSchema) -> String;

    /// Render the scaffold function under this backend's canonical
    /// entry-point name. The body raises an unconditional not-implemented
    /// signal so a forgotten implementation fails loudly instead of
    /// returning a plausible default.
    fn scaffold(&mut self, schema: &SignatureSchema) -> String;

    /// Import preamble covering every symbol registered so far, in
    /// stable lexicographic order. `None` when nothing was registered.
    fn preamble(&self) -> Option<String>;

    /// Clear the import accumulator.
    fn reset(&mut self);

    /// Full render. Declarations run before the scaffold because both
    /// phases feed the accumulator and the preamble must reflect their
    /// union. Present blocks are separated by exactly one blank line;
    /// omitted blocks leave no stray blank lines behind.
    fn starter_code(&mut self, schema: &SignatureSchema) -> String {
        self.reset();
        let declarations = self.type_declarations(schema);
        let scaffold = self.scaffold(schema);

        let mut blocks = Vec::new();
        if let Some(preamble) = self.preamble() {
            blocks.push(preamble);
        }
        if !declarations.is_empty() {
            blocks.push(declarations);
        }
        blocks.push(scaffold);
        blocks.join("\n\n")
    }
}

/// Render starter code for one schema in one target language.
///
/// Constructs a fresh backend per call, so concurrent callers never share
/// accumulator state.
pub fn starter_code(schema: &SignatureSchema, language: Language) -> String {
    match language {
        Language::Python => python::PythonGenerator::new().starter_code(schema),
        Language::Typescript => typescript::TypeScriptGenerator::new().starter_code(schema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Primitive;
    use crate::schema::Parameter;

    fn int() -> Ty {
        Ty::Primitive {
            kind: Primitive::Int,
        }
    }

    fn example_schema() -> SignatureSchema {
        SignatureSchema {
            parameters: vec![Parameter {
                name: "nums".into(),
                ty: Ty::Array {
                    items: Box::new(int()),
                },
                optional: false,
            }],
            return_type: Ty::Primitive {
                kind: Primitive::Boolean,
            },
            named_types: Vec::new(),
        }
    }

    #[test]
    fn renders_identically_on_fresh_backends() {
        let schema = example_schema();
        for language in [Language::Python, Language::Typescript] {
            let first = starter_code(&schema, language);
            let second = starter_code(&schema, language);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn python_end_to_end_example() {
        let out = starter_code(&example_schema(), Language::Python);
        assert_eq!(
            out,
            "def run_solution(nums: list[int]) -> bool:\n    # TODO: implement your solution here\n    raise NotImplementedError()"
        );
    }

    #[test]
    fn typescript_end_to_end_example() {
        let out = starter_code(&example_schema(), Language::Typescript);
        assert_eq!(
            out,
            "function runSolution(nums: number[]): boolean {\n  // TODO: implement your solution here\n  throw new Error(\"Not implemented\");\n}"
        );
    }

    #[test]
    fn backend_values_are_reusable_across_sequential_calls() {
        let schema = example_schema();
        let mut generator = python::PythonGenerator::new();
        let first = generator.starter_code(&schema);
        let second = generator.starter_code(&schema);
        assert_eq!(first, second);
    }

    #[test]
    fn reset_clears_imports_between_calls() {
        let optional_schema = SignatureSchema {
            parameters: vec![Parameter {
                name: "limit".into(),
                ty: int(),
                optional: true,
            }],
            return_type: int(),
            named_types: Vec::new(),
        };
        let mut generator = python::PythonGenerator::new();
        assert!(
            generator
                .starter_code(&optional_schema)
                .starts_with("from typing import Optional")
        );
        // The second schema needs nothing from `typing`; stale symbols
        // must not leak into its preamble.
        assert!(!generator.starter_code(&example_schema()).contains("from typing"));
    }

    #[test]
    fn language_round_trips_through_cli_value_names() {
        for language in [Language::Python, Language::Typescript] {
            let name = language.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(Language::from_str(&name, false).unwrap(), language);
        }
    }

    #[test]
    fn omitted_blocks_leave_no_stray_blank_lines() {
        for language in [Language::Python, Language::Typescript] {
            let out = starter_code(&example_schema(), language);
            assert!(!out.starts_with('\n'));
            assert!(!out.ends_with('\n'));
            assert!(!out.contains("\n\n\n"));
        }
    }
}
