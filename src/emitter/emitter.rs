use crate::ast::{ast::Module, statements::FnDeclStmt};

/// A consumer of finished modules that produces a textual intermediate form.
pub trait Emitter {
    fn generate(&mut self, module: Module) -> String;
}

/// Emits one comment line naming the module and one per function.
///
/// ```text
/// ; Module: main
/// ; Function: add
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingEmitter;

impl ListingEmitter {
    pub fn new() -> Self {
        ListingEmitter
    }

    fn list_function(&self, output: &mut String, function: &FnDeclStmt) {
        output.push_str(&format!("; Function: {}\n", function.name));
    }
}

impl Emitter for ListingEmitter {
    fn generate(&mut self, module: Module) -> String {
        let mut output = String::new();
        output.push_str(&format!("; Module: {}\n", module.name));

        for function in module.functions() {
            self.list_function(&mut output, function);
        }

        output
    }
}
