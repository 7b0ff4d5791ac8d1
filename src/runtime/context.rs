use std::io::Write;

/// Execution context. Supplies the output stream that `print` writes to;
/// the stream is borrowed for the duration of a top-level execution.
pub struct Context<'a> {
    output: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(output: &'a mut dyn Write) -> Self {
        Self { output }
    }

    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}
