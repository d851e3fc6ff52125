mod formatter;
mod plain;
mod step_outputs;

pub(crate) use formatter::OutputFormatter;
pub(crate) use plain::PlainTextFormatter;
pub(crate) use step_outputs::append_step_outputs;
