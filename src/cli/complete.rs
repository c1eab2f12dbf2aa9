//! todotxt complete command implementation

use crate::cli::Settings;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};
use crate::store::parse_id;

/// Options for `todotxt complete`
pub struct CompleteOptions {
    pub id: String,
}

pub fn run(options: CompleteOptions, settings: &Settings) -> Result<()> {
    let id = parse_id(&options.id)?;
    let task = settings.store().complete_task(id)?;

    let mut human = HumanOutput::new(format!("todotxt complete: task {id}"));
    human.push_line(task.to_string());

    emit_success(settings.output, "complete", &task, Some(&human))
}
