//! todotxt list command implementation

use crate::cli::Settings;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};
use crate::store::parse_id;

/// Options for `todotxt list`
pub struct ListOptions {
    pub id: Option<String>,
}

pub fn run(options: ListOptions, settings: &Settings) -> Result<()> {
    let store = settings.store();

    let tasks = match options.id {
        Some(raw) => {
            let id = parse_id(&raw)?;
            let task = store.get_task(id)?.ok_or(Error::TaskNotFound(id))?;
            vec![task]
        }
        None => store.list_tasks()?,
    };

    let mut human = HumanOutput::plain();
    for task in &tasks {
        human.push_line(task.to_string());
    }

    emit_success(settings.output, "list", &tasks, Some(&human))
}
