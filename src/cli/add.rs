//! todotxt add command implementation

use crate::cli::Settings;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};
use crate::task::{parse_date, parse_priority, Task};

/// Options for `todotxt add`
pub struct AddOptions {
    pub text: String,
    pub priority: Option<String>,
    pub due: Option<String>,
}

pub fn run(options: AddOptions, settings: &Settings) -> Result<()> {
    let mut task = Task::from_input(&options.text);
    if task.description.is_empty() {
        return Err(Error::InvalidArgument(
            "task text needs a description besides tags".to_string(),
        ));
    }
    task.priority = options.priority.as_deref().map(parse_priority).transpose()?;
    task.due_date = options.due.as_deref().map(parse_date).transpose()?;

    let store = settings.store();
    let task = store.add_task(task)?;

    let mut human = HumanOutput::new(format!("todotxt add: task {}", task.id));
    human.push_line(task.to_string());

    emit_success(settings.output, "add", &task, Some(&human))
}
