//! todotxt rm command implementation

use crate::cli::Settings;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput};
use crate::store::parse_id;

/// Options for `todotxt rm`
pub struct RmOptions {
    pub id: String,
}

pub fn run(options: RmOptions, settings: &Settings) -> Result<()> {
    let id = parse_id(&options.id)?;
    let removed = settings.store().delete_task(id)?;

    let mut human = HumanOutput::new(format!("todotxt rm: deleted task {id}"));
    human.push_line(removed.to_string());
    human.push_next_step("ids of later tasks shift down by one; run `todotxt list`");

    emit_success(settings.output, "rm", &removed, Some(&human))
}
