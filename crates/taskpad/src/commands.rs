//! Handlers for the non-interactive CLI commands.

use anyhow::{Result, bail};
use taskpad_app::{Session, SlotStore};
use taskpad_core::id::TaskId;
use taskpad_core::{StatusFilter, Task};

use crate::Command;

/// Execute a CLI command against the session.
pub fn run<S: SlotStore>(command: Command, mut session: Session<S>) -> Result<()> {
    match command {
        Command::Add { text } => add(&mut session, &text),
        Command::Ls { filter, search, page } => {
            ls(&mut session, filter, search.as_deref(), page);
            Ok(())
        }
        Command::Toggle { position } => toggle(&mut session, position),
        Command::Edit { position, text } => edit(&mut session, position, &text),
        Command::Rm { position } => rm(&mut session, position),
        Command::Tui => unreachable!("tui is dispatched before command handling"),
    }
}

fn add<S: SlotStore>(session: &mut Session<S>, text: &str) -> Result<()> {
    // Blank text is silently ignored, matching the in-session behavior.
    if let Some(id) = session.add(text)
        && let Some(task) = session.get(id)
    {
        println!("added {}: {}", position_of(session, id), task.text);
    }
    Ok(())
}

fn ls<S: SlotStore>(
    session: &mut Session<S>,
    filter: StatusFilter,
    search: Option<&str>,
    page: Option<usize>,
) {
    session.set_filter(filter);
    session.set_search(search.unwrap_or_default());

    if let Some(page) = page {
        session.set_page(page);
        let view = session.page_view();
        let ids: Vec<TaskId> = view.items.iter().map(|task| task.id).collect();
        for id in ids {
            print_task_line(session, id);
        }
        let view = session.page_view();
        println!(
            "page {}/{} ({} matching task{})",
            view.page,
            view.total_pages,
            view.visible_len,
            if view.visible_len == 1 { "" } else { "s" }
        );
        return;
    }

    let ids: Vec<TaskId> = session.visible().iter().map(|task| task.id).collect();
    if ids.is_empty() {
        println!("no matching tasks");
        return;
    }
    for id in ids {
        print_task_line(session, id);
    }
}

fn toggle<S: SlotStore>(session: &mut Session<S>, position: usize) -> Result<()> {
    let id = resolve(session, position)?;
    session.toggle(id);
    print_task_line(session, id);
    Ok(())
}

fn edit<S: SlotStore>(session: &mut Session<S>, position: usize, text: &str) -> Result<()> {
    let id = resolve(session, position)?;
    session.begin_edit(id);
    session.update_edit_text(id, text);
    // Blank replacement text is silently ignored.
    if session.save_edit(id) {
        print_task_line(session, id);
    }
    Ok(())
}

fn rm<S: SlotStore>(session: &mut Session<S>, position: usize) -> Result<()> {
    let id = resolve(session, position)?;
    let text = session.get(id).map(|task| task.text.clone()).unwrap_or_default();
    session.delete(id);
    println!("removed {position}: {text}");
    Ok(())
}

/// Map a 1-based `ls` position to the stable task id behind it.
fn resolve<S: SlotStore>(session: &Session<S>, position: usize) -> Result<TaskId> {
    let index = position
        .checked_sub(1)
        .and_then(|index| session.tasks().get(index));
    match index {
        Some(task) => Ok(task.id),
        None => bail!("no task at position {position} (have {})", session.tasks().len()),
    }
}

/// Position of a task in the unfiltered list, 1-based. Printed next to
/// every task so filtered output still shows addressable positions.
fn position_of<S: SlotStore>(session: &Session<S>, id: TaskId) -> usize {
    session
        .tasks()
        .iter()
        .position(|task| task.id == id)
        .map_or(0, |index| index + 1)
}

fn print_task_line<S: SlotStore>(session: &Session<S>, id: TaskId) {
    if let Some(task) = session.get(id) {
        println!("{:>3}. {} {}", position_of(session, id), checkbox(task), task.text);
    }
}

const fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}
