//! Line-oriented interactive session.
//!
//! Keeps one `TodoService` alive so the transient current page behaves as it
//! would in a long-running UI.

use crate::render::TextRenderer;
use lazytodo_core::{Action, KeyValueStore, PageSize, SortMode, TodoService};
use std::io::{self, BufRead, Write};

const HELP: &str = "commands: add <text> | toggle <id> | delete <id> | page <n> | \
sort <time|timeDesc|abc> | size <n> | theme | list | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Action(Action),
    List,
    Help,
    Quit,
}

/// Parses one input line. Blank lines mean `list`.
pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };
    let arg = rest.trim();

    let command = match verb {
        "" | "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "add" => ShellCommand::Action(Action::Add(rest.to_string())),
        "toggle" | "t" => ShellCommand::Action(Action::Toggle(parse_number(verb, arg)?)),
        "delete" | "rm" => ShellCommand::Action(Action::Delete(parse_number(verb, arg)?)),
        "page" | "p" => ShellCommand::Action(Action::ChangePage(parse_number(verb, arg)?)),
        "sort" => ShellCommand::Action(Action::ChangeSort(
            arg.parse::<SortMode>().map_err(|err| err.to_string())?,
        )),
        "size" => ShellCommand::Action(Action::ChangePageSize(
            arg.parse::<PageSize>().map_err(|err| err.to_string())?,
        )),
        "theme" => ShellCommand::Action(Action::ToggleTheme),
        other => return Err(format!("unknown command `{other}`; try `help`")),
    };
    Ok(command)
}

fn parse_number<T: std::str::FromStr>(verb: &str, arg: &str) -> Result<T, String> {
    arg.parse::<T>()
        .map_err(|_| format!("`{verb}` expects a number, got `{arg}`"))
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run<S, R, W>(
    service: &mut TodoService<S>,
    input: R,
    renderer: &mut TextRenderer<W>,
) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    service.refresh(renderer);
    for line in input.lines() {
        match parse_line(&line?) {
            Ok(ShellCommand::Action(action)) => {
                service.dispatch(action, renderer);
            }
            Ok(ShellCommand::List) => {
                service.refresh(renderer);
            }
            Ok(ShellCommand::Help) => renderer.note(HELP),
            Ok(ShellCommand::Quit) => break,
            Err(message) => renderer.note(&message),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, run, ShellCommand};
    use crate::render::TextRenderer;
    use lazytodo_core::{Action, MemoryKvStore, SortMode, TodoService, TodoStore};

    #[test]
    fn parses_actions_and_keeps_add_text() {
        assert_eq!(
            parse_line("add  buy milk").unwrap(),
            ShellCommand::Action(Action::Add(" buy milk".to_string()))
        );
        assert_eq!(
            parse_line("sort abc").unwrap(),
            ShellCommand::Action(Action::ChangeSort(SortMode::Abc))
        );
        assert_eq!(
            parse_line("rm 42\n").unwrap(),
            ShellCommand::Action(Action::Delete(42))
        );
        assert_eq!(parse_line("").unwrap(), ShellCommand::List);
        assert_eq!(parse_line("quit").unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_line("toggle abc").is_err());
        assert!(parse_line("size 7").is_err());
        assert!(parse_line("sort newest").is_err());
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn session_keeps_page_between_commands() {
        let kv = MemoryKvStore::new();
        let mut service = TodoService::new(TodoStore::new(&kv));
        let mut renderer = TextRenderer::new(Vec::new());
        let script = "size 5\nadd a\nadd b\nadd c\nadd d\nadd e\nadd f\npage 2\nsort timeDesc\nquit\nadd ignored\n";

        run(&mut service, script.as_bytes(), &mut renderer).unwrap();

        assert_eq!(service.state().current_page, 2);
        assert_eq!(service.store().load_items().len(), 6);
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.contains("pages: 1 [2]"));
    }
}
