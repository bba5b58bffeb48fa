//! Choosing the interpreter for `install`, `configure` and `setup`.

use crate::cli::args::InterpreterArgs;
use crate::runtime::LocatorOutcome;
use crate::session::Session;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Pick the interpreter: `--python`, else a search (unless `--no-detect`),
/// else the platform default.
pub(super) fn resolve_interpreter<R: CommandRunner>(
    session: &mut Session,
    args: &InterpreterArgs,
    runner: R,
    ui: &mut dyn UserInterface,
) {
    if let Some(python) = &args.python {
        session.set_python(python.clone());
        return;
    }
    if args.no_detect {
        return;
    }
    let outcome = locate(session, runner, ui);
    if outcome.command.is_none() {
        ui.warning(&format!("Falling back to {}", session.python()));
    }
}

/// Run the search behind a spinner.
pub(super) fn locate<R: CommandRunner>(
    session: &mut Session,
    runner: R,
    ui: &mut dyn UserInterface,
) -> LocatorOutcome {
    let mut spinner = ui.start_spinner("Looking for Python 3.11+...");
    let outcome = session.locate_with(runner);

    match (&outcome.command, &outcome.version_string) {
        (Some(command), Some(version)) if outcome.is_usable() => {
            spinner.finish_success(&format!("{} ({})", version, command));
        }
        (Some(command), Some(version)) => {
            spinner.finish_error(&format!("{} at {} is too old", version, command));
        }
        _ => {
            spinner.finish_error("No Python 3.11+ found");
        }
    }
    outcome
}
