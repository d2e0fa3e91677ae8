// Copyright (C) 2020-2026 Andy Kurnia.

// file name completion for "source" and "export", bracket matching, history hints.
#[derive(
    rustyline_derive::Helper,
    rustyline_derive::Completer,
    rustyline_derive::Hinter,
    rustyline_derive::Validator,
    rustyline_derive::Highlighter,
)]
pub struct ShellHelper {
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Highlighter)]
    highlighter: rustyline::highlight::MatchingBracketHighlighter,
    #[rustyline(Validator)]
    validator: rustyline::validate::MatchingBracketValidator,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

pub type ShellEditor = rustyline::Editor<ShellHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<ShellEditor> {
    let mut rl = ShellEditor::new()?;
    rl.set_helper(Some(ShellHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        validator: rustyline::validate::MatchingBracketValidator::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}
