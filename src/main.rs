#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Matweave **
//! Reads a name and a matriculation number from the console, then prints the
//! character sequence woven from the name over halved slices of the digits.

use matweave::input::{InputEvent, InputManager};
use matweave::style::PromptStyle;
use matweave::{InputError, chk, normalize_name, parse_digits};

use anyhow::{Context, Result};
use log::info;
use std::process;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: reading console input...");

    let mut input = InputManager::new();

    let Some(raw_name) = prompt_line(&mut input, "Please provide your name: ")? else {
        return Ok(());
    };
    let Some(raw_mat) = prompt_line(&mut input, "Please provide your matriculation number: ")? else {
        return Ok(());
    };

    let name = match normalize_name(&raw_name) {
        Ok(name) => name,
        Err(err) => fail_with("while normalizing the provided name", &err),
    };
    let digits = match parse_digits(&raw_mat) {
        Ok(digits) => digits,
        Err(err) => fail_with("while parsing the matriculation number", &err),
    };
    info!("normalized name '{name}' with {} digit(s) to weave over", digits.len());

    let woven = chk(&name, &digits);
    info!("derived {} character(s)", woven.len());

    println!("{} {woven:?}", "Result:".result_label_style());
    Ok(())
}

/// Show `prompt` and read one line. Returns `None` when the user bails out
/// with EOF or an interrupt, so the caller can exit without computing.
fn prompt_line(input: &mut InputManager, prompt: &str) -> Result<Option<String>> {
    let styled = prompt.prompt_style().to_string();
    let event = input.read_line(&styled).context("while reading console input")?;
    match event {
        InputEvent::Line(line) => Ok(Some(line)),
        InputEvent::Eof | InputEvent::Interrupted => {
            println!();
            Ok(None)
        },
    }
}

/// Invalid input is a user mistake, not a crash: report it once, styled,
/// and exit non-zero.
fn fail_with(stage: &str, err: &InputError) -> ! {
    eprintln!("{}", failure_message(stage, err));
    process::exit(1);
}

fn failure_message(stage: &str, err: &InputError) -> String {
    format!("{} ({stage})", err.to_string().error_style())
}
