//! Interactive mode for the dossier CLI.
//!
//! Lets the user pick an action and prompts for the paths it needs.

use std::path::PathBuf;

use dialoguer::{Input, Select};
use dossier_convert::DEFAULT_OUTPUT;

/// Top-level actions offered by the menu.
enum Action {
    Convert,
    Preview,
    Serve,
}

impl Action {
    const ALL: &[Self] = &[Self::Convert, Self::Preview, Self::Serve];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Convert => "Convert a PDF to a spreadsheet",
            Self::Preview => "Preview extracted rows",
            Self::Serve => "Start server",
        }
    }
}

/// Runs the interactive menu.
///
/// # Errors
///
/// Returns an error if a prompt fails or the chosen action fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dossier");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Convert => {
            let input = prompt_input()?;
            let output: String = Input::new()
                .with_prompt("Output spreadsheet")
                .default(DEFAULT_OUTPUT.to_string())
                .interact_text()?;
            crate::convert(&input, &PathBuf::from(output))?;
        }
        Action::Preview => {
            let input = prompt_input()?;
            crate::preview(&input, crate::DEFAULT_PREVIEW_ROWS)?;
        }
        Action::Serve => {
            actix_web::rt::System::new().block_on(dossier_server::interactive::run())?;
        }
    }

    Ok(())
}

fn prompt_input() -> Result<PathBuf, dialoguer::Error> {
    let input: String = Input::new()
        .with_prompt("Input PDF")
        .default("Data Input.pdf".to_string())
        .interact_text()?;
    Ok(PathBuf::from(input))
}
