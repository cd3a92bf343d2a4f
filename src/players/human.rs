use super::player::Player;
use crate::rules::Code;
use crate::rules::Feedback;
use crate::rules::Peg;
use colored::Colorize;
use dialoguer::Input;

/// Interactive player reading guesses from the terminal.
#[derive(Debug, Default)]
pub struct Human {
    turn: usize,
}

impl Human {
    fn render(feedback: &Feedback) -> String {
        feedback
            .pegs()
            .iter()
            .rev()
            .map(|peg| match peg {
                Peg::Exact => "●".red().to_string(),
                Peg::Partial => "●".white().to_string(),
                Peg::Miss => "·".dimmed().to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Player for Human {
    fn decide(&mut self) -> Code {
        let input = Input::<String>::new()
            .with_prompt(format!("guess #{}", self.turn + 1))
            .validate_with(|s: &String| -> Result<(), String> {
                Code::try_from(s.as_str()).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()
            .expect("read guess from terminal");
        Code::try_from(input.as_str()).expect("validated above")
    }
    fn notify(&mut self, guess: Code, feedback: Feedback) {
        self.turn += 1;
        println!("{}  {}", guess, Self::render(&feedback));
    }
    fn forget(&mut self) {
        self.turn = 0;
    }
}
