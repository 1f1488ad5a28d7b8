use crate::domain::model::Employee;
use crate::domain::roster::Roster;
use crate::utils::error::Result;
use std::fmt::Display;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Line-oriented console: answers come from an async reader, text goes to a writer.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R: AsyncBufRead + Unpin, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    /// Next trimmed line, `None` once the input is closed.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.next_line().await?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    pub async fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.say(question)?;
        self.read_line().await
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

pub fn format_table(roster: &Roster) -> String {
    let mut lines = vec![
        format!(
            "{:<5} | {:<30} | {:<20} | {:<10}",
            "#", "Full name", "Position", "Tenure (years)"
        ),
        "-".repeat(70),
    ];
    for (i, employee) in roster.iter().enumerate() {
        lines.push(format!(
            "{:<5} | {:<30} | {:<20} | {:<10.2}",
            i + 1,
            employee.name,
            employee.position,
            employee.tenure
        ));
    }
    lines.join("\n")
}

pub fn format_employee(employee: &Employee) -> String {
    format!(
        "Full name: {}, Position: {}, Tenure: {:.2}",
        employee.name, employee.position, employee.tenure
    )
}
