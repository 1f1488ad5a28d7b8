use crate::app::console::{format_employee, format_table, Console};
use crate::app::menu::{render_menu, MenuChoice, StartupChoice};
use crate::config::toml_config::{OnExisting, SessionConfig};
use crate::domain::ports::RosterStore;
use crate::domain::roster::Roster;
use crate::domain::stats;
use crate::utils::error::{Result, RosterError};
use std::io::Write;
use tokio::io::AsyncBufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user chose "save and exit" and the roster was written.
    Saved,
    /// Input closed before the user exited; nothing was saved.
    EndOfInput,
}

enum Flow {
    Continue,
    Stop(SessionOutcome),
}

/// Interactive menu loop. Owns the roster for the lifetime of the session.
pub struct Session<S, R, W> {
    roster: Roster,
    store: S,
    console: Console<R, W>,
    settings: SessionConfig,
}

impl<S, R, W> Session<S, R, W>
where
    S: RosterStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(store: S, console: Console<R, W>, settings: SessionConfig) -> Self {
        Self {
            roster: Roster::new(),
            store,
            console,
            settings,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs startup then the menu loop until the user exits or input ends.
    ///
    /// Malformed numeric input ends the session with `RosterError::InvalidInput`.
    pub async fn run(&mut self) -> Result<SessionOutcome> {
        if let Flow::Stop(outcome) = self.startup().await? {
            return Ok(outcome);
        }

        loop {
            self.console.say(render_menu())?;
            let Some(line) = self.console.read_line().await? else {
                tracing::warn!("Input closed, leaving without saving");
                return Ok(SessionOutcome::EndOfInput);
            };
            let choice = MenuChoice::parse(&line)?;
            tracing::debug!(?choice, "Menu choice");

            if let Flow::Stop(outcome) = self.dispatch(choice).await? {
                return Ok(outcome);
            }
        }
    }

    async fn startup(&mut self) -> Result<Flow> {
        let location = self.store.location();

        if !self.store.exists().await {
            self.console.say(format!(
                "Roster file {} not found. Starting with an empty roster.",
                location
            ))?;
            return Ok(Flow::Continue);
        }

        let choice = match self.settings.on_existing {
            OnExisting::Load => StartupChoice::Load,
            OnExisting::Clear => StartupChoice::Clear,
            OnExisting::Ask => {
                self.console.say(format!(
                    "Found roster file {}. Load the data from it or clear it?",
                    location
                ))?;
                let answer = self
                    .console
                    .ask("Enter '1' to load the data or '2' to clear the file:")
                    .await?;
                match answer {
                    Some(answer) => StartupChoice::parse(&answer)?,
                    None => return Ok(Flow::Stop(SessionOutcome::EndOfInput)),
                }
            }
        };

        match choice {
            StartupChoice::Load => {
                self.roster = self.store.load().await?;
                tracing::info!(employees = self.roster.len(), "Roster loaded");
                self.console.say(format!(
                    "Data loaded successfully ({} employees).",
                    self.roster.len()
                ))?;
            }
            StartupChoice::Clear => {
                self.store.clear().await?;
                self.roster = Roster::new();
                self.console
                    .say("File cleared. Starting with an empty roster.")?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => return self.add_employee().await,
            MenuChoice::Remove => return self.remove_employee().await,
            MenuChoice::SortByName => self.sort_by_name().await?,
            MenuChoice::SortByPosition => {
                self.roster.sort_by_position();
                self.console.say("Employees sorted by position.")?;
                self.console.say(format_table(&self.roster))?;
            }
            MenuChoice::MinimumTenure => self.show_minimum_tenure()?,
            MenuChoice::Averages => self.show_averages()?,
            MenuChoice::List => self.console.say(format_table(&self.roster))?,
            MenuChoice::SaveAndExit => {
                self.console
                    .say(format!("Saving roster to {}", self.store.location()))?;
                self.store.save(&self.roster).await?;
                self.console.say("Exiting...")?;
                return Ok(Flow::Stop(SessionOutcome::Saved));
            }
            MenuChoice::Unknown(number) => {
                tracing::warn!(number, "Unknown menu option");
                self.console
                    .say(format!("Unknown menu option {}.", number))?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn add_employee(&mut self) -> Result<Flow> {
        let Some(name) = self.console.ask("Enter full name:").await? else {
            return Ok(Flow::Stop(SessionOutcome::EndOfInput));
        };
        let Some(position) = self.console.ask("Enter position:").await? else {
            return Ok(Flow::Stop(SessionOutcome::EndOfInput));
        };
        let Some(raw_tenure) = self
            .console
            .ask("Enter tenure (years, may be fractional):")
            .await?
        else {
            return Ok(Flow::Stop(SessionOutcome::EndOfInput));
        };

        // inf and NaN parse as f64 but cannot be persisted
        let tenure = raw_tenure
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or_else(|| RosterError::InvalidInput {
                field: "tenure".to_string(),
                value: raw_tenure.clone(),
            })?;

        tracing::debug!(%name, %position, tenure, "Adding employee");
        self.roster.add(name, position, tenure);
        self.console
            .say(format!("Employee added. Roster size: {}.", self.roster.len()))?;
        Ok(Flow::Continue)
    }

    async fn remove_employee(&mut self) -> Result<Flow> {
        let Some(name) = self.console.ask("Enter full name:").await? else {
            return Ok(Flow::Stop(SessionOutcome::EndOfInput));
        };

        match self.roster.remove(&name) {
            Some(removal) => {
                tracing::debug!(index = removal.index, "Employee removed");
                self.console.say(format!(
                    "Removed employee #{}: {}",
                    removal.index + 1,
                    removal.employee.name
                ))?;
            }
            None => self
                .console
                .say(format!("No employee named '{}'.", name))?,
        }
        Ok(Flow::Continue)
    }

    async fn sort_by_name(&mut self) -> Result<()> {
        self.roster.sort_by_name();
        self.console.say("Employees sorted by name.")?;

        if !self.settings.save_after_name_sort {
            return Ok(());
        }

        // a failed save is reported, the session keeps its sorted roster
        let location = self.store.location();
        match self.store.save(&self.roster).await {
            Ok(()) => self.console.say(format!("Roster saved to {}.", location))?,
            Err(e) => {
                tracing::error!("Saving after sort failed: {}", e);
                self.console.say(format!("Failed to save {}: {}", location, e))?;
            }
        }
        Ok(())
    }

    fn show_minimum_tenure(&mut self) -> Result<()> {
        let Some(summary) = stats::position_with_minimum_average(&self.roster) else {
            return self.console.say("No employees to analyze.");
        };

        let mut lines = vec![
            format!(
                "Position with the minimum average tenure: {} (average tenure: {:.2})",
                summary.position, summary.average
            ),
            "Employees in this position:".to_string(),
        ];
        lines.extend(summary.members.iter().map(|e| format_employee(e)));

        self.console.say(lines.join("\n"))
    }

    fn show_averages(&mut self) -> Result<()> {
        let averages = stats::average_tenure_by_position(&self.roster);

        self.console.say("Average tenure per position:")?;
        for (position, average) in &averages {
            self.console.say(format!(
                "Position: {}, Average tenure: {:.2}",
                position, average
            ))?;
        }
        Ok(())
    }
}
