use crate::utils::error::{Result, RosterError};

pub const MENU_ITEMS: [(u8, &str); 8] = [
    (1, "Add employee"),
    (2, "Remove employee"),
    (3, "Sort employees by name"),
    (4, "Sort employees by position"),
    (5, "Show employees in the position with the minimum average tenure"),
    (6, "Show average tenure per position"),
    (9, "Show all employees"),
    (0, "Save and exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    SortByName,
    SortByPosition,
    MinimumTenure,
    Averages,
    List,
    SaveAndExit,
    /// A number that is not on the menu; the menu is shown again.
    Unknown(i64),
}

impl MenuChoice {
    /// Anything that is not an integer is rejected; unlisted numbers are not.
    pub fn parse(input: &str) -> Result<Self> {
        let number: i64 = input.trim().parse().map_err(|_| RosterError::InvalidInput {
            field: "menu choice".to_string(),
            value: input.to_string(),
        })?;

        Ok(match number {
            1 => MenuChoice::Add,
            2 => MenuChoice::Remove,
            3 => MenuChoice::SortByName,
            4 => MenuChoice::SortByPosition,
            5 => MenuChoice::MinimumTenure,
            6 => MenuChoice::Averages,
            9 => MenuChoice::List,
            0 => MenuChoice::SaveAndExit,
            other => MenuChoice::Unknown(other),
        })
    }
}

/// Answer to the "roster file found" question at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupChoice {
    Load,
    Clear,
}

impl StartupChoice {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(StartupChoice::Load),
            "2" => Ok(StartupChoice::Clear),
            other => Err(RosterError::InvalidInput {
                field: "startup choice".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

pub fn render_menu() -> String {
    let mut text = String::from("Menu");
    for (key, label) in MENU_ITEMS {
        text.push_str(&format!("\n{}. {}", key, label));
    }
    text
}
