//! Markdown rendering of the flow board.

use std::fmt;

use super::status_label;
use crate::layout::{Board, Card};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_empty() {
            writeln!(f, "# {}", self.name)?;
            writeln!(f)?;
        }

        if self.cards().next().is_none() {
            return writeln!(f, "No tasks in this plan.");
        }

        for column in &self.columns {
            writeln!(f, "## {} ({})", column.label, column.cards.len())?;
            writeln!(f)?;
            if column.cards.is_empty() {
                writeln!(f, "_Empty_")?;
            }
            for card in &column.cards {
                write!(f, "{card}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** [{}] · {} · {} · `{}`",
            self.task.title,
            status_label(self.task.status, self.is_blocked),
            self.task.priority,
            self.task.effort(),
            self.task.id
        )
    }
}
