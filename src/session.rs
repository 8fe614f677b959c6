//! Session: the operation surface the command layer calls
//!
//! A `Session` owns one [`Roster`] and exposes the add/delete/find/
//! refresh operations. Every operation returns a [`CommandOutcome`]:
//! the user-facing feedback line, whether to show help, whether to
//! terminate, and which entity kind's view to bring to the foreground.
//!
//! The session never renders beyond these primitive fields; feedback
//! strings embed the records' own `Display` forms. Parsing raw user
//! input into records happens upstream, persistence of snapshots
//! happens downstream — both outside this crate.

use roster_core::{Athlete, Contract, EntityKind, Organization, Result};
use roster_search::{find, refresh, SearchScope};
use roster_store::{Roster, RosterSnapshot};

/// Result value handed back to the command layer after every operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// User-facing feedback line
    pub feedback: String,
    /// Whether the command layer should display help
    pub show_help: bool,
    /// Whether the application should terminate
    pub exit: bool,
    /// Which entity kind's view to bring to the foreground, if any
    pub focus: Option<EntityKind>,
}

impl CommandOutcome {
    fn plain(feedback: String) -> Self {
        CommandOutcome {
            feedback,
            show_help: false,
            exit: false,
            focus: None,
        }
    }

    fn focused(feedback: String, kind: EntityKind) -> Self {
        CommandOutcome {
            focus: Some(kind),
            ..Self::plain(feedback)
        }
    }
}

/// A single-user editing session over one roster store
#[derive(Debug, Default)]
pub struct Session {
    roster: Roster,
}

impl Session {
    /// Start a session with an empty store
    pub fn new() -> Self {
        Session {
            roster: Roster::new(),
        }
    }

    /// Start a session from a persisted snapshot
    ///
    /// # Errors
    ///
    /// Fails with [`roster_core::Error::Duplicate`] if any list in the
    /// snapshot contains weak-identity collisions.
    pub fn from_snapshot(snapshot: RosterSnapshot) -> Result<Self> {
        let mut session = Session::new();
        session.roster.reset_data(snapshot)?;
        Ok(session)
    }

    /// Direct access to the underlying store
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable access to the underlying store, for collaborators that
    /// need operations beyond the command surface (bulk replace, in-place
    /// edits of organizations and contracts)
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    // ========== Mutating operations ==========

    /// Add an athlete
    pub fn add_athlete(&mut self, athlete: Athlete) -> Result<CommandOutcome> {
        let feedback = format!("New athlete added: {athlete}");
        self.roster.add_athlete(athlete)?;
        Ok(CommandOutcome::focused(feedback, EntityKind::Athlete))
    }

    /// Delete the athlete strongly equal to `target`
    pub fn delete_athlete(&mut self, target: &Athlete) -> Result<CommandOutcome> {
        self.roster.remove_athlete(target)?;
        Ok(CommandOutcome::focused(
            format!("Deleted athlete: {target}"),
            EntityKind::Athlete,
        ))
    }

    /// Add an organization
    pub fn add_organization(&mut self, organization: Organization) -> Result<CommandOutcome> {
        let feedback = format!("New organization added: {organization}");
        self.roster.add_organization(organization)?;
        Ok(CommandOutcome::focused(feedback, EntityKind::Organization))
    }

    /// Delete the organization strongly equal to `target`
    pub fn delete_organization(&mut self, target: &Organization) -> Result<CommandOutcome> {
        self.roster.remove_organization(target)?;
        Ok(CommandOutcome::focused(
            format!("Deleted organization: {target}"),
            EntityKind::Organization,
        ))
    }

    /// Add a contract
    pub fn add_contract(&mut self, contract: Contract) -> Result<CommandOutcome> {
        let feedback = format!("New contract added: {contract}");
        self.roster.add_contract(contract)?;
        Ok(CommandOutcome::focused(feedback, EntityKind::Contract))
    }

    /// Delete the contract strongly equal to `target`
    pub fn delete_contract(&mut self, target: &Contract) -> Result<CommandOutcome> {
        self.roster.remove_contract(target)?;
        Ok(CommandOutcome::focused(
            format!("Deleted contract: {target}"),
            EntityKind::Contract,
        ))
    }

    // ========== Queries ==========

    /// Search one scope for a keyword
    ///
    /// # Errors
    ///
    /// Returns [`roster_core::Error::EmptyKeyword`] for a blank keyword.
    pub fn find(&mut self, scope: SearchScope, keyword: &str) -> Result<CommandOutcome> {
        let outcome = find(&mut self.roster, scope, keyword)?;
        Ok(CommandOutcome::focused(
            format!(
                "{} match(es) for {} search \"{}\"",
                outcome.matches,
                outcome.label,
                keyword.trim()
            ),
            outcome.kind,
        ))
    }

    /// Clear all search filters
    pub fn refresh(&mut self) -> CommandOutcome {
        refresh(&mut self.roster);
        CommandOutcome::plain("Showing all records".to_string())
    }

    /// Ask the command layer to display help
    pub fn help(&self) -> CommandOutcome {
        CommandOutcome {
            show_help: true,
            ..CommandOutcome::plain("Opened help window".to_string())
        }
    }

    /// Ask the command layer to terminate
    pub fn exit(&self) -> CommandOutcome {
        CommandOutcome {
            exit: true,
            ..CommandOutcome::plain("Exiting".to_string())
        }
    }

    // ========== Persistence bridge ==========

    /// Capture the store contents for the storage adapter
    pub fn snapshot(&self) -> RosterSnapshot {
        self.roster.snapshot()
    }

    /// Replace the store contents from the storage adapter
    pub fn restore(&mut self, snapshot: RosterSnapshot) -> Result<()> {
        self.roster.reset_data(snapshot)
    }
}
