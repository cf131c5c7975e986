use anyhow::Result;
use dday_core::session::Session;
use dday_core::{DdayError, EventId};
use owo_colors::OwoColorize;

use crate::utils::tui::confirm;

pub fn run(session: &mut Session, id: EventId, yes: bool) -> Result<()> {
    let Some(event) = session.collection().get(id) else {
        println!("{}", format!("  Nothing to delete: event {} doesn't exist", id).dimmed());
        return Ok(());
    };

    if !yes && !confirm(&format!("  Delete '{}' ({})?", event.name, event.date))? {
        println!("{}", "  Cancelled".dimmed());
        return Ok(());
    }

    match session.delete_event(id) {
        Ok(removed) => {
            println!("{}", format!("  Deleted: {}", removed.name).green());
            Ok(())
        }
        Err(DdayError::NotFound(_)) => {
            println!("{}", format!("  Nothing to delete: event {} doesn't exist", id).dimmed());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dday_core::format::StorageFormat;
    use dday_core::store::EventStore;

    fn session_in(dir: &tempfile::TempDir) -> Session {
        let store = EventStore::new(dir.path().join("dday_data.json"), StorageFormat::Json);
        Session::open(store, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    #[test]
    fn test_missing_id_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        session.add_event("exam", "2025-11-13").unwrap();

        assert!(run(&mut session, EventId(42), false).is_ok());
        assert_eq!(session.collection().len(), 1);
    }

    #[test]
    fn test_delete_with_yes_skips_prompt_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let id = session.add_event("exam", "2025-11-13").unwrap();

        run(&mut session, id, true).unwrap();

        assert!(session.collection().is_empty());
        assert!(session.store().load().is_empty());
    }
}
