use anyhow::Result;
use dday_core::date::parse_date;
use dday_core::session::Session;
use dday_core::{DdayError, EventId};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::{prompt_text, prompt_with_retry};

pub fn run(session: &mut Session, id: EventId, name: Option<String>, date: Option<String>) -> Result<()> {
    let Some(event) = session.collection().get(id) else {
        return Err(DdayError::NotFound(id).into());
    };

    let current_name = event.name.clone();
    let current_date = event.date.to_string();

    // Nothing given on the command line: edit both fields, prefilled
    let (name, date) = if name.is_none() && date.is_none() {
        let name = prompt_text("  Name", Some(current_name))?;
        let date = prompt_with_retry("  Date", Some(current_date), |input| {
            parse_date(input).map(|_| input.to_string())
        })?;
        (name, date)
    } else {
        (name.unwrap_or(current_name), date.unwrap_or(current_date))
    };

    session.edit_event(id, &name, &date)?;

    if let Some(event) = session.collection().get(id) {
        println!("{} {}", "  Updated:".green(), event.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dday_core::format::StorageFormat;
    use dday_core::store::EventStore;
    use dday_core::EventDate;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session_in(dir: &tempfile::TempDir) -> Session {
        let store = EventStore::new(dir.path().join("dday_data.json"), StorageFormat::Json);
        Session::open(store, ymd(2025, 6, 15))
    }

    #[test]
    fn test_name_only_keeps_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let id = session.add_event("exam", "2025-11-13").unwrap();

        run(&mut session, id, Some("finals".into()), None).unwrap();

        let event = session.collection().get(id).unwrap();
        assert_eq!(event.name, "finals");
        assert_eq!(event.date, EventDate::Valid(ymd(2025, 11, 13)));
    }

    #[test]
    fn test_date_only_keeps_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);
        let id = session.add_event("exam", "2025-11-13").unwrap();

        run(&mut session, id, None, Some("01.12.2025".into())).unwrap();

        let event = session.collection().get(id).unwrap();
        assert_eq!(event.name, "exam");
        assert_eq!(event.date, EventDate::Valid(ymd(2025, 12, 1)));
    }

    #[test]
    fn test_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir);

        let err = run(&mut session, EventId(7), Some("x".into()), None).unwrap_err();
        assert!(matches!(err.downcast_ref::<DdayError>(), Some(DdayError::NotFound(EventId(7)))));
    }
}
