//! Participant identity resolution
//!
//! Maps a slot record to its ordered occupants. A structured tag is
//! authoritative; otherwise the title is matched against the directory by
//! name. Resolution is pure: the same record and directory always give the
//! same occupants.

use shiftslot_domain::utils::names::{match_person, NameMatch};
use shiftslot_domain::utils::slot_codec::split_title;
use shiftslot_domain::{decode_body, CalendarRecord, Directory, Occupancy, Occupant, SlotIdentity};

/// Resolve the occupants of one non-anchor record.
pub fn resolve_occupancy(record: &CalendarRecord, directory: &Directory) -> Occupancy {
    let fragments = split_title(&record.title);

    match decode_body(&record.body) {
        Some(emails) if !emails.is_empty() => {
            let occupants = emails
                .into_iter()
                .enumerate()
                .map(|(index, email)| resolve_email(email, fragments.get(index), directory))
                .collect();
            Occupancy { occupants, tagged: true }
        }
        _ => {
            let occupants =
                fragments.iter().map(|fragment| resolve_fragment(fragment, directory)).collect();
            Occupancy { occupants, tagged: false }
        }
    }
}

fn resolve_email(email: String, fragment: Option<&String>, directory: &Directory) -> Occupant {
    match directory.find_by_email(&email) {
        Some(entry) => Occupant::member(entry.email_key(), entry.display_name()),
        None => Occupant {
            display_name: fragment.cloned().unwrap_or_else(|| email.clone()),
            identity: SlotIdentity::UnknownEmail(email),
        },
    }
}

/// Match one title fragment by name; ambiguous or unmatched fragments stay
/// opaque.
pub fn resolve_fragment(fragment: &str, directory: &Directory) -> Occupant {
    let scored: Vec<_> = directory
        .entries()
        .iter()
        .map(|entry| (match_person(fragment, &entry.given_name, &entry.family_name), entry))
        .filter(|(strength, _)| *strength != NameMatch::None)
        .collect();

    let best = scored.iter().map(|(strength, _)| *strength).max();
    let mut winners = scored.iter().filter(|(strength, _)| Some(*strength) == best);

    match (winners.next(), winners.next()) {
        (Some((_, entry)), None) => Occupant::member(entry.email_key(), entry.display_name()),
        _ => Occupant {
            identity: SlotIdentity::UnknownName(fragment.to_string()),
            display_name: fragment.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration};
    use shiftslot_domain::DirectoryEntry;

    use super::*;

    fn directory() -> Directory {
        Directory::from_entries(vec![
            DirectoryEntry::new("jan@example.org", "Jan", "Kowalski"),
            DirectoryEntry::new("anna@example.org", "Anna", "Nowak"),
            DirectoryEntry::new("marek@example.org", "Marek", "Zieliński"),
            DirectoryEntry::new("marta@example.org", "Marta", "Zieliński"),
        ])
    }

    fn record(title: &str, body: &str) -> CalendarRecord {
        let start = DateTime::parse_from_rfc3339("2025-03-10T10:00:00+01:00").unwrap();
        CalendarRecord {
            id: "r".into(),
            title: title.into(),
            body: body.into(),
            start,
            end: start + Duration::hours(1),
        }
    }

    #[test]
    fn tag_is_authoritative() {
        let occupancy = resolve_occupancy(
            &record("whatever", "email:anna@example.org, JAN@example.org"),
            &directory(),
        );

        assert!(occupancy.tagged);
        assert_eq!(
            occupancy.occupants,
            vec![
                Occupant::member("anna@example.org", "Anna Nowak"),
                Occupant::member("jan@example.org", "Jan Kowalski"),
            ]
        );
    }

    #[test]
    fn unknown_tagged_email_keeps_its_seat() {
        let occupancy = resolve_occupancy(
            &record("Jan Kowalski i Ewa Stara", "email:jan@example.org, ewa@old.org"),
            &directory(),
        );

        assert_eq!(occupancy.len(), 2);
        assert!(occupancy.has_unresolved());
        assert_eq!(occupancy.occupants[1].display_name, "Ewa Stara");
        assert_eq!(occupancy.occupants[1].identity, SlotIdentity::UnknownEmail("ewa@old.org".into()));
    }

    #[test]
    fn swapped_name_without_tag_resolves() {
        let occupancy = resolve_occupancy(&record("Kowalski Jan", ""), &directory());

        assert!(!occupancy.tagged);
        assert_eq!(occupancy.occupants, vec![Occupant::member("jan@example.org", "Jan Kowalski")]);
    }

    #[test]
    fn ambiguous_prefix_stays_unresolved() {
        let occupant = resolve_fragment("Mar Zieliński", &directory());
        assert_eq!(occupant.identity, SlotIdentity::UnknownName("Mar Zieliński".into()));
    }

    #[test]
    fn exact_match_beats_prefix() {
        let directory = Directory::from_entries(vec![
            DirectoryEntry::new("ola@example.org", "Ola", "Nowak"),
            DirectoryEntry::new("olaf@example.org", "Olaf", "Nowak"),
        ]);
        assert_eq!(
            resolve_fragment("Ola Nowak", &directory),
            Occupant::member("ola@example.org", "Ola Nowak")
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let directory = directory();
        let record = record("Jan Kowalski i Kto Inny", "");
        assert_eq!(resolve_occupancy(&record, &directory), resolve_occupancy(&record, &directory));
    }

    #[test]
    fn foreign_title_is_foreign() {
        let occupancy = resolve_occupancy(&record("Przegląd techniczny", ""), &directory());
        assert!(occupancy.is_foreign());
        assert_eq!(occupancy.len(), 1);
    }
}
