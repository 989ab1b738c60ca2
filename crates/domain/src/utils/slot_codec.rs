//! Slot record codec.
//!
//! The title and the `email:` tag are the only place occupancy exists as
//! text. Everything above this module works with [`Occupant`] values; the
//! store only ever sees what [`encode_slot`] produces.

use crate::constants::{OCCUPANT_CONNECTOR, SLOT_TAG_PREFIX, SLOT_TAG_SEPARATOR};
use crate::types::slot::Occupant;

/// Title and body to write for a slot record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSlot {
    pub title: String,
    pub body: String,
}

/// Render occupants as a record title and tag body.
///
/// The body is left empty when any occupant has no email; such a record is
/// read back from its title alone and resolves the same way again.
pub fn encode_slot(occupants: &[Occupant]) -> EncodedSlot {
    let title = occupants
        .iter()
        .map(|o| o.display_name.as_str())
        .collect::<Vec<_>>()
        .join(OCCUPANT_CONNECTOR);

    let emails: Option<Vec<&str>> = occupants.iter().map(Occupant::email).collect();
    let body = match emails {
        Some(emails) if !emails.is_empty() => {
            format!("{SLOT_TAG_PREFIX}{}", emails.join(SLOT_TAG_SEPARATOR))
        }
        _ => String::new(),
    };

    EncodedSlot { title, body }
}

/// Emails listed in a tag body, in join order.
///
/// Returns `None` when the body carries no tag. Tokens are trimmed,
/// lower-cased, and empty ones dropped.
pub fn decode_body(body: &str) -> Option<Vec<String>> {
    let (_, tail) = body.split_once(SLOT_TAG_PREFIX)?;
    Some(
        tail.replace(SLOT_TAG_PREFIX, "")
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect(),
    )
}

/// Occupant name fragments of an untagged title.
pub fn split_title(title: &str) -> Vec<String> {
    title
        .splitn(2, OCCUPANT_CONNECTOR)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
