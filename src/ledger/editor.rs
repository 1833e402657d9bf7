//! In-place record editor.
//!
//! Rewrites a historical block's payload without touching any stored hash.
//! The resulting divergence is what [`Chain::verify`] reports.

use crate::core::{Error, Result};
use crate::ledger::chain::Chain;
use crate::ledger::record::{Record, Unit};
use std::str::FromStr;
use tracing::warn;

/// Scalar attribute of a [`Record`] that can be edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordField {
    Name,
    Gender,
    Email,
    Phone,
}

impl RecordField {
    /// Set this attribute on a record.
    pub fn apply(self, record: &mut Record, value: String) {
        match self {
            RecordField::Name => record.name = value,
            RecordField::Gender => record.gender = value,
            RecordField::Email => record.email = value,
            RecordField::Phone => record.phone = value,
        }
    }
}

impl FromStr for RecordField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(RecordField::Name),
            "gender" => Ok(RecordField::Gender),
            "email" => Ok(RecordField::Email),
            "phone" => Ok(RecordField::Phone),
            _ => Err(Error::UnknownField(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordField::Name => write!(f, "Name"),
            RecordField::Gender => write!(f, "Gender"),
            RecordField::Email => write!(f, "Email"),
            RecordField::Phone => write!(f, "Phone"),
        }
    }
}

/// New value for one scalar attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: RecordField,
    pub value: String,
}

impl FieldEdit {
    pub fn new(field: RecordField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Edit to apply to a block's record.
///
/// The field edit is applied first, then the unit is replaced wholesale.
/// Either part may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub field: Option<FieldEdit>,
    pub unit: Option<Unit>,
}

impl EditRequest {
    /// Request that sets a single attribute.
    pub fn field(field: RecordField, value: &str) -> Self {
        Self {
            field: Some(FieldEdit::new(field, value)),
            unit: None,
        }
    }

    /// Request that replaces the unit snapshot only.
    pub fn unit(unit: Unit) -> Self {
        Self {
            field: None,
            unit: Some(unit),
        }
    }

    /// Also replace the unit snapshot.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.field.is_none() && self.unit.is_none()
    }
}

/// What an edit did to the target record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The record was rewritten in place
    Applied {
        field: Option<RecordField>,
        unit_replaced: bool,
    },
    /// The request was empty
    Unchanged,
}

impl Chain {
    /// Rewrite the record of the block at 1-based `index`.
    ///
    /// Neither this block's hash nor any later `prev_hash` is updated.
    pub fn edit(&mut self, index: usize, request: EditRequest) -> Result<EditOutcome> {
        if request.is_empty() {
            return Ok(EditOutcome::Unchanged);
        }

        let block = self.get_mut(index).ok_or(Error::BlockNotFound(index))?;
        let record = &mut block.data;

        let field = request.field.map(|edit| {
            edit.field.apply(record, edit.value);
            edit.field
        });
        let unit_replaced = match request.unit {
            Some(unit) => {
                record.unit = unit;
                true
            }
            None => false,
        };

        warn!(index, field = ?field, unit_replaced, "record edited in place");
        self.note_edit();

        Ok(EditOutcome::Applied {
            field,
            unit_replaced,
        })
    }

    /// Edit using a textual field selector.
    ///
    /// A blank selector means "no field edit". An unknown selector rejects
    /// the whole edit with [`Error::UnknownField`] and changes nothing.
    pub fn edit_by_name(
        &mut self,
        index: usize,
        selector: &str,
        value: &str,
        unit: Option<Unit>,
    ) -> Result<EditOutcome> {
        let field = if selector.trim().is_empty() {
            None
        } else {
            Some(FieldEdit::new(selector.parse()?, value))
        };

        self.edit(index, EditRequest { field, unit })
    }
}
