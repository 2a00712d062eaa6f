//! # Argument Validation
//!
//! One validator per command. Each takes the raw positional arguments exactly as
//! they came off the command line and either returns the typed parameters the
//! command layer expects, or a [`TodoError::Invalid`] carrying the message shown
//! to the user.
//!
//! Validation is purely syntactic: nothing here reads the store, so an id that
//! passes validation may still turn out not to exist.

use crate::commands::{
    AddLabelParams, AddParams, CompleteParams, DeleteParams, EditTitleParams, FindByIdParams,
    FindByTitleParams,
};
use crate::error::{Result, TodoError};
use crate::model::{IdArg, Status};

const MIN_SEARCH_TITLE_CHARS: usize = 3;

pub fn validate_add_params(params: &[String]) -> Result<AddParams> {
    if params.len() != 1 {
        return Err(TodoError::invalid(
            "Give a title as the only parameter in parenthesis.",
        ));
    }
    let title = &params[0];
    if title.is_empty() {
        return Err(TodoError::invalid(
            "The title must be a non zero length string.",
        ));
    }
    Ok(AddParams {
        title: title.clone(),
    })
}

pub fn validate_find_by_id_param(params: &[String]) -> Result<FindByIdParams> {
    params
        .first()
        .and_then(|raw| IdArg::parse(raw))
        .map(|id| FindByIdParams { id })
        .ok_or_else(|| TodoError::invalid("Id is not a number, please provide a number"))
}

pub fn validate_find_by_title_param(params: &[String]) -> Result<FindByTitleParams> {
    match params.first() {
        Some(title) if title.chars().count() >= MIN_SEARCH_TITLE_CHARS => Ok(FindByTitleParams {
            title: title.clone(),
        }),
        _ => Err(TodoError::invalid(
            "The title should be string and at least 3 character long!",
        )),
    }
}

/// Unlike the other validators this one yields the bare status, not a params struct.
pub fn validate_status_param(params: &[String]) -> Result<Status> {
    params
        .first()
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| TodoError::invalid("Status have to be 'done' or 'not-done' string!"))
}

pub fn validate_complete_todo_param(params: &[String]) -> Result<CompleteParams> {
    if params.len() != 1 {
        return Err(TodoError::invalid(
            "Give a numeric id as the only parameter in parenthesis.",
        ));
    }
    let FindByIdParams { id } = validate_find_by_id_param(params)?;
    Ok(CompleteParams { id })
}

pub fn validate_edit_title_params(params: &[String]) -> Result<EditTitleParams> {
    if params.len() != 2 {
        return Err(TodoError::invalid(
            "Give a numeric id and a title in parenthesis as the params.",
        ));
    }
    let FindByIdParams { id } = validate_find_by_id_param(&params[..1])?;
    let AddParams { title } = validate_add_params(&params[1..])?;
    Ok(EditTitleParams { id, title })
}

pub fn validate_delete_todo_params(params: &[String]) -> Result<DeleteParams> {
    if params.len() != 1 {
        return Err(TodoError::invalid(
            "Give a numeric id as the only parameter in parenthesis.",
        ));
    }
    let FindByIdParams { id } = validate_find_by_id_param(params)?;
    Ok(DeleteParams { id })
}

/// The only validator that normalizes its id: it is truncated to an integer here.
pub fn validate_add_label_params(params: &[String]) -> Result<AddLabelParams> {
    if params.len() != 2 {
        return Err(TodoError::invalid("Give two parameters: todo ID and label."));
    }
    let (raw_id, label) = (&params[0], &params[1]);

    let not_numeric = || TodoError::invalid("The ID must be a numeric value.");
    if IdArg::parse(raw_id).is_none() {
        return Err(not_numeric());
    }
    if label.is_empty() {
        return Err(TodoError::invalid("Label must be a non-empty string."));
    }
    let id = parse_leading_integer(raw_id).ok_or_else(not_numeric)?;

    Ok(AddLabelParams {
        id,
        label: label.clone(),
    })
}

/// Leading base-10 digits of the trimmed argument, so `"12.9"` and `"1e3"` both
/// give their integer prefix. Negative values are not valid ids.
fn parse_leading_integer(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value: u64 = unsigned[..end].parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
