use collection_traits::{IndexOutOfRange, Resizable};
use itertools::Itertools;
use miette::Diagnostic;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// A single positional edit that can be replayed against any [Resizable]
/// collection.
///
/// Textual form, as accepted by [FromStr] and produced by [Display]:
///
/// | Edit                | Text                |
/// |---------------------|---------------------|
/// | `Add(v)`            | `add:v`             |
/// | `AddRange(vs)`      | `add_range:v1,v2`   |
/// | `InsertAt(i, v)`    | `insert:i:v`        |
/// | `RemoveAt(i)`       | `remove:i`          |
/// | `Set(i, v)`         | `set:i:v`           |
/// | `Exchange(i, j)`    | `swap:i:j`          |
/// | `Clear`             | `clear`             |
///
/// Values in `add_range` are separated by `,`. A literal `,` or `\` inside a
/// value is written as `\,` or `\\`. `add_range:` with nothing after it is
/// rejected, so an empty batch (or one holding a single empty value) has no
/// text form.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Edit<T> {
    Add(T),
    AddRange(Vec<T>),
    InsertAt(usize, T),
    RemoveAt(usize),
    Set(usize, T),
    Exchange(usize, usize),
    Clear,
}

impl<T> Edit<T> {
    pub fn apply<Col: Resizable<Item = T>>(self, target: &mut Col) -> Result<(), IndexOutOfRange> {
        match self {
            Edit::Add(value) => target.push(value),
            Edit::AddRange(values) => target.push_all(values),
            Edit::InsertAt(index, value) => target.insert(index, value)?,
            Edit::RemoveAt(index) => {
                target.remove(index)?;
            }
            Edit::Set(index, value) => {
                target.replace(index, value)?;
            }
            Edit::Exchange(a, b) => target.swap(a, b)?,
            Edit::Clear => target.clear(),
        }
        Ok(())
    }

    /// Applies `edits` in order, stopping at the first failing one.
    ///
    /// Edits preceding the failure stay applied.
    pub fn apply_all<Col: Resizable<Item = T>>(
        edits: impl IntoIterator<Item = Self>,
        target: &mut Col,
    ) -> Result<(), IndexOutOfRange> {
        for edit in edits {
            edit.apply(target)?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Add(value) => write!(f, "add:{value}"),
            Edit::AddRange(values) => write!(
                f,
                "add_range:{}",
                values
                    .iter()
                    .map(|value| escape_list_item(&value.to_string()))
                    .format(",")
            ),
            Edit::InsertAt(index, value) => write!(f, "insert:{index}:{value}"),
            Edit::RemoveAt(index) => write!(f, "remove:{index}"),
            Edit::Set(index, value) => write!(f, "set:{index}:{value}"),
            Edit::Exchange(a, b) => write!(f, "swap:{a}:{b}"),
            Edit::Clear => f.write_str("clear"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum EditParseError {
    #[error("unknown edit `{}`", .0)]
    #[diagnostic(help("expected one of add, add_range, insert, remove, set, swap, clear"))]
    UnknownEdit(String),
    #[error("edit `{}` is missing an argument", .0)]
    MissingArgument(&'static str),
    #[error("edit `{}` takes no arguments", .0)]
    UnexpectedArgument(&'static str),
    #[error("bad index `{}`: {}", .0, .1)]
    BadIndex(String, ParseIntError),
}

fn parse_index(str: &str) -> Result<usize, EditParseError> {
    str.trim()
        .parse()
        .map_err(|err| EditParseError::BadIndex(str.to_string(), err))
}

fn escape_list_item(item: &str) -> String {
    item.replace('\\', "\\\\").replace(',', "\\,")
}

/// Splits on unescaped `,`, undoing [escape_list_item]
fn split_list(list: &str) -> Vec<String> {
    let mut items = vec![];
    let mut current = String::new();
    let mut chars = list.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => current.extend(chars.next()),
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);
    items
}

fn split_arg<'a>(
    name: &'static str,
    args: Option<&'a str>,
) -> Result<(&'a str, &'a str), EditParseError> {
    args.and_then(|args| args.split_once(':'))
        .ok_or(EditParseError::MissingArgument(name))
}

impl FromStr for Edit<String> {
    type Err = EditParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = match s.split_once(':') {
            None => (s, None),
            Some((name, args)) => (name, Some(args)),
        };

        match name {
            "add" => {
                let value = args.ok_or(EditParseError::MissingArgument("add"))?;
                Ok(Edit::Add(value.to_string()))
            }
            "add_range" => {
                let values = args
                    .filter(|values| !values.is_empty())
                    .ok_or(EditParseError::MissingArgument("add_range"))?;
                Ok(Edit::AddRange(split_list(values)))
            }
            "insert" => {
                let (index, value) = split_arg("insert", args)?;
                Ok(Edit::InsertAt(parse_index(index)?, value.to_string()))
            }
            "remove" => {
                let index = args.ok_or(EditParseError::MissingArgument("remove"))?;
                Ok(Edit::RemoveAt(parse_index(index)?))
            }
            "set" => {
                let (index, value) = split_arg("set", args)?;
                Ok(Edit::Set(parse_index(index)?, value.to_string()))
            }
            "swap" => {
                let (a, b) = split_arg("swap", args)?;
                Ok(Edit::Exchange(parse_index(a)?, parse_index(b)?))
            }
            "clear" => match args {
                None => Ok(Edit::Clear),
                Some(_) => Err(EditParseError::UnexpectedArgument("clear")),
            },
            _ => Err(EditParseError::UnknownEdit(name.to_string())),
        }
    }
}
