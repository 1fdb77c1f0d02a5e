use std::fmt;

use itertools::Itertools;

use crate::{Number, DISPLAY_PRECISION, DISPLAY_WIDTH};

/// Writes one bracketed, newline-terminated row of elements.
///
/// A width or precision set on `f` replaces the defaults for this row only.
pub(crate) fn write_row<T>(f: &mut fmt::Formatter<'_>, indent: &str, row: &[T]) -> fmt::Result
where
    T: Number + fmt::Display,
{
    let width = f.width().unwrap_or(DISPLAY_WIDTH);
    let precision = f
        .precision()
        .or(T::FRACTIONAL.then_some(DISPLAY_PRECISION));

    let cells = row.iter().format_with(", ", |elem, g| match precision {
        Some(precision) => g(&format_args!("{elem:>width$.precision$}")),
        None => g(&format_args!("{elem:>width$}")),
    });
    writeln!(f, "{indent}[{cells} ]")
}
