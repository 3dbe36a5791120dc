use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;
use thiserror::Error;
use witchpoison_core as game;

const SPREADSHEET_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

#[derive(Error, Debug)]
pub(crate) enum SheetError {
    #[error("Could not open the spreadsheet: {0}")]
    Open(#[from] calamine::Error),
    #[error("The spreadsheet has no sheets")]
    NoSheets,
    #[error(transparent)]
    Words(#[from] game::GameError),
}

/// Whether a picked file should be read as a workbook instead of plain text.
pub(crate) fn is_spreadsheet(name: &str, mime: &str) -> bool {
    let name = name.to_ascii_lowercase();
    mime.contains("sheet")
        || SPREADSHEET_EXTENSIONS
            .iter()
            .any(|extension| name.ends_with(extension))
}

/// Every cell of the sheet, row by row, as display text. Empty cells come out
/// blank and are dropped by [`game::WordList::from_words`].
fn flatten_cells(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .flat_map(|row| row.iter().map(ToString::to_string))
        .collect()
}

/// Reads the first sheet of an xlsx/xls workbook into a word list.
pub(crate) fn words_from_workbook(bytes: Vec<u8>) -> Result<game::WordList, SheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range_at(0).ok_or(SheetError::NoSheets)??;
    log::debug!("first sheet spans {:?}", range.get_size());
    Ok(game::WordList::from_words(flatten_cells(&range))?)
}
