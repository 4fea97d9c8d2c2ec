//! Line comments: `//` to end of line.

use super::core::Cursor;

pub(super) fn skip(cursor: &mut Cursor<'_>) {
    cursor.bump(); // first '/'
    cursor.bump(); // second '/'
    cursor.eat_while(|b| b != b'\n');
}
