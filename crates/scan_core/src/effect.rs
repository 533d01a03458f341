use crate::{Cursor, ValidFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Upload { file: ValidFile },
    FetchPage { skills: Vec<String>, cursor: Cursor },
}
