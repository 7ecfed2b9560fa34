use crate::data::read_lines;
use crate::error::Result;
use std::collections::HashSet;
use std::path::Path;

/// TM and tutor moves a creature can learn, as written in tm.txt
/// (upper-case, brackets stripped).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Teachables {
    pub tm: Vec<String>,
    pub tutor: Vec<String>,
}

/// tm.txt alternates a `[MOVE]` header line with a comma-joined list of the
/// internal names that can learn it.
#[derive(Clone, Debug, Default)]
pub struct TmFile {
    lines: Vec<String>,
    tm_section_end: usize,
}

impl TmFile {
    pub fn from_lines(lines: Vec<String>, tm_section_end: usize) -> Self {
        Self {
            lines,
            tm_section_end,
        }
    }

    pub fn load(path: &Path, tm_section_end: usize) -> Result<Self> {
        Ok(Self::from_lines(read_lines(path)?, tm_section_end))
    }

    /// Matches whole names only, so `SHYLEON` never picks up `SHYLEONX`.
    pub fn teachables(&self, internal_name: &str) -> Teachables {
        let mut found = Teachables::default();
        for (idx, line) in self.lines.iter().enumerate().skip(1) {
            let learners: HashSet<&str> = line.split(',').map(str::trim).collect();
            if !learners.contains(internal_name) {
                continue;
            }
            let header = &self.lines[idx - 1];
            let move_name = header.trim().trim_matches(|c| c == '[' || c == ']').to_string();
            if idx < self.tm_section_end {
                found.tm.push(move_name);
            } else {
                found.tutor.push(move_name);
            }
        }
        found
    }
}
