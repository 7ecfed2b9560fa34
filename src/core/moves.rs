use crate::core::utils::title_case;
use crate::data::lookup::Lookup;
use crate::data::records::Record;
use crate::data::tm::Teachables;
use crate::error::Result;

pub const BREED_NONE: &str = "{{MoveBreedNone}}";

/// Same-type bonus marker of a learnset entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StabMark {
    None,
    /// Gains the bonus only after evolving.
    Future,
    Stab,
}

impl StabMark {
    pub fn markup(self) -> &'static str {
        match self {
            StabMark::None => "",
            StabMark::Future => "''",
            StabMark::Stab => "'''",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveListKind {
    Level,
    Tm,
    Breed,
    Tutor,
}

impl MoveListKind {
    fn header(self) -> &'static str {
        match self {
            MoveListKind::Level => "Level",
            MoveListKind::Tm => "TM",
            MoveListKind::Breed => "Breed",
            MoveListKind::Tutor => "Tutor",
        }
    }
}

/// Learnset tables for one creature.
pub struct MoveListGenerator<'a> {
    record: &'a Record,
    teachables: &'a Teachables,
    lookup: &'a dyn Lookup,
    display_name: String,
    types: Vec<String>,
    future_types: Vec<String>,
}

impl<'a> MoveListGenerator<'a> {
    pub fn new(
        record: &'a Record,
        teachables: &'a Teachables,
        lookup: &'a dyn Lookup,
        display_name: impl Into<String>,
        future_types: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            record,
            teachables,
            lookup,
            display_name: display_name.into(),
            types: record.types()?,
            future_types,
        })
    }

    pub fn stab_mark(&self, move_type: &str, can_have_stab: bool) -> StabMark {
        if !can_have_stab {
            StabMark::None
        } else if self.types.iter().any(|t| t == move_type) {
            StabMark::Stab
        } else if self.future_types.iter().any(|t| t == move_type) {
            StabMark::Future
        } else {
            StabMark::None
        }
    }

    fn bracket(&self, kind: MoveListKind, edge: &str) -> String {
        let first = &self.types[0];
        let second = self.types.get(1).unwrap_or(first);
        format!(
            "{{{{Move{}{edge}|{}|{first}|{second}}}}}",
            kind.header(),
            self.display_name
        )
    }

    fn wrap(&self, kind: MoveListKind, body: Vec<String>) -> Vec<String> {
        let mut list = vec![self.bracket(kind, "Start")];
        list.extend(body);
        list.push(self.bracket(kind, "End"));
        list
    }

    pub fn create_level_learn_list(&self) -> Result<Vec<String>> {
        let moves = self.record.list("Moves")?;
        if moves.len() % 2 != 0 {
            return Err(self.record.invalid("Moves"));
        }
        let mut body = Vec::with_capacity(moves.len() / 2);
        for pair in moves.chunks(2) {
            let (level, move_name) = (pair[0], pair[1]);
            let info = self.lookup.move_info(&title_case(move_name))?;
            body.push(match self.stab_mark(&info.move_type, info.can_have_stab) {
                StabMark::None => format!("{{{{MoveLevel+|{level}|{}}}}}", info.name),
                mark => format!("{{{{MoveLevel+|{level}|{}|{}}}}}", info.name, mark.markup()),
            });
        }
        Ok(self.wrap(MoveListKind::Level, body))
    }

    pub fn create_tm_learn_list(&self) -> Result<Vec<String>> {
        let mut body = Vec::with_capacity(self.teachables.tm.len());
        for move_name in &self.teachables.tm {
            let tm = self.lookup.tm_info(&title_case(move_name))?;
            body.push(match self.stab_mark(&tm.move_type, tm.can_have_stab) {
                StabMark::None => format!("{{{{MoveTM+|TM{}}}}}", tm.number),
                mark => format!("{{{{MoveTM+|TM{}|{}}}}}", tm.number, mark.markup()),
            });
        }
        Ok(self.wrap(MoveListKind::Tm, body))
    }

    /// Egg moves are listed with a placeholder parent column; only the
    /// Field egg group gets Smeargle as a known parent.
    pub fn create_breeding_learn_list(&self) -> Result<Vec<String>> {
        let Some(raw) = self.record.get("EggMoves") else {
            return Ok(self.wrap(MoveListKind::Breed, vec![BREED_NONE.to_string()]));
        };
        let parents = if self.record.get("Compatibility").unwrap_or_default().contains("Field") {
            "{{EM|107|Smeargle}} '''WIP'''"
        } else {
            "'''WIP'''"
        };

        let mut moves: Vec<&str> = raw.split(',').map(str::trim).filter(|m| !m.is_empty()).collect();
        moves.sort_unstable();
        let mut body = Vec::with_capacity(moves.len());
        for move_name in moves {
            let info = self.lookup.move_info(&title_case(move_name))?;
            body.push(match self.stab_mark(&info.move_type, info.can_have_stab) {
                StabMark::None => format!("{{{{MoveBreed+|{parents}|{}}}}}", info.name),
                mark => format!("{{{{MoveBreed+|{parents}|{}|{}}}}}", info.name, mark.markup()),
            });
        }
        Ok(self.wrap(MoveListKind::Breed, body))
    }

    pub fn create_tutor_learn_list(&self) -> Result<Vec<String>> {
        let mut moves: Vec<&str> = self.teachables.tutor.iter().map(String::as_str).collect();
        moves.sort_unstable();
        let mut body = Vec::with_capacity(moves.len());
        for move_name in moves {
            let info = self.lookup.move_info(&title_case(move_name))?;
            let mark = self.stab_mark(&info.move_type, info.can_have_stab);
            body.push(format!("{{{{MoveTutor+|{}|{}|Varies}}}}", info.name, mark.markup()));
        }
        Ok(self.wrap(MoveListKind::Tutor, body))
    }
}
